//! Mesh vertex with a builder-assigned index.

use chop_core::VertexIndex;
use chop_math::Point3;

/// A 3D coordinate plus the index it was given when registered with a mesh.
///
/// Construction and registration are two separate steps: `Point::new` leaves
/// the index at its zero placeholder, and `OffMeshBuilder::add_vertex` writes
/// the real one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Point3,
    id: VertexIndex,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            id: VertexIndex::default(),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn id(&self) -> VertexIndex {
        self.id
    }

    /// Overwrites the index. Calling this on a registered point desyncs it from its mesh.
    pub fn assign_id(&mut self, index: VertexIndex) {
        self.id = index;
    }

    /// `"x y z\n"` with each coordinate in shortest round-trip form.
    pub fn to_line_text(&self) -> String {
        format!("{:?} {:?} {:?}\n", self.x(), self.y(), self.z())
    }
}
