//! Vertex/face accumulation and OFF serialization.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chop_core::{Result, VertexIndex};
use chop_math::{polar_to_cartesian, Aabb3, AngleUnit};

use crate::point::Point;

/// The four vertices produced for one slit edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSet {
    /// Angle of the edge, in the unit of the builder that made the set.
    pub edge: f64,
    pub outer_front: Point,
    pub outer_back: Point,
    pub inner_front: Point,
    pub inner_back: Point,
}

impl PointSet {
    /// Points in registration order: outer-front, outer-back, inner-front, inner-back.
    pub fn to_array(&self) -> [Point; 4] {
        [self.outer_front, self.outer_back, self.inner_front, self.inner_back]
    }
}

/// Accumulates vertices and faces for one chopper and writes them as OFF text.
#[derive(Debug, Clone)]
pub struct OffMeshBuilder {
    z: f64,
    unit: AngleUnit,
    vertices: Vec<Point>,
    vertex_counter: usize,
    faces: Vec<Vec<VertexIndex>>,
}

impl OffMeshBuilder {
    /// `z` is the half depth of the disk; `units` is the raw unit annotation of the slit edges.
    pub fn new(z: f64, units: &[u8]) -> Self {
        Self::with_unit(z, AngleUnit::from_annotation(units))
    }

    pub fn with_unit(z: f64, unit: AngleUnit) -> Self {
        Self {
            z,
            unit,
            vertices: Vec::new(),
            vertex_counter: 0,
            faces: Vec::new(),
        }
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Vec<VertexIndex>] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_counter
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn find_x(&self, radius: f64, theta: f64) -> f64 {
        polar_to_cartesian(radius, theta, self.unit).x
    }

    pub fn find_y(&self, radius: f64, theta: f64) -> f64 {
        polar_to_cartesian(radius, theta, self.unit).y
    }

    /// Front (+z) and back (-z) copies of the planar position at `(r, theta)`.
    /// Neither point is registered.
    pub fn create_mirrored_points(&self, r: f64, theta: f64) -> (Point, Point) {
        let xy = polar_to_cartesian(r, theta, self.unit);
        (Point::new(xy.x, xy.y, self.z), Point::new(xy.x, xy.y, -self.z))
    }

    /// Create and register the four vertices of one slit edge.
    ///
    /// The returned points carry consecutive indices `n..n + 4`, where `n` is
    /// the vertex count before the call, in the order outer-front,
    /// outer-back, inner-front, inner-back.
    pub fn create_and_add_point_set(
        &mut self,
        radius: f64,
        slit_height: f64,
        slit_edge: f64,
    ) -> PointSet {
        let first = self.vertex_counter;
        let (outer_front, outer_back) = self.create_mirrored_points(radius, slit_edge);
        let (inner_front, inner_back) = self.create_mirrored_points(slit_height, slit_edge);

        let set = PointSet {
            edge: slit_edge,
            outer_front: self.add_vertex(outer_front),
            outer_back: self.add_vertex(outer_back),
            inner_front: self.add_vertex(inner_front),
            inner_back: self.add_vertex(inner_back),
        };
        debug_assert!(set
            .to_array()
            .iter()
            .enumerate()
            .all(|(k, p)| p.id().value() == first + k));

        tracing::debug!(edge = slit_edge, first_id = first, "added point set");
        set
    }

    /// Register `point` under the next free index and return the registered copy.
    pub fn add_vertex(&mut self, mut point: Point) -> Point {
        point.assign_id(VertexIndex::new(self.vertex_counter));
        self.vertices.push(point);
        self.vertex_counter += 1;
        point
    }

    /// Register every point in order, writing the assigned indices back.
    pub fn add_vertices(&mut self, points: &mut [Point]) {
        for point in points.iter_mut() {
            *point = self.add_vertex(*point);
        }
    }

    /// Append a face through `points` in the given order. Winding is not checked.
    pub fn add_face(&mut self, points: &[Point]) {
        self.faces.push(points.iter().map(Point::id).collect());
    }

    pub fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.vertices.iter().map(|p| p.position))
    }

    /// Render the mesh as OFF text. Each call builds the text from scratch.
    pub fn to_off_string(&self) -> String {
        let mut out = String::from("OFF\n");
        out.push_str(&format!("{} {} 0\n", self.vertices.len(), self.faces.len()));
        for vertex in &self.vertices {
            out.push_str(&vertex.to_line_text());
        }
        for face in &self.faces {
            out.push_str(&face_line(face));
        }
        out
    }

    /// Stream the same text as [`to_off_string`](Self::to_off_string).
    pub fn write_off<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "OFF")?;
        writeln!(writer, "{} {} 0", self.vertices.len(), self.faces.len())?;
        for vertex in &self.vertices {
            writer.write_all(vertex.to_line_text().as_bytes())?;
        }
        for face in &self.faces {
            writer.write_all(face_line(face).as_bytes())?;
        }
        writer.flush()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_off(BufWriter::new(file))?;
        Ok(())
    }
}

fn face_line(face: &[VertexIndex]) -> String {
    let mut line = face.len().to_string();
    for id in face {
        line.push(' ');
        line.push_str(&id.to_string());
    }
    line.push('\n');
    line
}
