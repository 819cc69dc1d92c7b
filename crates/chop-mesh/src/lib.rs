pub mod faces;
pub mod off;
pub mod point;

pub use faces::{FacePolicy, SectorMesher};
pub use off::{OffMeshBuilder, PointSet};
pub use point::Point;
