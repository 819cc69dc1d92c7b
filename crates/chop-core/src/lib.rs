pub mod error;
pub mod id;
pub mod tolerance;
pub mod traits;

pub use error::{ChopError, Result};
pub use id::VertexIndex;
pub use tolerance::Tolerance;
