pub mod chopper;
pub mod config;
pub mod generator;
pub mod recipe;
pub mod tree;

pub use chopper::DiskChopper;
pub use config::GeneratorConfig;
pub use generator::generate_off_mesh;
pub use recipe::{ChopperMesh, ChopperRecipe, RecipeOutcome};
pub use tree::{NexusFile, NexusGroup};
