//! Find the disk choppers of a NeXus entry and mesh each of them.

use chop_core::Result;
use chop_mesh::OffMeshBuilder;

use crate::chopper::{DiskChopper, NX_DISK_CHOPPER};
use crate::config::GeneratorConfig;
use crate::generator::generate_off_mesh;
use crate::tree::{NexusFile, NexusGroup};

/// Group name used by files that predate `NX_class` annotations.
const LEGACY_CHOPPER_NAME: &str = "example_chopper";

pub const NOT_FOUND_MESSAGE: &str = "Unable to find disk choppers.";

/// Mesh produced for one chopper.
#[derive(Debug, Clone)]
pub struct ChopperMesh {
    pub name: String,
    pub mesh: OffMeshBuilder,
}

impl ChopperMesh {
    pub fn off_text(&self) -> String {
        self.mesh.to_off_string()
    }
}

#[derive(Debug, Clone)]
pub enum RecipeOutcome {
    /// No chopper groups were located. Carries a message for the user.
    NotFound(String),
    Meshes(Vec<ChopperMesh>),
}

/// Generates OFF meshes from the `NXdisk_chopper` groups of one entry.
pub struct ChopperRecipe<'a> {
    file: &'a NexusFile,
    entry: String,
    config: GeneratorConfig,
}

impl<'a> ChopperRecipe<'a> {
    pub fn new(file: &'a NexusFile, entry: impl Into<String>, config: GeneratorConfig) -> Self {
        Self {
            file,
            entry: entry.into(),
            config,
        }
    }

    pub fn title(&self) -> &'static str {
        "Create an OFF file from an NXdisk_chopper"
    }

    /// Chopper groups under the entry's `instrument` group.
    pub fn find_disk_choppers(&self) -> Vec<&'a NexusGroup> {
        let file: &'a NexusFile = self.file;
        let Some(instrument) = file
            .root
            .group_at(&self.entry)
            .and_then(|entry| entry.group("instrument"))
        else {
            return Vec::new();
        };

        let choppers = instrument.find_by_class(NX_DISK_CHOPPER);
        if !choppers.is_empty() {
            return choppers;
        }
        instrument.group(LEGACY_CHOPPER_NAME).into_iter().collect()
    }

    /// Mesh every chopper, one at a time with a fresh builder each.
    ///
    /// A missing chopper is reported through [`RecipeOutcome::NotFound`]; a
    /// chopper with unreadable data aborts the whole run.
    pub fn process(&self) -> Result<RecipeOutcome> {
        let groups = self.find_disk_choppers();
        if groups.is_empty() {
            tracing::info!(entry = %self.entry, "{}", NOT_FOUND_MESSAGE);
            return Ok(RecipeOutcome::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        let mut meshes = Vec::with_capacity(groups.len());
        for group in groups {
            let chopper = DiskChopper::from_group(group)?;
            let mesh = generate_off_mesh(&chopper, &self.config)?;
            meshes.push(ChopperMesh {
                name: chopper.name,
                mesh,
            });
        }
        Ok(RecipeOutcome::Meshes(meshes))
    }
}
