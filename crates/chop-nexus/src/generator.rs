//! Drive an [`OffMeshBuilder`] across a chopper's slit edges.

use chop_core::traits::Validate;
use chop_core::Result;
use chop_mesh::{OffMeshBuilder, SectorMesher};

use crate::chopper::DiskChopper;
use crate::config::GeneratorConfig;

/// Build the mesh of one chopper.
///
/// Every slit edge contributes one point set, in file order. The configured
/// face policy sees each consecutive pair of point sets and finally the pair
/// (last, first). Solid sectors append extra rings after those point sets.
pub fn generate_off_mesh(chopper: &DiskChopper, config: &GeneratorConfig) -> Result<OffMeshBuilder> {
    chopper.validate()?;
    let mesher = SectorMesher {
        arc_step_degrees: config.arc_step_degrees,
        tolerance: config.tolerance,
        ..SectorMesher::new(config.face_policy, chopper.radius, chopper.slit_height)
    };
    mesher.validate()?;
    for warning in chopper.geometry_warnings(config.tolerance) {
        tracing::warn!(chopper = %chopper.name, "{}", warning);
    }

    tracing::debug!(
        chopper = %chopper.name,
        edges = chopper.slit_edges.len(),
        rotation_speed = ?chopper.rotation_speed,
        "meshing chopper"
    );

    let mut builder = OffMeshBuilder::new(config.half_depth, &chopper.units);
    let (radius, slit_height) = (chopper.radius, chopper.slit_height);
    let edges = &chopper.slit_edges;

    let first = builder.create_and_add_point_set(radius, slit_height, edges[0]);
    let mut previous = first;

    for (i, &edge) in edges.iter().enumerate().skip(1) {
        let current = builder.create_and_add_point_set(radius, slit_height, edge);
        mesher.connect(&mut builder, i, &previous, &current);
        previous = current;
    }
    mesher.close(&mut builder, edges.len(), &previous, &first);

    tracing::info!(
        chopper = %chopper.name,
        vertices = builder.vertex_count(),
        faces = builder.face_count(),
        "generated OFF mesh"
    );
    Ok(builder)
}
