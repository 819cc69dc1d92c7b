//! Face emission between consecutive slit edge point sets.
//!
//! Slit edges come in pairs: an edge at an even position opens a slit and the
//! following odd one closes it. The disk material therefore spans from each
//! odd edge to the next even edge, wrapping from the last edge back to the
//! first when the edge count is even.
//!
//! Under [`FacePolicy::SolidSectors`] each material span becomes a closed
//! annular block between the inner and outer radius, wound counter-clockwise
//! when seen from outside. The arc of a span is split into segments no wider
//! than the configured arc step, so every rim quad bridges less than half a
//! turn. The hub inside the inner radius is not part of the mesh.

use chop_core::traits::Validate;
use chop_core::{ChopError, Result, Tolerance};
use serde::{Deserialize, Serialize};

use crate::off::{OffMeshBuilder, PointSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Emit vertices only; the mesh has no faces.
    #[default]
    VerticesOnly,
    /// Close every material span into an annular block.
    SolidSectors,
}

/// Emits the faces of one chopper's rim band while its edges are visited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorMesher {
    pub policy: FacePolicy,
    pub radius: f64,
    pub slit_height: f64,
    /// Widest arc, in degrees, bridged by one rim quad.
    pub arc_step_degrees: f64,
    pub tolerance: Tolerance,
}

impl SectorMesher {
    pub const DEFAULT_ARC_STEP_DEGREES: f64 = 20.0;

    pub fn new(policy: FacePolicy, radius: f64, slit_height: f64) -> Self {
        Self {
            policy,
            radius,
            slit_height,
            arc_step_degrees: Self::DEFAULT_ARC_STEP_DEGREES,
            tolerance: Tolerance::default(),
        }
    }

    /// Handle the span from `previous` (edge `index - 1`) to `current` (edge `index`).
    pub fn connect(
        &self,
        builder: &mut OffMeshBuilder,
        index: usize,
        previous: &PointSet,
        current: &PointSet,
    ) {
        match self.policy {
            FacePolicy::VerticesOnly => {}
            FacePolicy::SolidSectors => {
                if index % 2 == 0 {
                    self.add_span(builder, previous, current);
                }
                // odd index: the span is a slit, nothing to close
            }
        }
    }

    /// Join the last edge back to the first once every edge has been visited.
    pub fn close(
        &self,
        builder: &mut OffMeshBuilder,
        edge_count: usize,
        last: &PointSet,
        first: &PointSet,
    ) {
        match self.policy {
            FacePolicy::VerticesOnly => {}
            FacePolicy::SolidSectors => {
                if edge_count >= 2 && edge_count % 2 == 0 {
                    self.add_span(builder, last, first);
                } else {
                    tracing::warn!(
                        edge_count,
                        "slit edges do not pair up, leaving the last span open"
                    );
                }
            }
        }
    }

    /// Close the material running counter-clockwise from edge `a` to edge `b`.
    ///
    /// The span is measured modulo a full turn and cut into equal segments.
    /// Rings for the interior cuts are appended to `builder`. Each segment
    /// adds front, back, outer and inner quads; the two end walls follow.
    pub fn add_span(&self, builder: &mut OffMeshBuilder, a: &PointSet, b: &PointSet) {
        let unit = builder.unit();
        let span = (b.edge - a.edge).rem_euclid(unit.full_turn());
        if unit.to_radians(span) <= self.tolerance.angular {
            tracing::warn!(from = a.edge, to = b.edge, "material span is empty, no faces added");
            return;
        }

        let segments = (unit.to_degrees(span) / self.arc_step_degrees).ceil().max(1.0) as usize;
        let mut rings = Vec::with_capacity(segments + 1);
        rings.push(*a);
        for k in 1..segments {
            let theta = a.edge + span * k as f64 / segments as f64;
            rings.push(builder.create_and_add_point_set(self.radius, self.slit_height, theta));
        }
        rings.push(*b);

        for pair in rings.windows(2) {
            let (p, q) = (&pair[0], &pair[1]);
            // front (+z)
            builder.add_face(&[p.outer_front, q.outer_front, q.inner_front, p.inner_front]);
            // back (-z)
            builder.add_face(&[p.outer_back, p.inner_back, q.inner_back, q.outer_back]);
            builder.add_face(&[p.outer_front, p.outer_back, q.outer_back, q.outer_front]);
            builder.add_face(&[p.inner_front, q.inner_front, q.inner_back, p.inner_back]);
        }
        builder.add_face(&[a.outer_front, a.inner_front, a.inner_back, a.outer_back]);
        builder.add_face(&[b.outer_front, b.outer_back, b.inner_back, b.inner_front]);

        tracing::debug!(from = a.edge, to = b.edge, segments, "closed material span");
    }
}

impl Validate for SectorMesher {
    fn validate(&self) -> Result<()> {
        let step = self.arc_step_degrees;
        if !(step.is_finite() && step > 0.0 && step < 180.0) {
            return Err(ChopError::Geometry(format!(
                "arc step {} must lie strictly between 0 and 180 degrees",
                step
            )));
        }
        Ok(())
    }
}
