//! `NXdisk_chopper` records.

use chop_core::traits::Validate;
use chop_core::{ChopError, Result, Tolerance};
use chop_math::AngleUnit;

use crate::tree::NexusGroup;

pub const NX_DISK_CHOPPER: &str = "NXdisk_chopper";

/// Geometry of one disk chopper as read from a NeXus group.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskChopper {
    pub name: String,
    pub radius: f64,
    /// Radius of the bottom of the slits.
    pub slit_height: f64,
    /// Slit boundary angles, in file order.
    pub slit_edges: Vec<f64>,
    /// Raw `units` annotation of `slit_edges`.
    pub units: Vec<u8>,
    /// Declared number of slits, when the file records it.
    pub slits: Option<u64>,
    pub rotation_speed: Option<f64>,
}

impl DiskChopper {
    /// Read radius, slit height and slit edges (with their units) from `group`.
    ///
    /// Any missing or non-numeric value is a [`ChopError::DataRead`].
    pub fn from_group(group: &NexusGroup) -> Result<Self> {
        let radius = group.require_field("radius")?.scalar_f64()?;
        let slit_height = group.require_field("slit_height")?.scalar_f64()?;
        let edges_field = group.require_field("slit_edges")?;
        let slit_edges = edges_field.array_f64()?;
        let units = edges_field
            .attr_bytes("units")
            .ok_or_else(|| {
                ChopError::DataRead(format!(
                    "slit_edges of '{}' carries no units attribute",
                    group.name
                ))
            })?
            .to_vec();

        let slits = group
            .field("slits")
            .map(|field| field.scalar_f64().map(|n| n as u64))
            .transpose()?;
        let rotation_speed = group
            .field("rotation_speed")
            .map(|field| field.scalar_f64())
            .transpose()?;

        Ok(Self {
            name: group.name.clone(),
            radius,
            slit_height,
            slit_edges,
            units,
            slits,
            rotation_speed,
        })
    }

    /// Geometry that is accepted but probably not what the file meant.
    pub fn geometry_warnings(&self, tolerance: Tolerance) -> Vec<String> {
        let mut warnings = Vec::new();
        if tolerance.is_zero(self.radius) || self.radius < 0.0 {
            warnings.push(format!("radius {} is not positive", self.radius));
        }
        if self.slit_height >= self.radius {
            warnings.push(format!(
                "slit height {} is not below radius {}",
                self.slit_height, self.radius
            ));
        }
        if let Some(slits) = self.slits {
            if slits.checked_mul(2) != Some(self.slit_edges.len() as u64) {
                warnings.push(format!(
                    "{} slits declared but {} slit edges given",
                    slits,
                    self.slit_edges.len()
                ));
            }
        }
        let unit = AngleUnit::from_annotation(&self.units);
        let repeated = self
            .slit_edges
            .windows(2)
            .filter(|pair| tolerance.angular_eq(unit.to_radians(pair[0]), unit.to_radians(pair[1])))
            .count();
        if repeated > 0 {
            warnings.push(format!("{} consecutive slit edges coincide", repeated));
        }
        warnings
    }
}

impl Validate for DiskChopper {
    fn validate(&self) -> Result<()> {
        if self.slit_edges.is_empty() {
            return Err(ChopError::Geometry(format!(
                "chopper '{}' has no slit edges",
                self.name
            )));
        }
        if !self.radius.is_finite() || !self.slit_height.is_finite() {
            return Err(ChopError::Geometry(format!(
                "chopper '{}' has non-finite radius or slit height",
                self.name
            )));
        }
        if let Some(edge) = self.slit_edges.iter().find(|e| !e.is_finite()) {
            return Err(ChopError::Geometry(format!(
                "chopper '{}' has non-finite slit edge {}",
                self.name, edge
            )));
        }
        Ok(())
    }
}
