use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a vertex cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |bb, p| {
            Self::new(bb.min.min(p), bb.max.max(p))
        }))
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}

impl std::fmt::Display for Aabb3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}] .. [{}, {}, {}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let bb = Aabb3::from_points([
            dvec3(1.0, -2.0, 3.0),
            dvec3(-1.0, 4.0, -3.0),
            dvec3(0.0, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bb.min, dvec3(-1.0, -2.0, -3.0));
        assert_eq!(bb.max, dvec3(1.0, 4.0, 3.0));
        assert_eq!(bb.extents(), dvec3(2.0, 6.0, 6.0));
    }

    #[test]
    fn test_empty() {
        assert!(Aabb3::from_points(std::iter::empty()).is_none());
    }
}
