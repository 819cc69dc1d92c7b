/// Thresholds below which chopper geometry counts as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Lengths (radius, slit height) at or below this are treated as zero.
    pub linear: f64,
    /// Angle spans (in radians) at or below this are treated as empty.
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn is_zero(self, length: f64) -> bool {
        length.abs() < self.linear
    }

    /// Compare two angles given in radians.
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }
}
