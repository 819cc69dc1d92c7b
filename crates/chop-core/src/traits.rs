use crate::error::Result;

/// Validate structural integrity of an input record or mesh entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
