use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChopError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Data read error: {0}")]
    DataRead(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, ChopError>;
