use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartgenError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Incompatible genotype: {0}")]
    IncompatibleGenotype(String),

    #[error("Gene index {idx} is out of range for a genotype of length {len}")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CartgenError>;
