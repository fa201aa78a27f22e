//! Error handling for the resume tailor engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, TailorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TailorError {
    fn from(err: anyhow::Error) -> Self {
        TailorError::Pipeline(err.to_string())
    }
}
