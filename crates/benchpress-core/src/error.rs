//! Error types for benchpress

use thiserror::Error;

/// The main error type for import operations
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Element {element} has no face data for '{face}'")]
    MissingFaceData { element: String, face: String },

    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Texture decode error: {0}")]
    TextureDecode(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, BenchError>;
