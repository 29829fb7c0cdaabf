//! Error types for cowscene reading and writing.

use thiserror::Error;

/// Errors that can occur when reading or writing cowscene documents.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are neither valid JSON text encoding nor valid binary
    /// encoding for the scene schema.
    #[error("malformed scene data: not valid JSON ({json}); not valid binary ({binary})")]
    MalformedInput { json: String, binary: String },

    /// Input was well-formed JSON but did not describe a scene document.
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON document had the wrong shape for the schema (e.g. an array where
    /// an object was expected).
    #[error("invalid scene document: {0}")]
    InvalidDocument(String),

    /// OBJ mesh data could not be parsed.
    #[error("invalid OBJ data at line {line}: {reason}")]
    InvalidObj { line: usize, reason: String },
}

/// Result type for cowscene operations.
pub type Result<T> = std::result::Result<T, Error>;
