//! Structured error types for the KAT runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("hash operation failed: {0}")]
    Hash(#[from] tinyblake_api::Error),

    #[error("mismatch for input {input} - expected: {expected}, got: {actual}")]
    Mismatch {
        input: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, KatError>;
