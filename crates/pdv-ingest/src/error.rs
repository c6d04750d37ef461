//! Error types for record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make an input file unusable.
///
/// Every variant is fatal for a run: no record is classified when loading
/// fails.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// File contents are not valid in the expected encoding.
    #[error("{path} is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    // === JSON Errors ===
    /// File is not well-formed JSON.
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array of records.
    #[error("expected a JSON array of records in {path}, found {found}")]
    NotARecordList { path: PathBuf, found: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
