//! Error types for FlyDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::TableKey;

/// Result type alias using FlyDbError
pub type Result<T> = std::result::Result<T, FlyDbError>;

/// Unified error type for FlyDB operations
#[derive(Debug, Error)]
pub enum FlyDbError {
    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("Unknown table key: {0}")]
    UnknownKey(usize),

    #[error("Type mismatch: table {expected} cannot hold a {found} record")]
    TypeMismatch { expected: TableKey, found: TableKey },

    // -------------------------------------------------------------------------
    // Ingestion Errors
    // -------------------------------------------------------------------------
    #[error("Malformed {key} line: expected {expected} fields, got {found}")]
    MalformedLine {
        key: TableKey,
        expected: usize,
        found: usize,
    },

    #[error("File unavailable: {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range (table holds {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Table capacity of {capacity} rows exceeded")]
    CapacityExceeded { capacity: usize },

    // -------------------------------------------------------------------------
    // Screen Errors
    // -------------------------------------------------------------------------
    #[error("Terminal error: {0}")]
    Terminal(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
