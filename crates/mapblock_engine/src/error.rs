//! Unified error types for mapblock_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for map block operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file '{path}': {message}")]
    OpenFile { path: PathBuf, message: String },

    // === Loading Errors ===
    #[error("Unsupported map block version: {version}")]
    UnsupportedVersion { version: i32 },

    #[error("Invalid map block dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Map block {width}x{height} needs {bytes} bytes, the limit is {max_bytes}")]
    PayloadTooLarge { width: i32, height: i32, bytes: u64, max_bytes: u64 },

    #[error("Map block data length mismatch: expected {expected} bytes, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    #[error("{count} unexpected bytes after map block data")]
    TrailingData { count: usize },

    // === Editing Errors ===
    #[error("No map block loaded, reload required")]
    NoMapBlock,

    #[error("Map block is invalid")]
    InvalidMapBlock,

    #[error("No file name to save the map block to")]
    NoFileName,

    // === Options Errors ===
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },
}

/// Result type alias for map block operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an open file error
    pub fn open_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::OpenFile {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn invalid_options(msg: impl std::fmt::Display) -> Self {
        Self::InvalidOptions { message: msg.to_string() }
    }
}
