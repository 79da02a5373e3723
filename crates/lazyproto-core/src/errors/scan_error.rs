//! Usage scanner errors.
//!
//! These never abort a scan. The scanner records them on its result and
//! carries on with whatever files it could read.

use std::path::PathBuf;

use super::error_code::{self, LazyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Walk error under {root}: {message}")]
    WalkFailed { root: PathBuf, message: String },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnorePattern { pattern: String, message: String },

    #[error("Namespace '{namespace}' does not form a valid pattern: {message}")]
    InvalidNamespace { namespace: String, message: String },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },
}

impl LazyErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
