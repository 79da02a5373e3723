//! Schema file errors (reading and annotating).

use std::path::PathBuf;

use super::error_code::{self, LazyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Proto file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LazyErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::SCHEMA_NOT_FOUND,
            Self::Read { .. } | Self::Write { .. } => error_code::SCHEMA_IO_ERROR,
        }
    }
}
