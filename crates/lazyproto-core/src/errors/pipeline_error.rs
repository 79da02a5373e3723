//! Top-level pipeline error.

use super::error_code::LazyErrorCode;
use super::{ConfigError, ScanError, SchemaError};

/// Errors that can end an annotation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// True when the schema file itself is missing. The CLI maps this to exit code 1.
    pub fn is_schema_missing(&self) -> bool {
        matches!(self, Self::Schema(SchemaError::NotFound { .. }))
    }
}

impl LazyErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
