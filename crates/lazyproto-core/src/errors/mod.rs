//! Error handling for lazyproto.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod scan_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::LazyErrorCode;
pub use pipeline_error::PipelineError;
pub use scan_error::ScanError;
pub use schema_error::SchemaError;
