//! LazyErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable `Display` message.
pub trait LazyErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const SCHEMA_NOT_FOUND: &str = "SCHEMA_NOT_FOUND";
pub const SCHEMA_IO_ERROR: &str = "SCHEMA_IO_ERROR";
