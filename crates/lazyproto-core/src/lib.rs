//! lazyproto-core: shared foundation for the lazyproto annotator.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Config: TOML-based, layered resolution (env > project file > defaults)
//! - Tracing: `LAZYPROTO_LOG` driven subscriber setup
//! - Events: handler trait the pipeline reports progress through
//! - Constants: primitive type names and the lazy marker token

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
