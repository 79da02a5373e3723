//! Run events and the handler trait the pipeline reports through.

pub mod handler;
pub mod types;

pub use handler::{LazyEventHandler, NoOpHandler};
pub use types::*;
