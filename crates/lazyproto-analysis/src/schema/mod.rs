//! Schema subsystem: line-oriented reading of `.proto` message and enum declarations.
//!
//! This is deliberately not a grammar-aware parser. Messages are delimited by
//! counting braces per line, and only fields declared directly in a message
//! body (depth 1) are extracted.

pub mod patterns;
pub mod reader;
pub mod tracker;
pub mod types;

pub use reader::{collect_message_names, parse_enum_names, parse_messages, read_schema};
pub use tracker::{LineRole, MessageTracker};
pub use types::{Field, SchemaModel};
