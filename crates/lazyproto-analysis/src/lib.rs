//! lazyproto-analysis: the annotation engine.
//!
//! - Scanner: walks the source tree, collecting accessor names and referenced types
//! - Schema: line-oriented reader for message/enum declarations
//! - Selector: joins usage against the schema into lazy candidates
//! - Annotator: rewrites candidate field lines with the lazy marker
//! - Pipeline: runs the four in order

pub mod annotator;
pub mod pipeline;
pub mod scanner;
pub mod schema;
pub mod selector;

pub use annotator::{annotate_file, annotate_source, Annotation};
pub use pipeline::{run, RunOptions, RunReport};
pub use scanner::{NamingRules, UsageScan, UsageScanner, UsageSets};
pub use schema::{read_schema, Field, SchemaModel};
pub use selector::{select_candidates, snake_to_pascal, LazyCandidates};
