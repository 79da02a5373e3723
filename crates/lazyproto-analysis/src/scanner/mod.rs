//! Scanner subsystem: source tree walk and usage extraction.
//!
//! Produces the two usage sets the rest of the pipeline joins against the
//! schema: accessor names seen in calls, and generated types referenced by
//! qualified name.

pub mod naming;
pub mod types;
pub mod usage;
pub mod walker;

pub use naming::NamingRules;
pub use types::{UsageScan, UsageSets, ScanStats};
pub use usage::UsageExtractor;
pub use walker::UsageScanner;
