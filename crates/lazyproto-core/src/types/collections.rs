//! Re-exports of the collection types used across lazyproto.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::{BTreeMap, BTreeSet};
