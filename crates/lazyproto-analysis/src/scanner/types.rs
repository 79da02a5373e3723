//! Scanner data types: UsageSets, ScanStats, UsageScan.

use std::collections::BTreeSet;

use lazyproto_core::types::collections::FxHashSet;

/// What the source tree uses.
#[derive(Debug, Clone, Default)]
pub struct UsageSets {
    /// Accessor names with the `Get` prefix stripped (`GetHeader()` → `Header`).
    pub getters: FxHashSet<String>,
    /// Referenced types that passed the naming heuristic. Sorted for stable reports.
    pub types: BTreeSet<String>,
}

/// Aggregate statistics for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped_large: usize,
    pub files_unreadable: usize,
    pub bytes_read: u64,
    /// Non-fatal errors, rendered as `[CODE] message`.
    pub errors: Vec<String>,
}

impl ScanStats {
    pub fn files_skipped(&self) -> usize {
        self.files_skipped_large + self.files_unreadable
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageScan {
    pub usage: UsageSets,
    pub stats: ScanStats,
}
