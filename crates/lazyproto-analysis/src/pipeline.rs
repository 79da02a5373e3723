//! End-to-end annotation run: scan → read → select → annotate.

use std::path::Path;

use lazyproto_core::config::LazyConfig;
use lazyproto_core::constants::LAZY_MARKER;
use lazyproto_core::errors::{PipelineError, SchemaError};
use lazyproto_core::events::*;

use crate::annotator::annotate_file;
use crate::scanner::{NamingRules, ScanStats, UsageScanner};
use crate::schema::read_schema;
use crate::selector::{filter_enum_types, select_candidates, LazyCandidates};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute changes without writing the schema file.
    pub dry_run: bool,
}

/// Outcome of one run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub dry_run: bool,
    pub scan_stats: ScanStats,
    pub getter_count: usize,
    pub type_count: usize,
    pub enum_count: usize,
    pub message_count: usize,
    pub candidates: LazyCandidates,
    /// Lines changed (or that would change). `None` when there were no
    /// candidates and the annotator did not run.
    pub changes: Option<usize>,
}

impl RunReport {
    pub fn total_candidates(&self) -> usize {
        self.candidates.total()
    }

    /// The one-line summary printed after every run.
    pub fn summary_line(&self) -> String {
        match self.changes {
            None => "No lazy candidates found".to_string(),
            Some(changes) => {
                let action = if self.dry_run { "Would add" } else { "Added" };
                format!("{action} {LAZY_MARKER} to {changes} fields")
            }
        }
    }
}

/// Runs the full pipeline against the tree rooted at `root`.
///
/// Fails with `SchemaError::NotFound` before scanning anything if the schema
/// file is missing.
pub fn run(
    root: &Path,
    config: &LazyConfig,
    options: RunOptions,
    handler: &dyn LazyEventHandler,
) -> Result<RunReport, PipelineError> {
    let schema_path = config.schema.resolve(root);
    if !schema_path.exists() {
        return Err(SchemaError::NotFound { path: schema_path }.into());
    }

    handler.on_run_started(&RunStartedEvent {
        root: root.to_path_buf(),
        schema_path: schema_path.clone(),
        dry_run: options.dry_run,
    });

    let rules = NamingRules::from_config(&config.naming);
    let scanner = UsageScanner::new(&config.scan, rules.clone())?;
    let scan = scanner.scan(root);
    handler.on_usage_scanned(&UsageScannedEvent {
        files_scanned: scan.stats.files_scanned,
        files_skipped: scan.stats.files_skipped(),
        getter_count: scan.usage.getters.len(),
        type_count: scan.usage.types.len(),
    });

    let schema = read_schema(&schema_path, &rules)?;
    handler.on_enums_parsed(&EnumsParsedEvent {
        enum_count: schema.enum_names.len(),
    });
    handler.on_types_filtered(&TypesFilteredEvent {
        message_type_count: filter_enum_types(&scan.usage.types, &schema).len(),
    });
    handler.on_messages_parsed(&MessagesParsedEvent {
        message_count: schema.message_count(),
    });

    let candidates = select_candidates(&scan.usage.types, &schema, &scan.usage.getters, handler);
    handler.on_selection_complete(&SelectionCompleteEvent {
        total_candidates: candidates.total(),
    });

    let changes = if candidates.is_empty() {
        None
    } else {
        Some(annotate_file(&schema_path, &candidates, options.dry_run)?)
    };

    Ok(RunReport {
        dry_run: options.dry_run,
        getter_count: scan.usage.getters.len(),
        type_count: scan.usage.types.len(),
        enum_count: schema.enum_names.len(),
        message_count: schema.message_count(),
        scan_stats: scan.stats,
        candidates,
        changes,
    })
}
