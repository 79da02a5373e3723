//! Source tree walker driving the usage extractor.
//!
//! A scan never fails: unreadable directories and files are recorded on
//! `ScanStats::errors` and the walk carries on. An empty result therefore
//! means "nothing found", not "something broke".

use std::fs;
use std::path::Path;

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use lazyproto_core::config::ScanConfig;
use lazyproto_core::errors::{LazyErrorCode, ScanError};

use super::naming::NamingRules;
use super::types::{ScanStats, UsageScan, UsageSets};
use super::usage::UsageExtractor;

/// Walks a source tree and collects accessor and type usage.
pub struct UsageScanner {
    config: ScanConfig,
    extractor: UsageExtractor,
    suffixes: Vec<String>,
}

impl UsageScanner {
    pub fn new(config: &ScanConfig, rules: NamingRules) -> Result<Self, ScanError> {
        let extractor = UsageExtractor::new(config.effective_namespace(), rules)?;
        let suffixes = config
            .effective_extensions()
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect();
        Ok(Self {
            config: config.clone(),
            extractor,
            suffixes,
        })
    }

    /// Scan every matching file under `root`.
    pub fn scan(&self, root: &Path) -> UsageScan {
        let mut usage = UsageSets::default();
        let mut stats = ScanStats::default();

        let respect_ignores = self.config.effective_respect_ignore_files();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(respect_ignores)
            .follow_links(self.config.effective_follow_symlinks())
            .sort_by_file_name(|a, b| a.cmp(b));

        if !self.config.extra_ignore.is_empty() {
            let mut overrides = OverrideBuilder::new(root);
            for pattern in &self.config.extra_ignore {
                if let Err(e) = overrides.add(&format!("!{pattern}")) {
                    record(
                        &mut stats,
                        ScanError::InvalidIgnorePattern {
                            pattern: pattern.clone(),
                            message: e.to_string(),
                        },
                    );
                }
            }
            match overrides.build() {
                Ok(built) => {
                    builder.overrides(built);
                }
                Err(e) => record(
                    &mut stats,
                    ScanError::WalkFailed {
                        root: root.to_path_buf(),
                        message: e.to_string(),
                    },
                ),
            }
        }

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    record(
                        &mut stats,
                        ScanError::WalkFailed {
                            root: root.to_path_buf(),
                            message: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !self.matches_extension(path) {
                continue;
            }
            self.scan_file(path, &mut usage, &mut stats);
        }

        tracing::info!(
            root = %root.display(),
            files = stats.files_scanned,
            getters = usage.getters.len(),
            types = usage.types.len(),
            errors = stats.errors.len(),
            "usage scan complete"
        );

        UsageScan { usage, stats }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    fn scan_file(&self, path: &Path, usage: &mut UsageSets, stats: &mut ScanStats) {
        let max = self.config.effective_max_file_size();
        match fs::metadata(path) {
            Ok(meta) if meta.len() > max => {
                tracing::debug!(path = %path.display(), size = meta.len(), "skipping large file");
                stats.files_skipped_large += 1;
                stats.errors.push(
                    ScanError::MaxFileSizeExceeded {
                        path: path.to_path_buf(),
                        size: meta.len(),
                        max,
                    }
                    .coded_string(),
                );
                return;
            }
            Ok(_) => {}
            Err(source) => {
                stats.files_unreadable += 1;
                record(
                    stats,
                    ScanError::IoError {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                return;
            }
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => {
                stats.files_unreadable += 1;
                record(
                    stats,
                    ScanError::IoError {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                return;
            }
        };

        stats.files_scanned += 1;
        stats.bytes_read += bytes.len() as u64;

        let source = String::from_utf8_lossy(&bytes);
        self.extractor.extract_getters(&source, &mut usage.getters);
        self.extractor.extract_types(&source, &mut usage.types);
        tracing::trace!(path = %path.display(), "scanned");
    }
}

fn record(stats: &mut ScanStats, error: ScanError) {
    tracing::warn!(code = error.error_code(), "{error}");
    stats.errors.push(error.coded_string());
}
