//! Annotator: appends the lazy marker to candidate field lines.
//!
//! The file is re-walked with the same message tracking as the reader. Only
//! depth-1 lines of messages that have candidates are touched, and each line
//! is rewritten at most once.

use std::path::Path;

use lazyproto_core::constants::LAZY_MARKER;
use lazyproto_core::errors::SchemaError;
use lazyproto_core::types::collections::FxHashMap;
use regex::Regex;

use crate::schema::{LineRole, MessageTracker};
use crate::selector::LazyCandidates;

/// Result of annotating schema text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub text: String,
    pub changes: usize,
}

/// Pattern for one candidate: captures the type prefix, `name = ordinal`,
/// and the semicolon. Anything after the semicolon other than whitespace
/// (a trailing comment, an existing option) prevents the match.
fn field_line_regex(field: &str) -> Regex {
    let pattern = format!(
        r"^(\s*[A-Za-z0-9_]+\s+)({}\s*=\s*\d+)(\s*;)\s*$",
        regex::escape(field)
    );
    // The field name is escaped, so the pattern is always valid.
    Regex::new(&pattern).expect("escaped field pattern compiles")
}

/// Splits a raw line into its content and its terminator (`\n`, `\r\n`, or none).
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}

/// Applies `candidates` to schema text without touching the filesystem.
pub fn annotate_source(content: &str, candidates: &LazyCandidates) -> Annotation {
    let compiled: FxHashMap<&str, Vec<Regex>> = candidates
        .iter()
        .map(|(message, fields)| {
            (
                message.as_str(),
                fields.iter().map(|f| field_line_regex(f)).collect(),
            )
        })
        .collect();

    let mut tracker = MessageTracker::new();
    let mut text = String::with_capacity(content.len() + candidates.total() * LAZY_MARKER.len());
    let mut changes = 0;

    for raw in content.split_inclusive('\n') {
        let rewritten = match tracker.advance(raw.trim()) {
            LineRole::Body { depth: 1 } => tracker
                .current()
                .and_then(|message| compiled.get(message))
                .and_then(|patterns| rewrite_line(raw, patterns)),
            _ => None,
        };
        match rewritten {
            Some(line) => {
                changes += 1;
                text.push_str(&line);
            }
            None => text.push_str(raw),
        }
    }

    Annotation { text, changes }
}

fn rewrite_line(raw: &str, patterns: &[Regex]) -> Option<String> {
    if raw.contains(LAZY_MARKER) {
        return None;
    }
    let (body, terminator) = split_terminator(raw);
    patterns.iter().find_map(|pattern| {
        let cap = pattern.captures(body)?;
        Some(format!(
            "{}{} {}{}{}",
            cap.get(1)?.as_str(),
            cap.get(2)?.as_str(),
            LAZY_MARKER,
            cap.get(3)?.as_str(),
            terminator
        ))
    })
}

/// Annotates the schema file in place and returns the number of lines changed.
///
/// Nothing is written on a dry run or when there are no changes. The file is
/// rewritten whole, not patched incrementally.
pub fn annotate_file(
    path: &Path,
    candidates: &LazyCandidates,
    dry_run: bool,
) -> Result<usize, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let annotation = annotate_source(&content, candidates);

    if !dry_run && annotation.changes > 0 {
        std::fs::write(path, annotation.text.as_bytes()).map_err(|source| SchemaError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), changes = annotation.changes, "schema annotated");
    } else {
        tracing::debug!(
            path = %path.display(),
            changes = annotation.changes,
            dry_run,
            "schema left untouched"
        );
    }

    Ok(annotation.changes)
}
