//! Schema reader: enum names, message names, and message fields.

use std::path::Path;

use lazyproto_core::constants::{is_primitive, LAZY_MARKER, REPEATED_KEYWORD};
use lazyproto_core::errors::SchemaError;
use lazyproto_core::types::collections::{FxHashMap, FxHashSet};

use super::patterns::{enum_opener, field_decl, message_opener};
use super::tracker::{LineRole, MessageTracker};
use super::types::{Field, SchemaModel};
use crate::scanner::NamingRules;

/// Reads and parses the schema file at `path`.
pub fn read_schema(path: &Path, rules: &NamingRules) -> Result<SchemaModel, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SchemaModel::parse(&content, rules))
}

impl SchemaModel {
    pub fn parse(content: &str, rules: &NamingRules) -> Self {
        let enum_names = parse_enum_names(content);
        let messages = parse_messages(content, &enum_names, rules);
        tracing::debug!(
            enums = enum_names.len(),
            messages = messages.len(),
            "schema parsed"
        );
        Self {
            enum_names,
            messages,
        }
    }
}

/// Names of every `enum` declared anywhere in the file, nested ones included.
pub fn parse_enum_names(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .filter_map(|line| enum_opener(line.trim()))
        .map(str::to_string)
        .collect()
}

/// Names of every `message` declared anywhere in the file, nested ones included.
pub fn collect_message_names(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .filter_map(|line| message_opener(line.trim()))
        .map(str::to_string)
        .collect()
}

/// Walks top-level messages and keeps their direct, message-typed, non-repeated fields.
pub fn parse_messages(
    content: &str,
    enum_names: &FxHashSet<String>,
    rules: &NamingRules,
) -> FxHashMap<String, Vec<Field>> {
    let message_names = collect_message_names(content);
    let mut messages = FxHashMap::default();
    let mut tracker = MessageTracker::new();
    let mut fields = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        match tracker.advance(line) {
            LineRole::Outside => {}
            LineRole::Opened(_) => fields = Vec::new(),
            LineRole::Closed(name) => {
                if messages.contains_key(&name) {
                    tracing::debug!(message = %name, "duplicate message declaration, keeping the later one");
                }
                messages.insert(name, std::mem::take(&mut fields));
            }
            LineRole::Body { depth } => {
                if depth != 1 || line.contains(LAZY_MARKER) || line.starts_with(REPEATED_KEYWORD) {
                    continue;
                }
                let Some(decl) = field_decl(line) else {
                    continue;
                };
                let is_message = (message_names.contains(decl.declared_type)
                    || rules.has_message_suffix(decl.declared_type))
                    && !is_primitive(decl.declared_type)
                    && !enum_names.contains(decl.declared_type);
                if is_message {
                    fields.push(Field {
                        name: decl.name.to_string(),
                        declared_type: decl.declared_type.to_string(),
                        ordinal: decl.ordinal,
                        source_line: idx + 1,
                    });
                }
            }
        }
    }

    messages
}
