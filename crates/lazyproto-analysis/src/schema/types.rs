//! Schema data types.

use lazyproto_core::types::collections::{FxHashMap, FxHashSet};

/// A message-typed field declared directly in a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub declared_type: String,
    pub ordinal: u32,
    /// 1-based line number in the schema file.
    pub source_line: usize,
}

/// Everything the selector needs from one schema file.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    pub enum_names: FxHashSet<String>,
    /// Message name → eligible fields in declaration order. A name declared
    /// twice keeps the later body.
    pub messages: FxHashMap<String, Vec<Field>>,
}

impl SchemaModel {
    pub fn is_enum(&self, name: &str) -> bool {
        self.enum_names.contains(name)
    }

    pub fn fields(&self, message: &str) -> Option<&[Field]> {
        self.messages.get(message).map(Vec::as_slice)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
