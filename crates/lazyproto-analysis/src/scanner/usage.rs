//! Regex-based usage extraction from source text.

use std::collections::BTreeSet;

use lazyproto_core::errors::ScanError;
use lazyproto_core::types::collections::FxHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::naming::NamingRules;

/// Zero-argument accessor call: `.GetFooBar()`.
static GETTER_CALL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.Get([A-Z][a-zA-Z0-9_]*)\(\)").unwrap());

/// Extracts accessor names and qualified type references from source text.
#[derive(Debug, Clone)]
pub struct UsageExtractor {
    type_ref_regex: Regex,
    rules: NamingRules,
}

impl UsageExtractor {
    /// Builds an extractor for types qualified by `namespace` (e.g. `pogo.FooProto`).
    pub fn new(namespace: &str, rules: NamingRules) -> Result<Self, ScanError> {
        let pattern = format!(r"{}\.([A-Z][a-zA-Z0-9_]*)", regex::escape(namespace));
        let type_ref_regex = Regex::new(&pattern).map_err(|e| ScanError::InvalidNamespace {
            namespace: namespace.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            type_ref_regex,
            rules,
        })
    }

    /// Adds every accessor name called in `source` to `getters`.
    pub fn extract_getters(&self, source: &str, getters: &mut FxHashSet<String>) {
        for cap in GETTER_CALL_REGEX.captures_iter(source) {
            if let Some(name) = cap.get(1) {
                getters.insert(name.as_str().to_string());
            }
        }
    }

    /// Adds every referenced type that passes the inbound-message heuristic to `types`.
    pub fn extract_types(&self, source: &str, types: &mut BTreeSet<String>) {
        for cap in self.type_ref_regex.captures_iter(source) {
            if let Some(name) = cap.get(1) {
                let name = name.as_str();
                if self.rules.is_inbound_message_type(name) {
                    types.insert(name.to_string());
                }
            }
        }
    }
}
