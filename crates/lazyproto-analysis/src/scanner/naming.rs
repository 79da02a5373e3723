//! Naming heuristics for generated message types.
//!
//! Everything suffix- or prefix-based lives here so the rules can be tested
//! and swapped without touching the scanner or the schema reader.

use lazyproto_core::config::NamingConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    pub message_suffix: String,
    pub response_suffix: String,
    pub request_verb_prefixes: Vec<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

impl NamingRules {
    pub fn from_config(config: &NamingConfig) -> Self {
        Self {
            message_suffix: config.effective_message_suffix().to_string(),
            response_suffix: config.effective_response_suffix().to_string(),
            request_verb_prefixes: config.effective_request_verb_prefixes(),
        }
    }

    /// True if `type_name` follows the message naming convention.
    pub fn has_message_suffix(&self, type_name: &str) -> bool {
        type_name.ends_with(&self.message_suffix)
    }

    /// Decides whether a referenced type is one the code decodes (inbound)
    /// rather than one it only builds and sends.
    ///
    /// Names containing `_` are dropped first: generated enum values are
    /// `SCREAMING_SNAKE`. Multi-word message names joined by `_` are lost to
    /// the same filter.
    pub fn is_inbound_message_type(&self, type_name: &str) -> bool {
        if type_name.contains('_') {
            return false;
        }
        if type_name.ends_with(&self.response_suffix) {
            return true;
        }
        self.has_message_suffix(type_name)
            && !self
                .request_verb_prefixes
                .iter()
                .any(|verb| type_name.starts_with(verb.as_str()))
    }
}
