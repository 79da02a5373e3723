//! Type naming conventions used to classify schema types.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MESSAGE_SUFFIX, DEFAULT_REQUEST_VERB_PREFIXES, DEFAULT_RESPONSE_SUFFIX,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix of every message type. Default: `Proto`.
    pub message_suffix: Option<String>,
    /// Suffix of response messages. Default: `OutProto`.
    pub response_suffix: Option<String>,
    /// Verb prefixes marking outbound request messages.
    #[serde(default)]
    pub request_verb_prefixes: Vec<String>,
}

impl NamingConfig {
    pub fn effective_message_suffix(&self) -> &str {
        self.message_suffix.as_deref().unwrap_or(DEFAULT_MESSAGE_SUFFIX)
    }

    pub fn effective_response_suffix(&self) -> &str {
        self.response_suffix.as_deref().unwrap_or(DEFAULT_RESPONSE_SUFFIX)
    }

    pub fn effective_request_verb_prefixes(&self) -> Vec<String> {
        if self.request_verb_prefixes.is_empty() {
            DEFAULT_REQUEST_VERB_PREFIXES.iter().map(|p| p.to_string()).collect()
        } else {
            self.request_verb_prefixes.clone()
        }
    }
}
