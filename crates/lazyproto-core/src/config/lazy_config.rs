//! Top-level lazyproto configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{NamingConfig, ScanConfig, SchemaConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LAZYPROTO_*`)
/// 2. Project config (`lazyproto.toml` in the tree root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LazyConfig {
    pub schema: SchemaConfig,
    pub scan: ScanConfig,
    pub naming: NamingConfig,
}

impl LazyConfig {
    /// Load configuration for the tree rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        ::tracing::debug!(
            schema = %config.schema.resolve(root).display(),
            namespace = config.scan.effective_namespace(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LazyConfig) -> Result<(), ConfigError> {
        if let Some(ref namespace) = config.scan.namespace {
            if namespace.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.namespace".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.scan.extensions.iter().any(|e| e.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.extensions".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("naming.message_suffix", &config.naming.message_suffix),
            ("naming.response_suffix", &config.naming.response_suffix),
        ] {
            if value.as_deref().is_some_and(|v| v.is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.schema.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "schema.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LazyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LazyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut LazyConfig, other: &LazyConfig) {
        if other.schema.path.is_some() {
            base.schema.path = other.schema.path.clone();
        }

        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if other.scan.namespace.is_some() {
            base.scan.namespace = other.scan.namespace.clone();
        }
        if other.scan.respect_ignore_files.is_some() {
            base.scan.respect_ignore_files = other.scan.respect_ignore_files;
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        if other.naming.message_suffix.is_some() {
            base.naming.message_suffix = other.naming.message_suffix.clone();
        }
        if other.naming.response_suffix.is_some() {
            base.naming.response_suffix = other.naming.response_suffix.clone();
        }
        if !other.naming.request_verb_prefixes.is_empty() {
            base.naming.request_verb_prefixes = other.naming.request_verb_prefixes.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LAZYPROTO_SCHEMA`, `LAZYPROTO_NAMESPACE`, etc.
    fn apply_env_overrides(config: &mut LazyConfig) {
        if let Ok(val) = std::env::var("LAZYPROTO_SCHEMA") {
            config.schema.path = Some(val);
        }
        if let Ok(val) = std::env::var("LAZYPROTO_NAMESPACE") {
            config.scan.namespace = Some(val);
        }
        if let Ok(val) = std::env::var("LAZYPROTO_EXTENSIONS") {
            let extensions: Vec<String> = val
                .split(',')
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect();
            if !extensions.is_empty() {
                config.scan.extensions = extensions;
            }
        }
        if let Ok(val) = std::env::var("LAZYPROTO_RESPECT_IGNORE") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.respect_ignore_files = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
