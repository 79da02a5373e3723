//! Usage scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE, DEFAULT_NAMESPACE};

/// Configuration for the source usage scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions to scan, without the dot. Default: `["go"]`.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Package qualifier of generated types. Default: `pogo`.
    pub namespace: Option<String>,
    /// Honour `.gitignore`/`.ignore` files and skip hidden entries. Default: false.
    pub respect_ignore_files: Option<bool>,
    /// Extra glob patterns to exclude from the scan.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Maximum file size in bytes. Default: 10 MiB.
    pub max_file_size: Option<u64>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions.clone()
        }
    }

    pub fn effective_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn effective_respect_ignore_files(&self) -> bool {
        self.respect_ignore_files.unwrap_or(false)
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
