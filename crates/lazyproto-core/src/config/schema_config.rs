//! Schema file location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SCHEMA_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchemaConfig {
    /// Schema path, relative to the tree root unless absolute. Default: `vbase.proto`.
    pub path: Option<String>,
}

impl SchemaConfig {
    /// Resolves the schema path against the tree root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let path = Path::new(self.path.as_deref().unwrap_or(DEFAULT_SCHEMA_PATH));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}
