use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the persisted session record lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory, relative to the config dir unless absolute
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.dir cannot be empty"));
        }

        let dir = Path::new(&self.dir);
        if !dir.is_absolute() && self.dir.contains("..") {
            return Err(ConfigError::storage(
                "relative storage.dir cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        let dir = Path::new(&self.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            config_dir.join(dir)
        }
    }
}
