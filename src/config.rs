//! User configuration loaded from a small JSON file.

use crate::storage::DEFAULT_FILE_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File name suggested when saving.
    pub default_file_name: String,
    /// Directory for the suggested save path. Current directory when unset.
    pub save_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            save_dir: None,
        }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the per-user default location.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Suggested destination for a save without an explicit path.
    pub fn default_save_path(&self) -> PathBuf {
        let dir = self
            .save_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        dir.join(&self.default_file_name)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("name-sorter").join("config.json"))
}
