//! # Configuration
//!
//! Settings are layered: environment variables (`HIRECRAFT__*`) override the
//! TOML config file in the OS config directory, which overrides compiled
//! defaults. Path resolution (data and config directories) goes through the
//! `directories` crate.

use std::path::PathBuf;

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{HirecraftError, Result};

/// Configuration for hirecraft, stored in `hirecraft.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HirecraftConfig {
    /// Directory holding the state snapshot. When unset, the OS data
    /// directory for hirecraft is used.
    #[config(env = "HIRECRAFT__DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Snapshot filename inside the data directory.
    #[config(default = "state.json", env = "HIRECRAFT__SNAPSHOT_FILE")]
    pub snapshot_file: String,

    /// Directory markdown exports are written to. When unset, exports land
    /// in the current working directory.
    #[config(env = "HIRECRAFT__EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}

impl Default for HirecraftConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            snapshot_file: "state.json".to_string(),
            export_dir: None,
        }
    }
}

impl HirecraftConfig {
    /// Load layered configuration: env, then config file, then defaults.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file_path() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| HirecraftError::Config(e.to_string()))
    }

    /// Full path of the snapshot file.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.snapshot_file))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "hirecraft")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                HirecraftError::Config("cannot determine a data directory".to_string())
            })
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hirecraft").map(|dirs| dirs.config_dir().join("hirecraft.toml"))
}
