use std::fs;
use std::path::{Path, PathBuf};

use super::SnapshotStore;
use crate::error::{HirecraftError, Result};
use crate::state::{AppState, StateOverlay};

/// Production store: the whole snapshot lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(HirecraftError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, state: &AppState) -> Result<()> {
        self.ensure_parent_dir()?;
        let content =
            serde_json::to_string_pretty(state).map_err(HirecraftError::Serialization)?;
        // Write to a sibling temp file first so a crash mid-write never
        // truncates the only copy of the snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(HirecraftError::Io)?;
        fs::rename(&tmp, &self.path).map_err(HirecraftError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StateOverlay>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(HirecraftError::Io)?;
        let overlay: StateOverlay =
            serde_json::from_str(&content).map_err(HirecraftError::Serialization)?;
        Ok(Some(overlay))
    }
}
