use super::SnapshotStore;
use crate::error::{HirecraftError, Result};
use crate::state::{AppState, StateOverlay};

/// In-memory store for tests. Holds the serialized JSON rather than the
/// state value itself, so the serde path is exercised exactly like the
/// file-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with arbitrary raw content, for corruption and
    /// partial-snapshot scenarios.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, state: &AppState) -> Result<()> {
        let content = serde_json::to_string(state).map_err(HirecraftError::Serialization)?;
        self.raw = Some(content);
        Ok(())
    }

    fn load(&self) -> Result<Option<StateOverlay>> {
        match &self.raw {
            None => Ok(None),
            Some(raw) => {
                let overlay: StateOverlay =
                    serde_json::from_str(raw).map_err(HirecraftError::Serialization)?;
                Ok(Some(overlay))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = MemoryStore::new();
        let state = seed::seed_state();
        store.save(&state).unwrap();
        assert!(store.raw().is_some());

        let overlay = store.load().unwrap().unwrap();
        assert_eq!(seed::seed_state().apply_overlay(overlay), state);
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }
}
