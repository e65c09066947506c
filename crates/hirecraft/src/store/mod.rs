//! # Snapshot Storage
//!
//! Persistence is whole-state: the complete [`AppState`] is serialized to
//! JSON after every transition and read back once at startup. The
//! [`SnapshotStore`] trait is the injection point, so the engine and its
//! tests never touch real storage.
//!
//! Loading yields a [`StateOverlay`] rather than an `AppState`: a snapshot
//! written by an older build may be missing top-level fields, and
//! [`load_or_seed`] fills those from the seed state field-by-field. A
//! snapshot that fails to parse at all is treated like no snapshot — the
//! failure is logged and the seed state wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, one JSON file on disk.
//! - [`memory::MemoryStore`]: tests, JSON held in a string so serialization
//!   behavior matches the file path exactly.

use crate::error::Result;
use crate::seed;
use crate::state::{AppState, StateOverlay};

pub mod fs;
pub mod memory;

/// Abstract whole-state persistence.
pub trait SnapshotStore {
    /// Persist the complete snapshot, replacing any previous one.
    fn save(&mut self, state: &AppState) -> Result<()>;

    /// Read back the stored snapshot, if any. `Ok(None)` means nothing has
    /// been stored yet; a corrupt snapshot is an error for the caller to
    /// downgrade.
    fn load(&self) -> Result<Option<StateOverlay>>;
}

/// Startup state: the stored snapshot merged over the seed, or the plain
/// seed when nothing loads. Corruption is logged, never fatal.
pub fn load_or_seed(store: &dyn SnapshotStore) -> AppState {
    match store.load() {
        Ok(Some(overlay)) => seed::seed_state().apply_overlay(overlay),
        Ok(None) => seed::seed_state(),
        Err(err) => {
            tracing::warn!("discarding unreadable snapshot: {err}");
            seed::seed_state()
        }
    }
}

/// Persist after a transition. Failures are logged and swallowed: the
/// in-memory state is already the truth and must not roll back.
pub fn persist(store: &mut dyn SnapshotStore, state: &AppState) {
    if let Err(err) = store.save(state) {
        tracing::warn!("failed to persist snapshot: {err}");
    }
}
