//! # hirecraft
//!
//! UI-agnostic core for a recruiting content builder: candidate profiles,
//! job ads, and case studies assembled from a shared library of reusable
//! content blocks.
//!
//! ## Architecture
//!
//! The whole application is a single value, [`state::AppState`], and every
//! mutation goes through one pure function, [`engine::transition`], applied
//! to a closed [`action::Action`] enum. Frontends (the bundled CLI, or any
//! other client) dispatch actions, persist the resulting snapshot through a
//! [`store::SnapshotStore`], and project documents to markdown with the
//! [`render`] functions. Nothing in this crate does I/O except the store
//! and export modules.
//!
//! ```no_run
//! use hirecraft::action::Action;
//! use hirecraft::engine::transition;
//! use hirecraft::state::ModuleKind;
//! use hirecraft::store::{fs::FileStore, load_or_seed, persist};
//!
//! let mut store = FileStore::new("state.json");
//! let state = load_or_seed(&store);
//! let state = transition(
//!     &state,
//!     Action::AddTab {
//!         module_kind: ModuleKind::Profiles,
//!         name: "Q3 Hiring".into(),
//!     },
//! );
//! persist(&mut store, &state);
//! ```

pub mod action;
pub mod config;
pub mod dragdrop;
pub mod engine;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod render;
pub mod seed;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use error::{HirecraftError, Result};
