//! Snapshot persistence and the atomic state boundary.
//!
//! The whole `AppState` persists as one JSON object under a well-known
//! storage key. Loading never fails: a missing or unreadable snapshot
//! falls back to the seed state, so first run and corrupted state look the
//! same to callers. Saves go through a temp-file rename, leaving the
//! previous snapshot intact if a write dies halfway.

use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::seed;
use crate::types::AppState;
use crate::util::atomic_write_str;

/// Storage key the snapshot lives under.
pub const STORAGE_KEY: &str = "longitudinal-deal-memory-state";

/// JSON-file-backed snapshot store.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store under the default state dir (`~/.dealos/`).
    pub fn open_default() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        let path = home.join(".dealos").join(format!("{}.json", STORAGE_KEY));
        Ok(Self::open_at(path))
    }

    /// Store at an explicit path (tests, alternate shells).
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. Missing file means first run; an unparseable one
    /// is logged and discarded. Both yield the seed state.
    pub fn load(&self) -> AppState {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!(
                        "Discarding unparseable state snapshot at {}: {}",
                        self.path.display(),
                        e
                    );
                    seed::seed_state(Utc::now())
                }
            },
            Err(_) => seed::seed_state(Utc::now()),
        }
    }

    /// Persist the snapshot atomically.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content = serde_json::to_string_pretty(state)?;
        atomic_write_str(&self.path, &content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

/// Shared handle enforcing the read-compute-install contract: every
/// mutation replaces the whole state in one critical section, so
/// concurrent actors never observe or produce a torn mix of old and new
/// fields.
pub struct StateHandle {
    state: Mutex<AppState>,
    store: JsonStore,
}

impl StateHandle {
    /// Load (or seed) the snapshot and wrap it.
    pub fn new(store: JsonStore) -> Self {
        let state = store.load();
        Self {
            state: Mutex::new(state),
            store,
        }
    }

    /// Clone the current snapshot out for reading. Queries operate on the
    /// clone; the handle never leaks a live reference.
    pub fn snapshot(&self) -> AppState {
        self.state.lock().clone()
    }

    /// Apply a reducer as one atomic replacement, then persist.
    ///
    /// A failed save keeps the new in-memory state and logs: during a
    /// session the disk snapshot is a cache of memory, not the authority.
    pub fn apply(&self, f: impl FnOnce(AppState) -> AppState) -> AppState {
        let next = {
            let mut guard = self.state.lock();
            let next = f(guard.clone());
            *guard = next.clone();
            next
        };
        if let Err(e) = self.store.save(&next) {
            log::warn!("Failed to persist state snapshot: {}", e);
        }
        next
    }
}
