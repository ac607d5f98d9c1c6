//! Error types for the deal-memory core.
//!
//! The core favors total functions: unknown or dangling ids resolve to
//! `None` or an empty collection, never an error. Only two edges signal
//! failure: the persistence boundary, and an authorization denial that
//! callers must surface as forbidden/not-found rather than coerce away.

use std::path::PathBuf;

use thiserror::Error;

/// Persistence-boundary failures. None of these corrupt in-memory state:
/// loads fall back to the seed snapshot and saves are atomic.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write state snapshot {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize state snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not resolve a home directory for the state snapshot")]
    NoHomeDir,
}

/// An actor asked for a deal the evaluator rejects.
///
/// Shells surface this as "not found / forbidden"; it is never recovered
/// from by granting access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("user {user_id} may not access deal {deal_id}")]
pub struct AccessDenied {
    pub user_id: String,
    pub deal_id: String,
}
