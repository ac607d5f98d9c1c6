//! Hierarchical access control and longitudinal deal memory.
//!
//! The core of a deal-tracking product: a team-tree authorization model
//! deciding which deals an actor may see, and a memory-timeline engine
//! deriving per-note change signals and a current-state snapshot from
//! free-text progress notes. Everything is a pure transformation over an
//! immutable [`AppState`] snapshot; the one stateful boundary is
//! [`store::StateHandle`], which installs each new state as a single
//! atomic replacement.
//!
//! The crate has no UI or CLI surface of its own; a presentation shell
//! consumes the query functions and [`commands`] reducers re-exported
//! here.

pub mod access;
pub mod commands;
pub mod constants;
pub mod error;
pub mod hygiene;
pub mod seed;
pub mod store;
pub mod teams;
pub mod timeline;
pub mod types;
pub mod util;

pub use access::{accessible_deals, can_access_deal, ensure_access};
pub use error::{AccessDenied, StoreError};
pub use hygiene::{bulk_assign, is_stale, problem_deals, DealIssue};
pub use store::{JsonStore, StateHandle, STORAGE_KEY};
pub use timeline::{classify, ordered_history, snapshot};
pub use types::{AppState, Deal, DealStatus, DeltaBullet, Memory, Role, Team, Tenant, User};
