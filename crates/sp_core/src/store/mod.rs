//! Match persistence.
//!
//! Storage is injected behind [`MatchStore`]; nothing in this crate holds a
//! process-wide client. Every stored record carries a content-fingerprint
//! revision so the load-mutate-store cycle around the engine can use
//! conditional writes instead of silently losing concurrent updates.

pub mod error;
pub mod format;
pub mod fs;
pub mod memory;

pub use error::StoreError;
pub use format::{fingerprint, Revision};
pub use fs::FsStore;
pub use memory::MemStore;

use crate::models::Match;

/// A match together with the revision of the encoding it was read from.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub value: T,
    pub revision: Revision,
}

/// Persistence contract consumed by the request handlers.
pub trait MatchStore: Send + Sync {
    /// Load a match by id together with its current revision.
    fn load(&self, id: &str) -> Result<Versioned<Match>, StoreError>;

    /// Unconditional write; last write wins.
    fn save(&self, record: &Match) -> Result<Revision, StoreError>;

    /// Conditional write: succeeds only while the stored revision still
    /// equals `expected`, otherwise fails with [`StoreError::Conflict`].
    fn save_if(&self, record: &Match, expected: &Revision) -> Result<Revision, StoreError>;
}
