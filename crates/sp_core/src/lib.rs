//! # sp_core - SetPoint Match Scoring Engine
//!
//! Core library for the SetPoint scoreboard service: the match data model,
//! the point-by-point scoring state machine, and pluggable match storage.
//!
//! ## Features
//! - First-to-N set scoring with majority-rule match completion
//! - Derived set counters always recomputed from primary data
//! - Injected storage trait with optimistic-concurrency writes
//! - Gateway-agnostic JSON handlers shared by the HTTP server and the CLI

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

// Re-export the JSON handler surface
pub use api::{create_match_json, get_match_json, update_score_json, ApiResponse};

// Re-export the factory and score engine
pub use engine::{
    apply_point, compute_sets_won, create_match, finish_match, sets_needed_to_win, MatchParams,
};
pub use error::{EngineError, Result};

// Re-export the data model
pub use models::{Match, MatchStatus, Set, Team};

// Re-export the storage layer
pub use store::{FsStore, MatchStore, MemStore, Revision, StoreError, Versioned};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
