//! Match factory and scoring engine.
//!
//! Pure, synchronous state transitions over an in-memory [`crate::models::Match`]
//! record. Persistence and request parsing live elsewhere; the engine only ever
//! sees already-validated structured input.

pub mod factory;
pub mod scoring;

pub use factory::{create_match, MatchParams};
pub use scoring::{apply_point, compute_sets_won, finish_match, sets_needed_to_win};
