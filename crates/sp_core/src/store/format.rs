//! Record encoding and revision fingerprints.
//!
//! Matches persist as pretty-printed JSON, one object per match. The revision
//! token is the SHA-256 of the exact stored bytes, so any visible change to a
//! record changes its revision.

use sha2::{Digest, Sha256};

use super::error::StoreError;
use crate::models::Match;

/// Opaque revision token for conditional writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a match exactly as it is stored.
pub fn encode(record: &Match) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(record).map_err(StoreError::Serialization)
}

/// Decode stored bytes back into a match.
pub fn decode(bytes: &[u8]) -> Result<Match, StoreError> {
    serde_json::from_slice(bytes).map_err(StoreError::Deserialization)
}

/// SHA-256 fingerprint of a stored encoding.
pub fn fingerprint(bytes: &[u8]) -> Revision {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Revision(format!("{:x}", hasher.finalize()))
}
