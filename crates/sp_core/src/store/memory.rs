//! In-memory store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use super::error::StoreError;
use super::format::{decode, encode, fingerprint, Revision};
use super::{MatchStore, Versioned};
use crate::models::Match;

/// Stores the encoded bytes rather than the decoded records, so revisions
/// behave exactly like the filesystem backend.
#[derive(Default)]
pub struct MemStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for MemStore {
    fn load(&self, id: &str) -> Result<Versioned<Match>, StoreError> {
        let records = self.records.lock().unwrap();
        let bytes = records
            .get(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        Ok(Versioned {
            value: decode(bytes)?,
            revision: fingerprint(bytes),
        })
    }

    fn save(&self, record: &Match) -> Result<Revision, StoreError> {
        let bytes = encode(record)?;
        let revision = fingerprint(&bytes);
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), bytes);
        Ok(revision)
    }

    fn save_if(&self, record: &Match, expected: &Revision) -> Result<Revision, StoreError> {
        let bytes = encode(record)?;
        // Compare and insert under one lock so the swap is atomic.
        let mut records = self.records.lock().unwrap();
        let current = records
            .get(&record.id)
            .map(|b| fingerprint(b))
            .ok_or_else(|| StoreError::NotFound {
                id: record.id.clone(),
            })?;
        if &current != expected {
            return Err(StoreError::Conflict {
                id: record.id.clone(),
                expected: expected.to_string(),
                found: current.to_string(),
            });
        }
        let revision = fingerprint(&bytes);
        records.insert(record.id.clone(), bytes);
        Ok(revision)
    }
}
