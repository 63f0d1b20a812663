//! Filesystem-backed store.
//!
//! One pretty-printed JSON object per match under `<root>/matches/`, written
//! atomically via a temp file and rename.

use std::fs::{create_dir_all, read, rename, File};
use std::io::Write;
use std::path::PathBuf;

use super::error::StoreError;
use super::format::{decode, encode, fingerprint, Revision};
use super::{MatchStore, Versioned};
use crate::models::Match;

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `root`, creating the directory layout if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        create_dir_all(root.join("matches"))?;
        log::debug!("opened match store at {}", root.display());
        Ok(Self { root })
    }

    fn match_path(&self, id: &str) -> PathBuf {
        self.root.join("matches").join(format!("{}.json", id))
    }

    fn read_current(&self, id: &str) -> Result<(Match, Revision), StoreError> {
        let path = self.match_path(id);
        let bytes = match read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { id: id.to_string() })
            }
            Err(e) => return Err(e.into()),
        };
        let record = decode(&bytes)?;
        Ok((record, fingerprint(&bytes)))
    }

    fn write_atomic(&self, id: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.match_path(id);
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        rename(&tmp, &path)?;
        Ok(())
    }
}

impl MatchStore for FsStore {
    fn load(&self, id: &str) -> Result<Versioned<Match>, StoreError> {
        let (value, revision) = self.read_current(id)?;
        Ok(Versioned { value, revision })
    }

    fn save(&self, record: &Match) -> Result<Revision, StoreError> {
        let bytes = encode(record)?;
        self.write_atomic(&record.id, &bytes)?;
        log::debug!("saved match {}", record.id);
        Ok(fingerprint(&bytes))
    }

    fn save_if(&self, record: &Match, expected: &Revision) -> Result<Revision, StoreError> {
        // Check-then-rename is only atomic within this process; cross-process
        // writers would additionally need file locking.
        let (_, current) = self.read_current(&record.id)?;
        if &current != expected {
            log::warn!("conflicting write on match {}", record.id);
            return Err(StoreError::Conflict {
                id: record.id.clone(),
                expected: expected.to_string(),
                found: current.to_string(),
            });
        }
        let bytes = encode(record)?;
        self.write_atomic(&record.id, &bytes)?;
        log::debug!("saved match {} (conditional)", record.id);
        Ok(fingerprint(&bytes))
    }
}
