use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),

    #[error("match not found: {id}")]
    NotFound { id: String },

    #[error("revision conflict for match {id}")]
    Conflict {
        id: String,
        expected: String,
        found: String,
    },
}

impl StoreError {
    /// Conflicts are the one case a caller may resolve by re-reading.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
