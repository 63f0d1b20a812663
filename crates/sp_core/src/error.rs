use thiserror::Error;

/// Errors produced by the match factory and the score engine.
///
/// Storage failures live in [`crate::store::StoreError`]; the engine itself
/// never touches I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("match already finished")]
    AlreadyFinished,
}

pub type Result<T> = std::result::Result<T, EngineError>;
