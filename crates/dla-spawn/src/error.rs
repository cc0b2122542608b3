use dla_core::{DlaError, SpawnPattern};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    /// The surface or walker dimensions leave the pattern nothing to place,
    /// or would divide by zero.
    #[error("{pattern} spawn has degenerate geometry: {reason}")]
    DegenerateGeometry {
        pattern: SpawnPattern,
        reason:  String,
    },
}

impl From<SpawnError> for DlaError {
    fn from(e: SpawnError) -> Self {
        DlaError::DegenerateGeometry(e.to_string())
    }
}

pub type SpawnResult<T> = Result<T, SpawnError>;
