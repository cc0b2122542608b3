use dla_core::DlaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no surface geometry supplied; the simulation cannot start without surface bounds")]
    MissingGeometry,

    #[error(transparent)]
    Core(#[from] DlaError),
}

pub type SimResult<T> = Result<T, SimError>;
