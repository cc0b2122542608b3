//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and either wrap `DlaError` as a
//! variant (`dla-sim`) or convert into it.

use thiserror::Error;

/// The base error type for `dla-core` and the `dla-*` crates built on it.
#[derive(Debug, Error, PartialEq)]
pub enum DlaError {
    /// Parameters or geometry rejected at construction time.  Fatal: the
    /// simulation cannot start.
    #[error("configuration error: {0}")]
    Config(String),

    /// Geometry whose extents make a spawn computation divide by zero.
    /// Never fatal; spawn calls turn this into an empty batch.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Shorthand result type for all `dla-*` crates.
pub type DlaResult<T> = Result<T, DlaError>;
