//! `dla-spawn` — spawn-pattern generators.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`engine`]   | `spawn` / `try_spawn` — dispatch on `SpawnPattern`       |
//! | [`patterns`] | One generator per pattern, plus their batch sizes        |
//! | [`error`]    | `SpawnError`, `SpawnResult<T>`                           |
//!
//! Every generator is a pure function of its inputs plus draws from the
//! supplied [`RandomSource`](dla_core::RandomSource).  Nothing here touches
//! the walker store; the tick loop inserts the returned positions.

pub mod engine;
pub mod error;
pub mod patterns;


pub use engine::{spawn, try_spawn};
pub use error::{SpawnError, SpawnResult};
