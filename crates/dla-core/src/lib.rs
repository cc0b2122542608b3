//! `dla-core` — foundational types for the `rust_dla` aggregation engine.
//!
//! This crate is a dependency of every other `dla-*` crate.  It has no
//! `dla-*` dependencies and few external ones (`glam`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `WalkerId`                                              |
//! | [`geom`]        | `MeshGeometry`, `GeometryProvider`, `map_range`         |
//! | [`time`]        | `Tick`, `SimClock`                                      |
//! | [`rng`]         | `RandomSource`, `WalkerRng` (per-walker), `SimRng`      |
//! | [`params`]      | `SimParams`, `SpawnPattern`                             |
//! | [`error`]       | `DlaError`, `DlaResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod error;
pub mod geom;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DlaError, DlaResult};
pub use geom::{GeometryProvider, MeshGeometry, map_range};
pub use glam::{Vec2, Vec3};
pub use ids::WalkerId;
pub use params::{SimParams, SpawnPattern};
pub use rng::{RandomSource, SimRng, WalkerRng};
pub use time::{SimClock, Tick};
