//! `dla-sim` — tick loop orchestrator for the rust_dla engine.
//!
//! # Tick loop
//!
//! ```text
//! every tick (one per host frame):
//!   ① Target   — poll TargetSource::hover_point once.
//!   ② Spawn    — if spawning, the interval has elapsed and a target exists,
//!                run the active pattern and insert the batch.
//!   ③ Cull     — over the active set (this tick's spawns included), retire
//!                walkers that are too old or too far from the surface origin.
//!   ④ Move     — survivors drift down by `walker_speed`, plus jitter, and
//!                age by one (on Rayon's pool with the `parallel` feature).
//!   ⑤ Freeze   — CollisionOracle::poll_contacts; touched walkers aggregate.
//!   ⑥ Retire   — culled and frozen walkers leave the active set in one batch.
//! ```
//!
//! While paused, ①–⑥ are skipped but the clock still advances.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the movement phase on Rayon's thread pool.        |
//! | `fx-hash`  | FxHash for the walker store's id index.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dla_contact::ProximityOracle;
//! use dla_core::{MeshGeometry, SimParams, Vec3};
//! use dla_sim::{FixedTarget, SimBuilder};
//!
//! let geometry = MeshGeometry::new(Vec3::ZERO, Vec3::new(2.0, 0.5, 2.0));
//! let params = SimParams::default();
//! let oracle = ProximityOracle::new(geometry, params.walker_size);
//! let mut sim = SimBuilder::new(params, oracle, FixedTarget(Vec3::ZERO))
//!     .geometry(&geometry)
//!     .build()?;
//! for _ in 0..1_000 {
//!     sim.tick();
//! }
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;
pub mod target;


pub use builder::SimBuilder;
pub use control::Command;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use sim::Sim;
pub use target::{FixedTarget, NoTarget, TargetSource};
