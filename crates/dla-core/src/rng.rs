//! Deterministic RNG wrappers and the sampling contract used by spawning
//! and movement.
//!
//! # Determinism strategy
//!
//! Spawn batches draw from one simulation-level [`SimRng`].  Each walker
//! additionally owns a [`WalkerRng`] for its per-tick jitter, seeded by:
//!
//!   seed = global_seed XOR (walker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive walker ids uniformly across the seed space.
//! A walker's trajectory therefore depends only on the run seed and its own
//! id, never on how many other walkers moved before it or on which thread
//! moved it.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WalkerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Uniform sampling primitives.
///
/// Only [`unit`](Self::unit) is required; everything else is derived from it
/// so that test doubles can script exact draws.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform sample between `lo` and `hi`.
    ///
    /// Computed as `lo + (hi - lo) * u`, so `lo == hi` returns `lo` and
    /// `lo > hi` samples the reversed interval instead of panicking.
    #[inline]
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    /// Uniform sample inside the unit disk (rejection sampling).
    fn in_unit_disk(&mut self) -> Vec2 {
        loop {
            let v = Vec2::new(self.range(-1.0, 1.0), self.range(-1.0, 1.0));
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }

    /// Uniform sample inside the unit ball (rejection sampling).
    fn in_unit_sphere(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(
                self.range(-1.0, 1.0),
                self.range(-1.0, 1.0),
                self.range(-1.0, 1.0),
            );
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }
}

// ── WalkerRng ─────────────────────────────────────────────────────────────────

/// Per-walker deterministic RNG.
///
/// Lives inside the walker record, so movement can run over disjoint
/// `&mut Walker`s in parallel without sharing RNG state.
#[derive(Clone, Debug)]
pub struct WalkerRng(SmallRng);

impl WalkerRng {
    /// Seed deterministically from the run's global seed and a walker id.
    pub fn new(global_seed: u64, walker: WalkerId) -> Self {
        let seed = global_seed ^ u64::from(walker).wrapping_mul(MIXING_CONSTANT);
        WalkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for WalkerRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for spawn placement.
///
/// Used only from the single-threaded spawn step.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }
}
