//! Simulation parameters and the spawn-pattern selector.

use std::fmt;

use crate::{DlaError, DlaResult};

// ── SpawnPattern ──────────────────────────────────────────────────────────────

/// Layout used when placing a new batch of walkers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnPattern {
    /// One walker directly above the target.
    Point,
    /// Evenly spaced walkers on a circle around the target.
    Ring,
    /// Random walkers filling a disk around the target.
    Circle,
    /// Random walkers filling a ball around the target.
    #[default]
    Sphere,
    /// Random walkers over a random patch of the surface footprint.
    Blanket,
    /// Random walkers along the x axis of the surface.
    Line,
    /// Random walkers along a sine wave across the surface.
    Wave,
}

impl SpawnPattern {
    /// Every pattern, in control-surface order (keys 1–7 in a typical host).
    pub const ALL: [SpawnPattern; 7] = [
        SpawnPattern::Point,
        SpawnPattern::Ring,
        SpawnPattern::Circle,
        SpawnPattern::Sphere,
        SpawnPattern::Blanket,
        SpawnPattern::Line,
        SpawnPattern::Wave,
    ];

    /// Spawn interval that selecting this pattern switches to.
    ///
    /// `None` keeps whatever interval is currently in effect.
    pub fn default_interval(self) -> Option<u64> {
        match self {
            SpawnPattern::Point => Some(2),
            SpawnPattern::Ring | SpawnPattern::Circle | SpawnPattern::Sphere => Some(20),
            SpawnPattern::Blanket => Some(100),
            SpawnPattern::Line | SpawnPattern::Wave => None,
        }
    }
}

impl fmt::Display for SpawnPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpawnPattern::Point   => "point",
            SpawnPattern::Ring    => "ring",
            SpawnPattern::Circle  => "circle",
            SpawnPattern::Sphere  => "sphere",
            SpawnPattern::Blanket => "blanket",
            SpawnPattern::Line    => "line",
            SpawnPattern::Wave    => "wave",
        };
        f.write_str(name)
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Immutable run configuration.
///
/// Typically built from [`Default`] and tweaked, or loaded from JSON by the
/// host with the `serde` feature.  Missing JSON fields fall back to the
/// defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Walker diameter, used for collision distance and ring spacing.
    pub walker_size: f32,

    /// Walkers strictly older than this many ticks are retired.
    pub max_walker_age: u32,

    /// Walkers farther than this from the surface origin are retired.
    pub max_walker_distance: f32,

    /// Downward drift per tick.
    pub walker_speed: f32,

    /// Scale of the per-tick random displacement.
    pub jitter_amount: f32,

    pub min_height: f32,
    pub max_height: f32,

    pub min_radius: f32,
    pub max_radius: f32,

    /// Minimum ticks between two spawn batches.
    pub spawn_interval: u64,

    /// Pattern in effect when the simulation starts.
    pub pattern: SpawnPattern,

    /// Whether spawning starts enabled.
    pub spawning: bool,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            walker_size:         0.01,
            max_walker_age:      10_000,
            max_walker_distance: 100.0,
            walker_speed:        0.01,
            jitter_amount:       0.0036,
            min_height:          1.0,
            max_height:          2.0,
            min_radius:          0.01,
            max_radius:          0.06,
            spawn_interval:      30,
            pattern:             SpawnPattern::Sphere,
            spawning:            true,
            seed:                42,
        }
    }
}

impl SimParams {
    /// Check the parameter set for values the simulation cannot run with.
    pub fn validate(&self) -> DlaResult<()> {
        let floats = [
            ("walker_size", self.walker_size),
            ("max_walker_distance", self.max_walker_distance),
            ("walker_speed", self.walker_speed),
            ("jitter_amount", self.jitter_amount),
            ("min_height", self.min_height),
            ("max_height", self.max_height),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(DlaError::Config(format!("{name} must be finite, got {value}")));
            }
        }

        let non_negative = [
            ("walker_size", self.walker_size),
            ("max_walker_distance", self.max_walker_distance),
            ("walker_speed", self.walker_speed),
            ("jitter_amount", self.jitter_amount),
            ("min_radius", self.min_radius),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(DlaError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }

        if self.min_height > self.max_height {
            return Err(DlaError::Config(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(DlaError::Config(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }

    /// Radius used by the sphere pattern: the midpoint of the radius range.
    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.min_radius + (self.max_radius - self.min_radius) / 2.0
    }
}
