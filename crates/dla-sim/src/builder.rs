//! Fluent builder for constructing a [`Sim`].

use dla_contact::CollisionOracle;
use dla_core::{GeometryProvider, MeshGeometry, SimClock, SimParams, SimRng};
use dla_walker::WalkerStore;

use crate::{Sim, SimError, SimResult, TargetSource};

/// Fluent builder for [`Sim<O, T>`].
///
/// # Required inputs
///
/// - [`SimParams`] — sizes, speeds, spawn ranges, initial pattern, seed
/// - `O: CollisionOracle` — contact detection (e.g. [`dla_contact::ProximityOracle`])
/// - `T: TargetSource` — where batches land (e.g. [`FixedTarget`][crate::FixedTarget])
/// - `.geometry(g)` — the surface bounds, captured once at build time
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params, oracle, FixedTarget(Vec3::ZERO))
///     .geometry(&surface)
///     .build()?;
/// sim.run_ticks(600, &mut NoopObserver);
/// ```
pub struct SimBuilder<O: CollisionOracle, T: TargetSource> {
    params:   SimParams,
    geometry: Option<MeshGeometry>,
    oracle:   O,
    target:   T,
}

impl<O: CollisionOracle, T: TargetSource> SimBuilder<O, T> {
    pub fn new(params: SimParams, oracle: O, target: T) -> Self {
        Self {
            params,
            geometry: None,
            oracle,
            target,
        }
    }

    /// Snapshot the surface bounds from `provider`.
    ///
    /// The provider is read here and never again; later changes to the host
    /// mesh are not seen by the simulation.
    pub fn geometry<G: GeometryProvider + ?Sized>(mut self, provider: &G) -> Self {
        self.geometry = Some(MeshGeometry::new(
            provider.surface_origin(),
            provider.surface_extents(),
        ));
        self
    }

    /// Validate inputs and return a ready-to-tick [`Sim`].
    pub fn build(self) -> SimResult<Sim<O, T>> {
        let geometry = self.geometry.ok_or(SimError::MissingGeometry)?;
        geometry.validate()?;
        self.params.validate()?;

        // Contact distances are multiples of the walker size.
        if self.params.walker_size == 0.0 {
            return Err(SimError::Config("walker_size must be positive".into()));
        }

        log::info!(
            "building simulation: pattern {}, interval {} ticks, seed {}",
            self.params.pattern,
            self.params.spawn_interval,
            self.params.seed,
        );

        Ok(Sim {
            clock:          SimClock::new(),
            walkers:        WalkerStore::new(self.params.seed),
            geometry,
            oracle:         self.oracle,
            target:         self.target,
            spawn_rng:      SimRng::new(self.params.seed),
            pattern:        self.params.pattern,
            spawn_interval: self.params.spawn_interval,
            spawning:       self.params.spawning,
            paused:         false,
            last_spawn:     None,
            params:         self.params,
        })
    }
}
