//! The `Sim` struct and its tick loop.

use dla_contact::CollisionOracle;
use dla_core::{MeshGeometry, SimClock, SimParams, SimRng, SpawnPattern, Tick, WalkerId};
use dla_walker::WalkerStore;
use glam::Vec3;

use crate::{NoopObserver, SimObserver, TargetSource, TickStats};

/// The main simulation runner.
///
/// `Sim<O, T>` owns every walker and drives the per-tick pipeline described
/// in the [crate docs](crate): spawn, cull, move, freeze, retire.  The host
/// calls [`tick`](Self::tick) once per frame.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<O: CollisionOracle, T: TargetSource> {
    /// Parameters the simulation was built with.  `pattern`, `spawning` and
    /// `spawn_interval` here are only initial values; the live ones are
    /// changed through the control surface.
    pub params: SimParams,

    /// Surface bounds captured at build time.
    pub geometry: MeshGeometry,

    pub clock: SimClock,

    /// Active and inactive walkers.
    pub walkers: WalkerStore,

    pub oracle: O,

    pub target: T,

    pub(crate) spawn_rng:      SimRng,
    pub(crate) pattern:        SpawnPattern,
    pub(crate) spawn_interval: u64,
    pub(crate) spawning:       bool,
    pub(crate) paused:         bool,
    /// `None` until the first batch, so the very first eligible tick spawns.
    pub(crate) last_spawn:     Option<Tick>,
}

impl<O: CollisionOracle, T: TargetSource> Sim<O, T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick with no observer.
    pub fn tick(&mut self) -> TickStats {
        self.tick_with(&mut NoopObserver)
    }

    /// Advance one tick, reporting to `observer`.
    ///
    /// The clock advances even while paused.
    pub fn tick_with<Obs: SimObserver>(&mut self, observer: &mut Obs) -> TickStats {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let stats = if self.paused {
            TickStats {
                tick: now,
                paused: true,
                active: self.walkers.active_len(),
                ..TickStats::default()
            }
        } else {
            self.process_tick(now, observer)
        };

        observer.on_tick_end(&stats);
        log::trace!(
            "{now}: +{} spawned, -{} culled, -{} aggregated, {} active",
            stats.spawned,
            stats.culled,
            stats.aggregated,
            stats.active,
        );
        self.clock.advance();
        stats
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<Obs: SimObserver>(&mut self, n: u64, observer: &mut Obs) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// The pattern the next batch will use.
    pub fn pattern(&self) -> SpawnPattern {
        self.pattern
    }

    /// Minimum ticks between batches.
    pub fn spawn_interval(&self) -> u64 {
        self.spawn_interval
    }

    pub fn is_spawning(&self) -> bool {
        self.spawning
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Tick of the most recent batch, if any.
    pub fn last_spawn(&self) -> Option<Tick> {
        self.last_spawn
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<Obs: SimObserver>(&mut self, now: Tick, observer: &mut Obs) -> TickStats {
        // ── Phase 1–2: target and spawn ───────────────────────────────────
        //
        // A fresh batch joins the active set before the cull snapshot, so it
        // is culled, moved and aged in the tick it appears.
        let target = self.target.hover_point();
        let spawned = match target {
            Some(point) if self.spawning && self.spawn_due(now) => {
                let count = self.spawn_batch(point, now);
                observer.on_spawn(now, self.pattern, count);
                count
            }
            _ => 0,
        };

        // ── Phase 3: cull ─────────────────────────────────────────────────
        let mut leaving = self.cull();
        let culled = leaving.len();

        // ── Phase 4: move ─────────────────────────────────────────────────
        self.move_walkers();

        // ── Phase 5: freeze ───────────────────────────────────────────────
        let frozen = self.freeze();
        for &(walker, position) in &frozen {
            self.oracle.on_aggregated(walker, position);
            observer.on_aggregated(now, walker, position);
        }

        // ── Phase 6: retire ───────────────────────────────────────────────
        leaving.extend(frozen.iter().map(|&(walker, _)| walker));
        self.walkers.retire_batch(&leaving);

        TickStats {
            tick: now,
            paused: false,
            spawned,
            culled,
            aggregated: frozen.len(),
            active: self.walkers.active_len(),
        }
    }

    fn spawn_due(&self, now: Tick) -> bool {
        match self.last_spawn {
            None => true,
            Some(last) => now.since(last) >= self.spawn_interval,
        }
    }

    fn spawn_batch(&mut self, target: Vec3, now: Tick) -> usize {
        let positions = dla_spawn::spawn(
            self.pattern,
            target,
            &self.params,
            &self.geometry,
            &mut self.spawn_rng,
        );
        let count = self.walkers.insert_batch(positions, now);
        self.last_spawn = Some(now);
        log::debug!("{now}: {} batch of {count} walkers", self.pattern);
        count
    }

    /// Mark walkers that are too old or too far away as retired and return
    /// their ids.  They stay in the active slice until the retire phase.
    fn cull(&mut self) -> Vec<WalkerId> {
        let origin = self.geometry.origin;
        let max_age = self.params.max_walker_age;
        let max_distance = self.params.max_walker_distance;

        let mut culled = Vec::new();
        for walker in self.walkers.active_mut() {
            let expired = walker.age() > max_age
                || walker.position().distance(origin) > max_distance;
            if expired && walker.retire() {
                culled.push(walker.id());
            }
        }
        culled
    }

    /// Drift every still-active walker down by `walker_speed`, add jitter
    /// and age it by one tick.
    #[cfg(not(feature = "parallel"))]
    fn move_walkers(&mut self) {
        let drift = Vec3::new(0.0, -self.params.walker_speed, 0.0);
        let jitter = self.params.jitter_amount;
        for walker in self.walkers.active_mut() {
            walker.step(drift, jitter);
        }
    }

    /// Rayon variant.  Each walker owns its RNG, so the result does not
    /// depend on scheduling.
    #[cfg(feature = "parallel")]
    fn move_walkers(&mut self) {
        use rayon::prelude::*;

        let drift = Vec3::new(0.0, -self.params.walker_speed, 0.0);
        let jitter = self.params.jitter_amount;
        self.walkers.active_mut().par_iter_mut().for_each(|walker| {
            walker.step(drift, jitter);
        });
    }

    /// Ask the oracle for contacts and aggregate every walker it reports.
    ///
    /// Contacts for walkers culled this tick, unknown ids and repeats are
    /// ignored.
    fn freeze(&mut self) -> Vec<(WalkerId, Vec3)> {
        let contacts = self.oracle.poll_contacts(self.walkers.active());

        let mut frozen = Vec::new();
        for contact in contacts {
            if let Some(walker) = self.walkers.get_active_mut(contact.walker)
                && walker.aggregate()
            {
                log::trace!("{} froze on {} contact", walker.id(), contact.kind);
                frozen.push((walker.id(), walker.position()));
            }
        }
        frozen
    }
}
