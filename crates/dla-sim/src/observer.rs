//! Simulation observer trait for progress reporting and host rendering.

use dla_core::{SpawnPattern, Tick, WalkerId};
use glam::Vec3;

/// What one tick did.  Returned by [`Sim::tick`][crate::Sim::tick] and
/// handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub tick:       Tick,
    /// The tick was skipped because the simulation is paused.
    pub paused:     bool,
    /// Walkers inserted by this tick's spawn batch.
    pub spawned:    usize,
    /// Walkers retired for age or distance.
    pub culled:     usize,
    /// Walkers frozen into the aggregate.
    pub aggregated: usize,
    /// Active walkers left at the end of the tick.
    pub active:     usize,
}

/// Callbacks invoked by the tick loop at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — swap a walker's material when it freezes
///
/// ```rust,ignore
/// struct Repaint<'a> { scene: &'a mut Scene }
///
/// impl SimObserver for Repaint<'_> {
///     fn on_aggregated(&mut self, _tick: Tick, walker: WalkerId, _pos: Vec3) {
///         self.scene.set_material(walker, Material::Aggregate);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a spawn batch was inserted.  `count` may be zero when the
    /// pattern had nothing to place.
    fn on_spawn(&mut self, _tick: Tick, _pattern: SpawnPattern, _count: usize) {}

    /// Called once per walker that froze this tick.
    fn on_aggregated(&mut self, _tick: Tick, _walker: WalkerId, _position: Vec3) {}

    /// Called at the end of each tick, paused or not.
    fn on_tick_end(&mut self, _stats: &TickStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
