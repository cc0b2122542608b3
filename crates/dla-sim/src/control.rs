//! Host-facing controls.
//!
//! Hosts map their own input (keys, UI buttons, network messages) to a
//! [`Command`] and hand it to [`Sim::apply_command`], or call the matching
//! method directly.  Commands take effect immediately, between ticks.

use dla_contact::CollisionOracle;
use dla_core::SpawnPattern;

use crate::{Sim, TargetSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch pattern; may also change the spawn interval.
    SelectPattern(SpawnPattern),
    TogglePause,
    SetSpawning(bool),
    /// Drop every walker and clear the aggregate.
    Reset,
}

impl<O: CollisionOracle, T: TargetSource> Sim<O, T> {
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::SelectPattern(pattern) => self.select_pattern(pattern),
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::SetSpawning(on) => self.set_spawning(on),
            Command::Reset => self.reset(),
        }
    }

    /// Make `pattern` the active pattern.
    ///
    /// Point, ring, circle, sphere and blanket also set their own spawn
    /// interval; line and wave keep whatever interval is current.
    pub fn select_pattern(&mut self, pattern: SpawnPattern) {
        self.pattern = pattern;
        if let Some(interval) = pattern.default_interval() {
            self.spawn_interval = interval;
        }
        log::info!("pattern {pattern}, interval {} ticks", self.spawn_interval);
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn set_spawning(&mut self, on: bool) {
        self.spawning = on;
    }

    /// Remove all walkers, active and inactive, and tell the oracle to drop
    /// its aggregate.  The clock keeps running; ids are never reused.
    pub fn reset(&mut self) {
        log::info!(
            "{}: reset ({} active, {} inactive)",
            self.clock.current_tick,
            self.walkers.active_len(),
            self.walkers.inactive_len(),
        );
        self.walkers.reset();
        self.oracle.on_reset();
    }
}
