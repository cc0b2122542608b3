//! A single walker and its state machine.

use std::fmt;

use dla_core::{RandomSource, Tick, WalkerId, WalkerRng};
use glam::Vec3;

/// Lifecycle state of a walker.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum WalkerState {
    /// Mobile: moves and ages every tick.
    #[default]
    Active,
    /// Frozen onto the surface or the aggregate.  Terminal.
    Aggregated,
    /// Culled for age or distance without aggregating.  Terminal.
    Retired,
}

impl WalkerState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != WalkerState::Active
    }
}

impl fmt::Display for WalkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalkerState::Active     => "active",
            WalkerState::Aggregated => "aggregated",
            WalkerState::Retired    => "retired",
        };
        f.write_str(name)
    }
}

/// One particle.
///
/// Fields are private: the only mutators are [`step`](Self::step),
/// [`aggregate`](Self::aggregate) and [`retire`](Self::retire), and all
/// three refuse to touch a walker that has left [`WalkerState::Active`].
#[derive(Clone, Debug)]
pub struct Walker {
    id:       WalkerId,
    position: Vec3,
    age:      u32,
    state:    WalkerState,
    born:     Tick,
    rng:      WalkerRng,
}

impl Walker {
    pub(crate) fn new(id: WalkerId, position: Vec3, born: Tick, seed: u64) -> Self {
        Self {
            id,
            position,
            age: 0,
            state: WalkerState::Active,
            born,
            rng: WalkerRng::new(seed, id),
        }
    }

    #[inline]
    pub fn id(&self) -> WalkerId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Ticks this walker has moved while active.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn state(&self) -> WalkerState {
        self.state
    }

    /// Tick on which the walker was spawned.
    #[inline]
    pub fn born(&self) -> Tick {
        self.born
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == WalkerState::Active
    }

    /// Advance one tick: displace by `drift` plus `jitter` times a uniform
    /// unit-ball sample from this walker's own RNG, then age by one.
    ///
    /// Returns `false` (and changes nothing) if the walker is not active.
    pub fn step(&mut self, drift: Vec3, jitter: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.position += drift + self.rng.in_unit_sphere() * jitter;
        self.age += 1;
        true
    }

    /// `Active → Aggregated`.  Returns `false` if the walker is not active.
    pub fn aggregate(&mut self) -> bool {
        self.transition(WalkerState::Aggregated)
    }

    /// `Active → Retired`.  Returns `false` if the walker is not active.
    pub fn retire(&mut self) -> bool {
        self.transition(WalkerState::Retired)
    }

    fn transition(&mut self, to: WalkerState) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = to;
        true
    }
}
