//! Strongly typed walker identifier.
//!
//! A `WalkerId` is handed out by the walker store in strictly increasing
//! order and is never reused for the life of that store, not even across a
//! full reset.  That makes ids from before a reset detectably stale.

use std::fmt;

/// Identifier of one walker.  Max ~4.3 billion walkers per store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerId(pub u32);

impl WalkerId {
    /// Sentinel meaning "no valid walker" — equivalent to `u32::MAX`.
    pub const INVALID: WalkerId = WalkerId(u32::MAX);

    /// The id following this one.
    #[inline(always)]
    pub fn next(self) -> WalkerId {
        WalkerId(self.0 + 1)
    }
}

impl Default for WalkerId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalkerId({})", self.0)
    }
}

impl From<WalkerId> for u64 {
    #[inline(always)]
    fn from(id: WalkerId) -> u64 {
        id.0 as u64
    }
}
