//! `WalkerStore` — owner of every walker record in a run.
//!
//! # Layout
//!
//! Two disjoint sequences:
//!
//! - `active`: walkers still moving, in insertion order.  Exposed mutably
//!   only as a slice, so callers can mutate walkers during a tick but can
//!   never add or remove entries mid-iteration.
//! - `inactive`: append-only log of aggregated and retired walkers.  Kept for
//!   audit and for hosts that render the aggregate; the tick loop never
//!   iterates it.
//!
//! Removal from `active` happens only through [`WalkerStore::retire_batch`],
//! which the tick loop calls once, after iteration has finished.
//!
//! # Ids across resets
//!
//! Ids are allocated from a counter that `reset()` does not rewind.  Every id
//! handed out before a reset is below `first_live` afterwards and resolves
//! to `None`.

use dla_core::{Tick, WalkerId};
use glam::Vec3;

use crate::{Walker, WalkerState};

#[cfg(feature = "fx-hash")]
type SlotIndex = rustc_hash::FxHashMap<WalkerId, usize>;
#[cfg(not(feature = "fx-hash"))]
type SlotIndex = std::collections::HashMap<WalkerId, usize>;

/// Active and inactive walkers plus id → slot lookups for both.
pub struct WalkerStore {
    /// Run seed; every walker's private RNG is derived from it.
    seed: u64,

    next_id:    WalkerId,
    first_live: WalkerId,

    active:   Vec<Walker>,
    inactive: Vec<Walker>,

    active_slots:   SlotIndex,
    inactive_slots: SlotIndex,

    aggregated: usize,
    retired:    usize,
}

impl WalkerStore {
    /// Empty store whose walkers derive their RNGs from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            next_id:        WalkerId(0),
            first_live:     WalkerId(0),
            active:         Vec::new(),
            inactive:       Vec::new(),
            active_slots:   SlotIndex::default(),
            inactive_slots: SlotIndex::default(),
            aggregated:     0,
            retired:        0,
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Create an active walker at `position`, age 0, born on `born`.
    pub fn insert(&mut self, position: Vec3, born: Tick) -> WalkerId {
        let id = self.next_id;
        self.next_id = id.next();
        self.active_slots.insert(id, self.active.len());
        self.active.push(Walker::new(id, position, born, self.seed));
        id
    }

    /// Insert one walker per position.  Returns how many were inserted.
    pub fn insert_batch<I>(&mut self, positions: I, born: Tick) -> usize
    where
        I: IntoIterator<Item = Vec3>,
    {
        let before = self.active.len();
        for p in positions {
            self.insert(p, born);
        }
        self.active.len() - before
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Active walkers in insertion order.
    #[inline]
    pub fn active(&self) -> &[Walker] {
        &self.active
    }

    /// Mutable view of the active walkers.  A slice, so its length is fixed
    /// for as long as the borrow lives.
    #[inline]
    pub fn active_mut(&mut self) -> &mut [Walker] {
        &mut self.active
    }

    /// Aggregated and retired walkers in the order they left `active`.
    #[inline]
    pub fn inactive(&self) -> &[Walker] {
        &self.inactive
    }

    /// Call `f` for every active walker, in insertion order.
    pub fn for_each_active<F: FnMut(&Walker)>(&self, f: F) {
        self.active.iter().for_each(f);
    }

    /// Iterator over aggregated walkers only.
    pub fn aggregated(&self) -> impl Iterator<Item = &Walker> + '_ {
        self.inactive
            .iter()
            .filter(|w| w.state() == WalkerState::Aggregated)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Look up a walker in either collection.  Stale ids (from before the
    /// last reset) and never-issued ids return `None`.
    pub fn get(&self, id: WalkerId) -> Option<&Walker> {
        if id < self.first_live {
            return None;
        }
        if let Some(&slot) = self.active_slots.get(&id) {
            return Some(&self.active[slot]);
        }
        self.inactive_slots.get(&id).map(|&slot| &self.inactive[slot])
    }

    /// Mutable access to an active walker.
    pub fn get_active_mut(&mut self, id: WalkerId) -> Option<&mut Walker> {
        let slot = *self.active_slots.get(&id)?;
        Some(&mut self.active[slot])
    }

    #[inline]
    pub fn is_active(&self, id: WalkerId) -> bool {
        self.active_slots.contains_key(&id)
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Move every listed walker from `active` to `inactive` in one step.
    ///
    /// Remaining active walkers keep their relative order.  Ids that are not
    /// currently active (unknown, stale, or listed twice) are ignored.  A
    /// listed walker that is still `Active` is retired on the way out, so the
    /// inactive log never holds a mobile walker.
    ///
    /// Returns the number of walkers moved.
    pub fn retire_batch(&mut self, ids: &[WalkerId]) -> usize {
        let mut leaving = vec![false; self.active.len()];
        let mut count = 0;
        for id in ids {
            if let Some(&slot) = self.active_slots.get(id)
                && !leaving[slot]
            {
                leaving[slot] = true;
                count += 1;
            }
        }
        if count == 0 {
            return 0;
        }

        let previous = std::mem::take(&mut self.active);
        self.active.reserve(previous.len() - count);
        self.active_slots.clear();

        for (walker, leave) in previous.into_iter().zip(leaving) {
            if leave {
                self.push_inactive(walker);
            } else {
                self.active_slots.insert(walker.id(), self.active.len());
                self.active.push(walker);
            }
        }

        log::trace!("retired {count} walkers, {} still active", self.active.len());
        count
    }

    fn push_inactive(&mut self, mut walker: Walker) {
        walker.retire();
        match walker.state() {
            WalkerState::Aggregated => self.aggregated += 1,
            // retire() above leaves no walker active
            WalkerState::Retired | WalkerState::Active => self.retired += 1,
        }
        self.inactive_slots.insert(walker.id(), self.inactive.len());
        self.inactive.push(walker);
    }

    /// Drop every walker.  All ids issued so far become invalid.  Calling it
    /// again immediately is a no-op.
    pub fn reset(&mut self) {
        self.active.clear();
        self.inactive.clear();
        self.active_slots.clear();
        self.inactive_slots.clear();
        self.aggregated = 0;
        self.retired = 0;
        self.first_live = self.next_id;
    }

    // ── Counters ──────────────────────────────────────────────────────────

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn inactive_len(&self) -> usize {
        self.inactive.len()
    }

    /// Number of walkers frozen into the aggregate.
    #[inline]
    pub fn aggregated_count(&self) -> usize {
        self.aggregated
    }

    /// Number of walkers culled without aggregating.
    #[inline]
    pub fn retired_count(&self) -> usize {
        self.retired
    }

    /// `true` if neither collection holds a walker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }
}
