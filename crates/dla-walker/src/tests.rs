//! Unit tests for dla-walker.

#[cfg(test)]
mod walker {
    use dla_core::Tick;
    use glam::Vec3;

    use crate::{WalkerState, WalkerStore};

    #[test]
    fn new_walker_is_active_and_young() {
        let mut store = WalkerStore::new(1);
        let id = store.insert(Vec3::new(0.0, 1.0, 0.0), Tick(5));
        let w = store.get(id).unwrap();
        assert_eq!(w.state(), WalkerState::Active);
        assert_eq!(w.age(), 0);
        assert_eq!(w.born(), Tick(5));
        assert_eq!(w.position(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn step_moves_and_ages() {
        let mut store = WalkerStore::new(1);
        let id = store.insert(Vec3::ZERO, Tick(0));
        let w = store.get_active_mut(id).unwrap();
        assert!(w.step(Vec3::new(0.0, -0.5, 0.0), 0.0));
        assert!(w.step(Vec3::new(0.0, -0.5, 0.0), 0.0));
        assert_eq!(w.age(), 2);
        assert_eq!(w.position(), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn jitter_is_bounded() {
        let mut store = WalkerStore::new(3);
        let id = store.insert(Vec3::ZERO, Tick(0));
        let w = store.get_active_mut(id).unwrap();
        let mut last = w.position();
        for _ in 0..100 {
            w.step(Vec3::ZERO, 0.25);
            assert!(w.position().distance(last) <= 0.25 + 1e-6);
            last = w.position();
        }
    }

    #[test]
    fn terminal_states_are_frozen() {
        let mut store = WalkerStore::new(1);
        let a = store.insert(Vec3::ZERO, Tick(0));
        let b = store.insert(Vec3::ONE, Tick(0));

        let wa = store.get_active_mut(a).unwrap();
        assert!(wa.aggregate());
        assert!(!wa.retire(), "aggregated walker cannot be retired");
        assert!(!wa.aggregate());
        assert!(!wa.step(Vec3::ONE, 1.0), "aggregated walker cannot move");
        assert_eq!(wa.state(), WalkerState::Aggregated);
        assert_eq!(wa.position(), Vec3::ZERO);
        assert_eq!(wa.age(), 0);

        let wb = store.get_active_mut(b).unwrap();
        assert!(wb.retire());
        assert!(!wb.aggregate(), "retired walker cannot aggregate");
        assert_eq!(wb.state(), WalkerState::Retired);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut s1 = WalkerStore::new(42);
        let mut s2 = WalkerStore::new(42);
        let a = s1.insert(Vec3::ZERO, Tick(0));
        let b = s2.insert(Vec3::ZERO, Tick(0));
        for _ in 0..10 {
            s1.get_active_mut(a).unwrap().step(Vec3::NEG_Y, 0.1);
            s2.get_active_mut(b).unwrap().step(Vec3::NEG_Y, 0.1);
        }
        assert_eq!(s1.get(a).unwrap().position(), s2.get(b).unwrap().position());
    }
}

#[cfg(test)]
mod store {
    use dla_core::{Tick, WalkerId};
    use glam::Vec3;

    use crate::{WalkerState, WalkerStore};

    fn store_with(n: usize) -> (WalkerStore, Vec<WalkerId>) {
        let mut store = WalkerStore::new(7);
        let ids = (0..n)
            .map(|i| store.insert(Vec3::splat(i as f32), Tick(0)))
            .collect();
        (store, ids)
    }

    fn active_ids(store: &WalkerStore) -> Vec<WalkerId> {
        store.active().iter().map(|w| w.id()).collect()
    }

    #[test]
    fn ids_are_sequential() {
        let (store, ids) = store_with(3);
        assert_eq!(ids, vec![WalkerId(0), WalkerId(1), WalkerId(2)]);
        assert_eq!(store.active_len(), 3);
        assert_eq!(store.inactive_len(), 0);
    }

    #[test]
    fn insert_batch_counts() {
        let mut store = WalkerStore::new(0);
        let n = store.insert_batch([Vec3::ZERO, Vec3::ONE, Vec3::X], Tick(2));
        assert_eq!(n, 3);
        assert!(store.active().iter().all(|w| w.born() == Tick(2)));
    }

    #[test]
    fn for_each_active_visits_in_order() {
        let (store, ids) = store_with(4);
        let mut seen = Vec::new();
        store.for_each_active(|w| seen.push(w.id()));
        assert_eq!(seen, ids);
    }

    #[test]
    fn retire_batch_preserves_order_of_survivors() {
        let (mut store, ids) = store_with(5);
        let moved = store.retire_batch(&[ids[1], ids[3]]);
        assert_eq!(moved, 2);
        assert_eq!(active_ids(&store), vec![ids[0], ids[2], ids[4]]);
        assert_eq!(store.inactive_len(), 2);
        assert!(!store.is_active(ids[1]));
        assert_eq!(store.get(ids[3]).unwrap().state(), WalkerState::Retired);
        // Lookups still resolve to the right walker after compaction.
        assert_eq!(store.get(ids[4]).unwrap().position(), Vec3::splat(4.0));
        assert_eq!(store.get_active_mut(ids[2]).unwrap().id(), ids[2]);
    }

    #[test]
    fn retire_batch_ignores_duplicates_and_unknown_ids() {
        let (mut store, ids) = store_with(3);
        let moved = store.retire_batch(&[ids[0], ids[0], WalkerId(99)]);
        assert_eq!(moved, 1);
        assert_eq!(store.retire_batch(&[ids[0]]), 0, "already inactive");
        assert_eq!(store.retire_batch(&[]), 0);
        assert_eq!(store.active_len(), 2);
    }

    #[test]
    fn retire_batch_keeps_aggregated_state() {
        let (mut store, ids) = store_with(2);
        store.get_active_mut(ids[0]).unwrap().aggregate();
        store.retire_batch(&ids);
        assert_eq!(store.get(ids[0]).unwrap().state(), WalkerState::Aggregated);
        assert_eq!(store.get(ids[1]).unwrap().state(), WalkerState::Retired);
        assert_eq!(store.aggregated_count(), 1);
        assert_eq!(store.retired_count(), 1);
        assert_eq!(store.aggregated().count(), 1);
    }

    #[test]
    fn reset_clears_and_invalidates_ids() {
        let (mut store, ids) = store_with(3);
        store.retire_batch(&[ids[0]]);
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.aggregated_count() + store.retired_count(), 0);
        for id in &ids {
            assert!(store.get(*id).is_none());
        }

        // New ids never collide with pre-reset ones.
        let fresh = store.insert(Vec3::ZERO, Tick(0));
        assert!(fresh > ids[2]);
        assert!(store.get(ids[0]).is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut store, _) = store_with(4);
        store.reset();
        let after_once = (store.active_len(), store.inactive_len(), store.is_empty());
        store.reset();
        let after_twice = (store.active_len(), store.inactive_len(), store.is_empty());
        assert_eq!(after_once, after_twice);
        assert_eq!(after_twice, (0, 0, true));
    }
}
