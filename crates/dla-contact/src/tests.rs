//! Unit tests for dla-contact.

#[cfg(test)]
mod proximity {
    use dla_core::{MeshGeometry, Tick, WalkerId};
    use dla_walker::WalkerStore;
    use glam::Vec3;

    use crate::{CollisionOracle, Contact, ContactKind, NoContacts, ProximityOracle};

    const SIZE: f32 = 0.01;

    /// Unit slab whose top face is at y = 0.
    fn slab() -> MeshGeometry {
        MeshGeometry::new(Vec3::new(0.0, -0.5, 0.0), Vec3::ONE)
    }

    #[test]
    fn surface_contact_within_half_size() {
        let oracle = ProximityOracle::new(slab(), SIZE);
        assert_eq!(oracle.contact_at(Vec3::new(0.0, 0.004, 0.0)), Some(ContactKind::Surface));
        assert_eq!(oracle.contact_at(Vec3::new(0.0, 0.02, 0.0)), None);
        // Beside the slab, level with its top.
        assert_eq!(oracle.contact_at(Vec3::new(0.504, -0.1, 0.0)), Some(ContactKind::Surface));
    }

    #[test]
    fn aggregate_contact_within_one_size() {
        let mut oracle = ProximityOracle::new(slab(), SIZE);
        let frozen = Vec3::new(0.0, 0.3, 0.0);
        oracle.on_aggregated(WalkerId(0), frozen);
        assert_eq!(oracle.aggregate_len(), 1);

        assert_eq!(oracle.contact_at(frozen + Vec3::new(0.009, 0.0, 0.0)), Some(ContactKind::Aggregate));
        assert_eq!(oracle.contact_at(frozen + Vec3::new(0.0, 0.011, 0.0)), None);
        assert_eq!(oracle.nearest_aggregate(Vec3::new(1.0, 1.0, 1.0)), Some(WalkerId(0)));
    }

    #[test]
    fn surface_wins_over_aggregate() {
        let mut oracle = ProximityOracle::new(slab(), SIZE);
        oracle.on_aggregated(WalkerId(0), Vec3::new(0.0, 0.005, 0.0));
        assert_eq!(oracle.contact_at(Vec3::new(0.0, 0.002, 0.0)), Some(ContactKind::Surface));
    }

    #[test]
    fn poll_reports_only_active_walkers() {
        let mut store = WalkerStore::new(1);
        let touching = store.insert(Vec3::new(0.1, 0.001, 0.1), Tick(0));
        let culled = store.insert(Vec3::new(0.2, 0.001, 0.2), Tick(0));
        let _floating = store.insert(Vec3::new(0.0, 0.5, 0.0), Tick(0));
        store.get_active_mut(culled).unwrap().retire();

        let mut oracle = ProximityOracle::new(slab(), SIZE);
        let contacts = oracle.poll_contacts(store.active());
        assert_eq!(contacts, vec![Contact { walker: touching, kind: ContactKind::Surface }]);
    }

    #[test]
    fn reset_forgets_aggregate() {
        let mut oracle = ProximityOracle::new(slab(), SIZE);
        oracle.on_aggregated(WalkerId(3), Vec3::new(0.0, 0.4, 0.0));
        oracle.on_reset();
        assert_eq!(oracle.aggregate_len(), 0);
        assert_eq!(oracle.contact_at(Vec3::new(0.0, 0.4, 0.0)), None);
        assert_eq!(oracle.nearest_aggregate(Vec3::ZERO), None);
    }

    #[test]
    fn no_contacts_is_silent() {
        let mut store = WalkerStore::new(1);
        store.insert(Vec3::ZERO, Tick(0));
        assert!(NoContacts.poll_contacts(store.active()).is_empty());
    }
}
