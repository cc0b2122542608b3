//! Distance-based reference oracle.
//!
//! # Contact rules
//!
//! Walkers are spheres of diameter `walker_size`.
//!
//! - **Surface**: the walker centre is within `walker_size / 2` of the
//!   surface's bounding box.
//! - **Aggregate**: the walker centre is within `walker_size` of the centre
//!   of any walker that aggregated on an earlier tick (or earlier in the host
//!   loop via [`CollisionOracle::on_aggregated`]).
//!
//! Surface contact wins when both hold.  Walkers freezing in the same tick do
//! not see each other until the next poll, the same ordering a physics
//! engine's contact callbacks give.
//!
//! # Spatial index
//!
//! Aggregated positions live in an R-tree (via `rstar`), so each poll costs
//! O(active · log aggregate) instead of a scan of the whole aggregate.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use dla_core::{MeshGeometry, WalkerId};
use dla_walker::Walker;
use glam::Vec3;

use crate::{CollisionOracle, Contact, ContactKind};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a frozen walker's centre.
#[derive(Clone)]
struct FrozenEntry {
    point:  [f32; 3],
    walker: WalkerId,
}

impl RTreeObject for FrozenEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FrozenEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── ProximityOracle ───────────────────────────────────────────────────────────

/// Reference [`CollisionOracle`] over the surface bounding box and an R-tree
/// of aggregated walkers.
pub struct ProximityOracle {
    surface:     MeshGeometry,
    walker_size: f32,
    frozen:      RTree<FrozenEntry>,
}

impl ProximityOracle {
    pub fn new(surface: MeshGeometry, walker_size: f32) -> Self {
        Self {
            surface,
            walker_size,
            frozen: RTree::new(),
        }
    }

    /// Number of aggregated walkers the oracle knows about.
    pub fn aggregate_len(&self) -> usize {
        self.frozen.size()
    }

    /// The aggregated walker nearest to `position`, if any.
    pub fn nearest_aggregate(&self, position: Vec3) -> Option<WalkerId> {
        self.frozen
            .nearest_neighbor(&position.to_array())
            .map(|e| e.walker)
    }

    /// Classify a single position.
    pub fn contact_at(&self, position: Vec3) -> Option<ContactKind> {
        if self.surface.distance_to_box(position) <= self.walker_size / 2.0 {
            return Some(ContactKind::Surface);
        }
        let reach_2 = self.walker_size * self.walker_size;
        self.frozen
            .locate_within_distance(position.to_array(), reach_2)
            .next()
            .map(|_| ContactKind::Aggregate)
    }
}

impl CollisionOracle for ProximityOracle {
    fn poll_contacts(&mut self, active: &[Walker]) -> Vec<Contact> {
        active
            .iter()
            .filter(|w| w.is_active())
            .filter_map(|w| {
                self.contact_at(w.position()).map(|kind| Contact { walker: w.id(), kind })
            })
            .collect()
    }

    fn on_aggregated(&mut self, walker: WalkerId, position: Vec3) {
        self.frozen.insert(FrozenEntry { point: position.to_array(), walker });
    }

    fn on_reset(&mut self) {
        log::debug!("proximity oracle dropping {} aggregated walkers", self.frozen.size());
        self.frozen = RTree::new();
    }
}
