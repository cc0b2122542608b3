//! Target-surface geometry snapshot and small spatial utilities.
//!
//! The surface is described only by its bounding box: an `origin` and the
//! full box `extents`.  The box is centred on `origin` on every axis, so the
//! footprint along x spans `origin.x ± extents.x / 2`.

use glam::Vec3;

use crate::{DlaError, DlaResult};

// ── GeometryProvider ──────────────────────────────────────────────────────────

/// Source of the target surface's bounds.  Queried exactly once when the
/// simulation is built.
pub trait GeometryProvider {
    /// World-space origin of the surface.
    fn surface_origin(&self) -> Vec3;

    /// Size of the surface's axis-aligned bounding box.
    fn surface_extents(&self) -> Vec3;
}

// ── MeshGeometry ──────────────────────────────────────────────────────────────

/// Read-once snapshot of the surface bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshGeometry {
    pub origin:  Vec3,
    pub extents: Vec3,
}

impl MeshGeometry {
    #[inline]
    pub fn new(origin: Vec3, extents: Vec3) -> Self {
        Self { origin, extents }
    }

    /// Take a snapshot from any provider and validate it.
    pub fn capture<G: GeometryProvider + ?Sized>(provider: &G) -> DlaResult<Self> {
        let geometry = Self::new(provider.surface_origin(), provider.surface_extents());
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject non-finite coordinates and negative extents.
    ///
    /// Zero extents are accepted: they are degenerate for some spawn
    /// patterns, which then produce empty batches, but not fatal.
    pub fn validate(&self) -> DlaResult<()> {
        if !self.origin.is_finite() {
            return Err(DlaError::Config(format!(
                "surface origin {} is not finite",
                self.origin
            )));
        }
        if !self.extents.is_finite() || self.extents.min_element() < 0.0 {
            return Err(DlaError::Config(format!(
                "surface extents {} must be finite and non-negative",
                self.extents
            )));
        }
        Ok(())
    }

    /// Footprint width along x.
    #[inline]
    pub fn width(&self) -> f32 {
        self.extents.x
    }

    /// Footprint depth along z.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.extents.z
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.origin.x - self.extents.x / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.extents.x / 2.0
    }

    /// Minimum corner of the bounding box.
    #[inline]
    pub fn min_corner(&self) -> Vec3 {
        self.origin - self.extents / 2.0
    }

    /// Maximum corner of the bounding box.
    #[inline]
    pub fn max_corner(&self) -> Vec3 {
        self.origin + self.extents / 2.0
    }

    /// Euclidean distance from `p` to the bounding box (0 inside it).
    pub fn distance_to_box(&self, p: Vec3) -> f32 {
        let clamped = p.clamp(self.min_corner(), self.max_corner());
        p.distance(clamped)
    }
}

impl GeometryProvider for MeshGeometry {
    fn surface_origin(&self) -> Vec3 {
        self.origin
    }

    fn surface_extents(&self) -> Vec3 {
        self.extents
    }
}

// ── map_range ─────────────────────────────────────────────────────────────────

/// Linearly map `s` from `[a1, a2]` onto `[b1, b2]`.
///
/// Returns `None` when the source range is empty (`a1 == a2`), where the
/// mapping would divide by zero.
#[inline]
pub fn map_range(s: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> Option<f32> {
    let span = a2 - a1;
    if span == 0.0 {
        return None;
    }
    Some(b1 + (s - a1) * (b2 - b1) / span)
}
