//! Pattern dispatch.

use dla_core::{MeshGeometry, RandomSource, SimParams, SpawnPattern};
use glam::Vec3;

use crate::{SpawnResult, patterns};

/// Initial positions for a new batch of `pattern` walkers aimed at `target`.
///
/// Degenerate geometry yields an empty batch rather than an error; use
/// [`try_spawn`] to see why a batch came back empty.
pub fn spawn<R: RandomSource + ?Sized>(
    pattern:  SpawnPattern,
    target:   Vec3,
    params:   &SimParams,
    geometry: &MeshGeometry,
    rng:      &mut R,
) -> Vec<Vec3> {
    match try_spawn(pattern, target, params, geometry, rng) {
        Ok(positions) => positions,
        Err(e) => {
            log::debug!("{e}; spawning nothing");
            Vec::new()
        }
    }
}

/// Like [`spawn`], but reports degenerate geometry.
///
/// Hover-relative patterns are centred at `(target.x, min_height, target.z)`.
/// Ring and circle draw a radius in `[min_radius, max_radius]` per call;
/// sphere always uses the midpoint of that range.
pub fn try_spawn<R: RandomSource + ?Sized>(
    pattern:  SpawnPattern,
    target:   Vec3,
    params:   &SimParams,
    geometry: &MeshGeometry,
    rng:      &mut R,
) -> SpawnResult<Vec<Vec3>> {
    let center = Vec3::new(target.x, params.min_height, target.z);

    match pattern {
        SpawnPattern::Point => Ok(patterns::point(center)),
        SpawnPattern::Ring => {
            let radius = rng.range(params.min_radius, params.max_radius);
            patterns::ring(center, radius, params.walker_size)
        }
        SpawnPattern::Circle => {
            let radius = rng.range(params.min_radius, params.max_radius);
            Ok(patterns::circle(center, radius, rng))
        }
        SpawnPattern::Sphere => Ok(patterns::sphere(center, params.sphere_radius(), rng)),
        SpawnPattern::Line => patterns::line(params, geometry, rng),
        SpawnPattern::Wave => patterns::wave(params, geometry, rng),
        SpawnPattern::Blanket => patterns::blanket(params, geometry, rng),
    }
}
