//! One generator per spawn pattern.
//!
//! Hover-relative patterns (`point`, `ring`, `circle`, `sphere`) take an
//! explicit centre and radius so tests can pin them; the engine picks the
//! radius.  Surface-wide patterns (`line`, `wave`, `blanket`) read the mesh
//! footprint and ignore the hover point except as a trigger.

use std::f32::consts::PI;

use dla_core::{MeshGeometry, RandomSource, SimParams, SpawnPattern, map_range};
use glam::Vec3;

use crate::{SpawnError, SpawnResult};

// ── Batch sizes and shape constants ───────────────────────────────────────────

pub const CIRCLE_COUNT:  usize = 200;
pub const SPHERE_COUNT:  usize = 50;
pub const LINE_COUNT:    usize = 1_000;
pub const WAVE_COUNT:    usize = 2_000;
pub const BLANKET_COUNT: usize = 1_000;

/// Fraction of the tightly packed ring capacity actually spawned.
pub const RING_FILL: f32 = 0.75;

pub const WAVE_AMPLITUDE: f32 = 0.2;
pub const WAVE_PERIODS:   f32 = 2.0;

/// Upper end of a blanket patch's start coordinate, as a fraction of the
/// half-extent.
const BLANKET_START_FRACTION: f32 = 0.75;

fn degenerate(pattern: SpawnPattern, reason: impl Into<String>) -> SpawnError {
    SpawnError::DegenerateGeometry { pattern, reason: reason.into() }
}

// ── Hover-relative patterns ───────────────────────────────────────────────────

/// A single walker at `center`.
pub fn point(center: Vec3) -> Vec<Vec3> {
    vec![center]
}

/// How many walkers fit on a ring of `radius`, at [`RING_FILL`] of the
/// shoulder-to-shoulder capacity for walkers of diameter `walker_size`.
pub fn ring_point_count(radius: f32, walker_size: f32) -> SpawnResult<usize> {
    if walker_size.is_nan() || walker_size <= 0.0 {
        return Err(degenerate(
            SpawnPattern::Ring,
            format!("walker size {walker_size} cannot space a ring"),
        ));
    }
    let circumference = PI * (radius * 2.0);
    let max_points = (circumference / walker_size).floor().max(0.0);
    Ok((max_points * RING_FILL).floor() as usize)
}

/// Walkers evenly spaced on a horizontal circle around `center`.
///
/// Angles are `(360 / n) * i` degrees for `i = 1..=n`, so the first walker
/// sits one step past angle zero and the last one lands on it.
pub fn ring(center: Vec3, radius: f32, walker_size: f32) -> SpawnResult<Vec<Vec3>> {
    let n = ring_point_count(radius, walker_size)?;
    if n == 0 {
        return Err(degenerate(
            SpawnPattern::Ring,
            format!("radius {radius} holds no walkers of size {walker_size}"),
        ));
    }

    let step = 360.0 / n as f32;
    Ok((1..=n)
        .map(|i| {
            let angle = (step * i as f32).to_radians();
            Vec3::new(
                center.x + radius * angle.cos(),
                center.y,
                center.z + radius * angle.sin(),
            )
        })
        .collect())
}

/// [`CIRCLE_COUNT`] walkers uniformly inside a horizontal disk of radius
/// `2 * radius` around `center`.
pub fn circle<R: RandomSource + ?Sized>(center: Vec3, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..CIRCLE_COUNT)
        .map(|_| {
            let c = rng.in_unit_disk() * radius * 2.0;
            Vec3::new(center.x + c.x, center.y, center.z + c.y)
        })
        .collect()
}

/// [`SPHERE_COUNT`] walkers uniformly inside a ball of radius `2 * radius`
/// around `center`.  The radius is the same for the whole batch.
pub fn sphere<R: RandomSource + ?Sized>(center: Vec3, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..SPHERE_COUNT)
        .map(|_| center + rng.in_unit_sphere() * radius * 2.0)
        .collect()
}

// ── Surface-wide patterns ─────────────────────────────────────────────────────

/// [`LINE_COUNT`] walkers spread along the surface's x extent at the origin's
/// z, at random heights.
pub fn line<R: RandomSource + ?Sized>(
    params:   &SimParams,
    geometry: &MeshGeometry,
    rng:      &mut R,
) -> SpawnResult<Vec<Vec3>> {
    if geometry.width().is_nan() || geometry.width() <= 0.0 {
        return Err(degenerate(
            SpawnPattern::Line,
            format!("surface width {}", geometry.width()),
        ));
    }

    Ok((0..LINE_COUNT)
        .map(|_| {
            let x = rng.range(geometry.min_x(), geometry.max_x());
            let y = rng.range(params.min_height, params.max_height);
            Vec3::new(x, y, geometry.origin.z)
        })
        .collect())
}

/// [`WAVE_COUNT`] walkers along a sine wave laid across the surface's x
/// extent: [`WAVE_PERIODS`] full periods of amplitude [`WAVE_AMPLITUDE`]
/// around the origin's z.
pub fn wave<R: RandomSource + ?Sized>(
    params:   &SimParams,
    geometry: &MeshGeometry,
    rng:      &mut R,
) -> SpawnResult<Vec<Vec3>> {
    let (min_x, max_x) = (geometry.min_x(), geometry.max_x());
    let mut out = Vec::with_capacity(WAVE_COUNT);

    for _ in 0..WAVE_COUNT {
        let x = rng.range(min_x, max_x);
        let degrees = map_range(x, min_x, max_x, 0.0, 360.0 * WAVE_PERIODS).ok_or_else(|| {
            degenerate(
                SpawnPattern::Wave,
                format!("surface width {}", geometry.width()),
            )
        })?;
        let z = degrees.to_radians().sin() * WAVE_AMPLITUDE;
        let y = rng.range(params.min_height, params.max_height);
        out.push(Vec3::new(x, y, geometry.origin.z + z));
    }
    Ok(out)
}

/// [`BLANKET_COUNT`] walkers over one random rectangular patch of the
/// surface footprint.  The patch is drawn once per call.
pub fn blanket<R: RandomSource + ?Sized>(
    params:   &SimParams,
    geometry: &MeshGeometry,
    rng:      &mut R,
) -> SpawnResult<Vec<Vec3>> {
    let (w, d) = (geometry.width(), geometry.depth());
    if w.is_nan() || d.is_nan() || w <= 0.0 || d <= 0.0 {
        return Err(degenerate(
            SpawnPattern::Blanket,
            format!("surface footprint {w} x {d}"),
        ));
    }

    let x_start = rng.range(-w / 2.0, (w / 2.0) * BLANKET_START_FRACTION);
    let x_end = rng.range(x_start, w);
    let z_start = rng.range(-d / 2.0, (d / 2.0) * BLANKET_START_FRACTION);
    let z_end = rng.range(z_start, d);

    Ok((0..BLANKET_COUNT)
        .map(|_| {
            let x = geometry.origin.x + rng.range(x_start, x_end);
            let y = rng.range(params.min_height, params.max_height);
            let z = geometry.origin.z + rng.range(z_start, z_end);
            Vec3::new(x, y, z)
        })
        .collect())
}
