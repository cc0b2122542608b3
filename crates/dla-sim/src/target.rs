//! Where the next batch should land.

use glam::Vec3;

/// Polled once per tick, before the spawn gate.
///
/// `None` means nothing is being pointed at; the tick skips spawning.  This
/// replaces pointer enter/leave events with a plain query so input delivery
/// stays decoupled from the tick.
pub trait TargetSource {
    fn hover_point(&mut self) -> Option<Vec3>;
}

/// Always targets the same point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTarget(pub Vec3);

impl TargetSource for FixedTarget {
    fn hover_point(&mut self) -> Option<Vec3> {
        Some(self.0)
    }
}

/// Never targets anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTarget;

impl TargetSource for NoTarget {
    fn hover_point(&mut self) -> Option<Vec3> {
        None
    }
}

impl<F> TargetSource for F
where
    F: FnMut() -> Option<Vec3>,
{
    fn hover_point(&mut self) -> Option<Vec3> {
        self()
    }
}
