//! The collision-oracle contract.

use std::fmt;

use dla_core::WalkerId;
use dla_walker::Walker;
use glam::Vec3;

/// What an active walker touched.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ContactKind {
    /// The fixed target surface.
    Surface,
    /// A walker that had already aggregated.
    Aggregate,
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKind::Surface   => f.write_str("surface"),
            ContactKind::Aggregate => f.write_str("aggregate"),
        }
    }
}

/// One contact event produced by this tick's movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Contact {
    pub walker: WalkerId,
    pub kind:   ContactKind,
}

/// Synchronous source of contact events.
///
/// Only [`poll_contacts`](Self::poll_contacts) is required.  The two hooks
/// let an oracle keep its own view of the aggregate in sync; hosts whose
/// physics engine already tracks frozen bodies can ignore them.
pub trait CollisionOracle {
    /// Contacts produced by this tick's movement.
    ///
    /// `active` is the store's active sequence right after movement.  Walkers
    /// culled this tick are still in it but no longer `Active`; contacts
    /// reported for them are ignored by the caller.
    fn poll_contacts(&mut self, active: &[Walker]) -> Vec<Contact>;

    /// A walker froze at `position` this tick.
    fn on_aggregated(&mut self, _walker: WalkerId, _position: Vec3) {}

    /// The simulation dropped every walker.
    fn on_reset(&mut self) {}
}

/// An oracle that never reports a contact.  Walkers drift until culled.
pub struct NoContacts;

impl CollisionOracle for NoContacts {
    fn poll_contacts(&mut self, _active: &[Walker]) -> Vec<Contact> {
        vec![]
    }
}
