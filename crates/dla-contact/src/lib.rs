//! `dla-contact` — who touched what this tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`oracle`]    | `CollisionOracle` trait, `Contact`, `ContactKind`, `NoContacts` |
//! | [`proximity`] | `ProximityOracle` — bounding-box surface + R-tree aggregate  |
//!
//! The tick loop asks the oracle for contacts once per tick, after movement.
//! A host with its own physics engine implements [`CollisionOracle`] over its
//! collision callbacks; headless runs and tests use [`ProximityOracle`].

pub mod oracle;
pub mod proximity;

#[cfg(test)]
mod tests;

pub use oracle::{CollisionOracle, Contact, ContactKind, NoContacts};
pub use proximity::ProximityOracle;
