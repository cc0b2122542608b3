//! `dla-walker` — walker records and the walker store for `rust_dla`.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`walker`] | `Walker` record, `WalkerState` lifecycle                  |
//! | [`store`]  | `WalkerStore` (active sequence + append-only inactive log) |
//!
//! # Lifecycle
//!
//! ```text
//!            ┌──── contact ────▶ Aggregated  (terminal)
//!  Active ───┤
//!            └──── too old / too far ──▶ Retired  (terminal)
//! ```
//!
//! A walker leaves the active sequence exactly once.  After that its record
//! is a read-only tombstone.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the id → slot index.       |

pub mod store;
pub mod walker;

#[cfg(test)]
mod tests;

pub use store::WalkerStore;
pub use walker::{Walker, WalkerState};
