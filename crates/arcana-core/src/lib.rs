//! Core types for Arcana: the tarot deck, orientations, and spread layouts.
//!
//! This crate holds the static data model shared by the quote selector, the
//! content facade, and the CLI. It has no I/O and no randomness; everything
//! here is either a value type or a literal table.

/// The 78-card deck, card keys, and card orientation.
pub mod card;
/// Error types used throughout the crate.
pub mod error;
/// Spread layouts: named positions with grid coordinates.
pub mod spread;

/// Re-export card types.
pub use card::{Arcana, Card, CardKey, DECK_SIZE, Orientation, Rank, Suit};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export spread types.
pub use spread::{SpreadLayout, SpreadPosition, all_spreads, spread};
