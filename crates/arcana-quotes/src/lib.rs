//! Card quotes for Arcana.
//!
//! A [`QuoteStore`] holds the quote pools for every card and orientation,
//! loaded once from JSON. A [`QuoteSelector`] picks a deterministic,
//! attribution-preferring subset of a pool for a given seed, using the
//! linear-congruential Fisher-Yates shuffle in [`shuffle`]. [`reading`]
//! builds whole spreads on top of the selector.

pub mod config;
pub mod error;
pub mod quote;
pub mod reading;
pub mod selector;
pub mod shuffle;
pub mod store;

pub use config::QuoteConfig;
pub use error::{QuoteError, QuoteResult};
pub use quote::{AttributionKind, Quote};
pub use reading::{DrawnCard, Reading, draw_reading};
pub use selector::{QuoteSelector, SelectionRequest};
pub use shuffle::{Lcg, normalize_seed, shuffle};
pub use store::{CardEntry, QuoteBucket, QuoteStore, RawQuote, SplitEntry};
