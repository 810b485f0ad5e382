//! Deterministic quote selection.

use arcana_core::{CardKey, Orientation};
use tracing::{debug, warn};

use crate::config::QuoteConfig;
use crate::quote::Quote;
use crate::shuffle::{EULER, GOLDEN_RATIO, derive_seed, normalize_seed_or, shuffle};
use crate::store::QuoteStore;

/// A request for quotes about one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRequest {
    /// The card to quote.
    pub card: CardKey,
    /// Any real number; only its fractional magnitude matters.
    pub seed: f64,
    /// Upright or reversed pool.
    pub orientation: Orientation,
    /// How many quotes to return at most.
    pub count: usize,
}

impl SelectionRequest {
    /// A request for a single upright quote.
    pub fn new(card: impl Into<CardKey>, seed: f64) -> Self {
        Self {
            card: card.into(),
            seed,
            orientation: Orientation::Upright,
            count: 1,
        }
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the number of quotes wanted.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Picks quotes from a [`QuoteStore`].
///
/// Selection is a pure function of the request and the store: the same
/// card, seed, orientation and count always give the same quotes in the same
/// order. Named quotes come first; house filler only fills in once the named
/// quotes run out.
#[derive(Debug, Clone)]
pub struct QuoteSelector {
    store: QuoteStore,
    fallback_seed: f64,
}

impl QuoteSelector {
    /// Create a selector over a store with the default configuration.
    pub fn new(store: QuoteStore) -> Self {
        Self::with_config(store, &QuoteConfig::default())
    }

    /// Create a selector over a store.
    pub fn with_config(store: QuoteStore, config: &QuoteConfig) -> Self {
        Self {
            store,
            fallback_seed: config.fallback_seed,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Seed used in place of a non-finite one.
    pub fn fallback_seed(&self) -> f64 {
        self.fallback_seed
    }

    /// Select up to `count` quotes for a card.
    ///
    /// Returns `min(count, pool size)` quotes without repeats. An unknown card
    /// or a `count` of zero gives an empty list. A NaN or infinite seed is
    /// replaced by the configured fallback seed.
    pub fn select(
        &self,
        card: impl Into<CardKey>,
        seed: f64,
        orientation: Orientation,
        count: usize,
    ) -> Vec<&Quote> {
        let card = card.into();
        let pool = self.store.fetch(card, orientation);
        if pool.is_empty() || count == 0 {
            return Vec::new();
        }

        if !seed.is_finite() {
            warn!(%card, seed, fallback = self.fallback_seed, "non-finite seed, using fallback");
        }
        let s = normalize_seed_or(seed, self.fallback_seed);

        let (named, generic): (Vec<&Quote>, Vec<&Quote>) =
            pool.iter().partition(|q| q.is_named());

        // Separate seeds keep the two orderings from moving in lockstep.
        let named = shuffle(&named, derive_seed(s, GOLDEN_RATIO));
        let generic = shuffle(&generic, derive_seed(s, EULER));

        let picked: Vec<&Quote> = named.into_iter().chain(generic).take(count).collect();
        debug!(
            %card,
            %orientation,
            pool = pool.len(),
            picked = picked.len(),
            "selected quotes"
        );
        picked
    }

    /// Select quotes for a [`SelectionRequest`].
    pub fn select_request(&self, request: &SelectionRequest) -> Vec<&Quote> {
        self.select(request.card, request.seed, request.orientation, request.count)
    }

    /// Select a single quote, if the card has any.
    pub fn select_one(
        &self,
        card: impl Into<CardKey>,
        seed: f64,
        orientation: Orientation,
    ) -> Option<&Quote> {
        self.select(card, seed, orientation, 1).into_iter().next()
    }
}
