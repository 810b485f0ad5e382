//! The quote store.
//!
//! Quote data arrives as JSON keyed by card. Each card is either split by
//! orientation, with every orientation holding category buckets or a flat
//! list, or it is a single flat list shared by both orientations:
//!
//! ```json
//! {
//!   "house_source": "Tarot Wisdom",
//!   "cards": {
//!     "0": {
//!       "upright": { "general": [{ "text": "...", "source": "..." }] },
//!       "reversed": [{ "text": "...", "source": "..." }]
//!     },
//!     "22": [{ "text": "...", "source": "..." }]
//!   }
//! }
//! ```
//!
//! The shape is resolved once while loading. After that every card and
//! orientation is a plain, ordered pool of [`Quote`]s.

use std::collections::BTreeMap;
use std::path::Path;

use arcana_core::{CardKey, Orientation};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::QuoteConfig;
use crate::error::{QuoteError, QuoteResult};
use crate::quote::{AttributionKind, Quote};

/// The quote data shipped with the crate.
const BUNDLED_QUOTES: &str = include_str!("../data/quotes.json");

/// Categories in the order their quotes are flattened into a pool. Unknown
/// categories follow, alphabetically.
pub const CATEGORY_ORDER: &[&str] = &[
    "general",
    "career",
    "wellness",
    "finance",
    "personal_growth",
    "decision_making",
    "shadow_work",
];

/// A quote as it appears in the data, before attribution is decided.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuote {
    /// The quote text.
    pub text: String,
    /// The quote's source label.
    #[serde(default)]
    pub source: String,
}

impl RawQuote {
    /// Create a raw quote.
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// The quotes for one orientation of a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuoteBucket {
    /// A plain list of quotes.
    Flat(Vec<RawQuote>),
    /// Quotes grouped by category name.
    Categorized(BTreeMap<String, Vec<RawQuote>>),
}

impl Default for QuoteBucket {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl QuoteBucket {
    /// Returns true if the bucket holds no quotes.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(quotes) => quotes.is_empty(),
            Self::Categorized(buckets) => buckets.values().all(Vec::is_empty),
        }
    }

    /// Flatten into a single ordered list, categories in [`CATEGORY_ORDER`].
    fn into_pool(self) -> Vec<RawQuote> {
        match self {
            Self::Flat(quotes) => quotes,
            Self::Categorized(buckets) => {
                let mut buckets: Vec<_> = buckets.into_iter().collect();
                // Stable: unknown categories keep the map's alphabetical order.
                buckets.sort_by_key(|(name, _)| category_position(name));
                buckets.into_iter().flat_map(|(_, quotes)| quotes).collect()
            }
        }
    }
}

fn category_position(name: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == name)
        .unwrap_or(CATEGORY_ORDER.len())
}

/// The quote data for one card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CardEntry {
    /// One list used for both orientations.
    Flat(Vec<RawQuote>),
    /// Separate quotes per orientation.
    Split(SplitEntry),
}

/// Quotes keyed by orientation. Any key other than `upright` or `reversed`
/// is a parse error, so a card that skips the orientation level fails to
/// load instead of loading empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitEntry {
    /// Quotes for the upright card.
    #[serde(default)]
    pub upright: QuoteBucket,
    /// Quotes for the reversed card.
    #[serde(default)]
    pub reversed: QuoteBucket,
}

/// On-disk layout of a quote file.
#[derive(Debug, Deserialize)]
struct QuoteFile {
    #[serde(default)]
    house_source: Option<String>,
    #[serde(default)]
    cards: BTreeMap<String, CardEntry>,
}

/// Resolved pools for one card.
#[derive(Debug, Clone, Default)]
struct CardPools {
    upright: Vec<Quote>,
    reversed: Vec<Quote>,
}

impl CardPools {
    fn get(&self, orientation: Orientation) -> &[Quote] {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// Read-only quote pools for every card and orientation.
///
/// Build one with [`QuoteStore::bundled`], [`QuoteStore::from_json`] or
/// [`QuoteStore::from_path`], then hand it to a
/// [`QuoteSelector`](crate::QuoteSelector). The store is never modified
/// after loading, so it can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    cards: BTreeMap<CardKey, CardPools>,
}

impl QuoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the quote data bundled with the crate.
    pub fn bundled(config: &QuoteConfig) -> QuoteResult<Self> {
        Self::from_json(BUNDLED_QUOTES, config)
    }

    /// Load quote data from a JSON file.
    pub fn from_path(path: &Path, config: &QuoteConfig) -> QuoteResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| QuoteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, config)
    }

    /// Load quote data from a JSON string.
    ///
    /// A `house_source` in the data overrides the one in `config`.
    pub fn from_json(json: &str, config: &QuoteConfig) -> QuoteResult<Self> {
        let file: QuoteFile = serde_json::from_str(json)?;
        let house_source = file
            .house_source
            .unwrap_or_else(|| config.house_source.clone());

        let mut store = Self::new();
        for (key, entry) in file.cards {
            let key = key
                .trim()
                .parse::<u32>()
                .map_err(|_| QuoteError::InvalidCardKey(key.clone()))?;
            if !CardKey(key).in_deck() {
                warn!(card = key, "quote data for a card outside the 78-card deck");
            }
            store.insert(CardKey(key), entry, &house_source);
        }

        debug!(
            cards = store.len(),
            quotes = store.total_quotes(),
            house_source = %house_source,
            "loaded quote store"
        );
        Ok(store)
    }

    /// Add a card's quotes, classifying sources against `house_source`.
    /// Replaces any existing entry for the card.
    pub fn with_card(
        mut self,
        key: impl Into<CardKey>,
        entry: CardEntry,
        house_source: &str,
    ) -> Self {
        self.insert(key.into(), entry, house_source);
        self
    }

    fn insert(&mut self, key: CardKey, entry: CardEntry, house_source: &str) {
        let classify = |raw: Vec<RawQuote>| -> Vec<Quote> {
            raw.into_iter()
                .map(|q| {
                    let attribution = attribution_of(&q.source, house_source);
                    Quote::new(q.text, q.source, attribution)
                })
                .collect()
        };

        let pools = match entry {
            CardEntry::Flat(quotes) => {
                let pool = classify(quotes);
                CardPools {
                    upright: pool.clone(),
                    reversed: pool,
                }
            }
            CardEntry::Split(SplitEntry { upright, reversed }) => {
                if upright.is_empty() && reversed.is_empty() {
                    warn!(card = %key, "quote entry has neither upright nor reversed quotes");
                }
                CardPools {
                    upright: classify(upright.into_pool()),
                    reversed: classify(reversed.into_pool()),
                }
            }
        };
        self.cards.insert(key, pools);
    }

    /// The pool of quotes for a card and orientation.
    ///
    /// Unknown cards give an empty slice. The order is the same on every call.
    pub fn fetch(&self, key: impl Into<CardKey>, orientation: Orientation) -> &[Quote] {
        self.cards
            .get(&key.into())
            .map(|pools| pools.get(orientation))
            .unwrap_or(&[])
    }

    /// Number of quotes available for a card and orientation.
    pub fn pool_size(&self, key: impl Into<CardKey>, orientation: Orientation) -> usize {
        self.fetch(key, orientation).len()
    }

    /// Card keys that have quote data, in ascending order.
    pub fn card_keys(&self) -> impl Iterator<Item = CardKey> + '_ {
        self.cards.keys().copied()
    }

    /// Returns true if the card has any quote data.
    pub fn contains(&self, key: impl Into<CardKey>) -> bool {
        self.cards.contains_key(&key.into())
    }

    /// Number of cards with quote data.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no card has quote data.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of quotes across all cards and orientations.
    pub fn total_quotes(&self) -> usize {
        self.cards
            .values()
            .map(|p| p.upright.len() + p.reversed.len())
            .sum()
    }
}

/// Blank sources and the house label are generic. Anything else is named.
fn attribution_of(source: &str, house_source: &str) -> AttributionKind {
    if source.trim().is_empty() || source == house_source {
        AttributionKind::Generic
    } else {
        AttributionKind::Named
    }
}
