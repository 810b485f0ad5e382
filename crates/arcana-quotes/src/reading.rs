//! Whole-spread readings.
//!
//! A reading deals cards from a seeded shuffle of the full deck into a
//! spread's positions, orients each one, and attaches a quote. Like quote
//! selection, a reading is a pure function of its seed.

use std::f64::consts::SQRT_2;

use arcana_core::{Card, CardKey, Orientation, SpreadLayout, SpreadPosition};
use serde::Serialize;
use tracing::debug;

use crate::quote::Quote;
use crate::selector::QuoteSelector;
use crate::shuffle::{GOLDEN_RATIO, Lcg, derive_seed, normalize_seed, normalize_seed_or, shuffle};

/// A card dealt into one position of a spread.
#[derive(Debug, Clone, Serialize)]
pub struct DrawnCard<'a> {
    /// Where the card lies.
    pub position: &'static SpreadPosition,
    /// The card drawn.
    pub card: Card,
    /// Upright or reversed.
    pub orientation: Orientation,
    /// A quote for the card, if the store has any.
    pub quote: Option<&'a Quote>,
}

/// A complete reading of one spread.
#[derive(Debug, Clone, Serialize)]
pub struct Reading<'a> {
    /// Id of the spread that was read.
    pub spread: &'static str,
    /// The normalized seed the reading was dealt from.
    pub seed: f64,
    /// Cards in dealing order, one per position.
    pub cards: Vec<DrawnCard<'a>>,
    #[serde(skip)]
    layout: &'static SpreadLayout,
}

impl Reading<'_> {
    /// The spread layout.
    pub fn layout(&self) -> &'static SpreadLayout {
        self.layout
    }

    /// Number of reversed cards in the reading.
    pub fn reversed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.orientation.is_reversed())
            .count()
    }
}

/// Deal a reading for `layout` from `seed`.
pub fn draw_reading<'a>(
    selector: &'a QuoteSelector,
    layout: &'static SpreadLayout,
    seed: f64,
) -> Reading<'a> {
    let s = normalize_seed_or(seed, selector.fallback_seed());

    let deck: Vec<CardKey> = CardKey::deck().collect();
    let dealt = shuffle(&deck, s);

    let mut orient = Lcg::new(derive_seed(s, SQRT_2));
    // The first draw of a fresh generator barely moves with the seed.
    orient.next_fraction();

    let mut cards = Vec::with_capacity(layout.len());
    for (index, (position, key)) in layout.positions.iter().zip(dealt).enumerate() {
        let Some(card) = Card::from_key(key) else {
            continue;
        };
        let orientation = Orientation::from_reversed(orient.next_fraction() < 0.5);
        let quote_seed = normalize_seed(s + (index + 1) as f64 * GOLDEN_RATIO);
        let quote = selector.select_one(key, quote_seed, orientation);
        cards.push(DrawnCard {
            position,
            card,
            orientation,
            quote,
        });
    }

    debug!(spread = layout.id, seed = s, cards = cards.len(), "dealt reading");
    Reading {
        spread: layout.id,
        seed: s,
        cards,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HOUSE_SOURCE;
    use crate::store::{CardEntry, QuoteStore, RawQuote};
    use arcana_core::{all_spreads, spread};
    use std::collections::HashSet;

    /// A store with one named quote for every card.
    fn full_selector() -> QuoteSelector {
        let store = CardKey::deck().fold(QuoteStore::new(), |store, key| {
            store.with_card(
                key,
                CardEntry::Flat(vec![RawQuote::new(format!("quote {key}"), "Author")]),
                DEFAULT_HOUSE_SOURCE,
            )
        });
        QuoteSelector::new(store)
    }

    fn keys(reading: &Reading<'_>) -> Vec<u32> {
        reading.cards.iter().map(|c| c.card.key.0).collect()
    }

    #[test]
    fn one_card_per_position() {
        let sel = full_selector();
        for layout in all_spreads() {
            let reading = draw_reading(&sel, layout, 0.42);
            assert_eq!(reading.cards.len(), layout.len());
            assert_eq!(reading.spread, layout.id);
            assert_eq!(reading.layout().id, layout.id);
        }
    }

    #[test]
    fn cards_never_repeat() {
        let sel = full_selector();
        let cc = spread("celtic_cross").unwrap();
        for k in 0..20 {
            let reading = draw_reading(&sel, cc, f64::from(k) / 20.0);
            let unique: HashSet<_> = keys(&reading).into_iter().collect();
            assert_eq!(unique.len(), 10);
        }
    }

    #[test]
    fn same_seed_same_reading() {
        let sel = full_selector();
        let cc = spread("celtic_cross").unwrap();
        let a = draw_reading(&sel, cc, 0.1337);
        let b = draw_reading(&sel, cc, 0.1337);
        assert_eq!(keys(&a), keys(&b));
        let orient = |r: &Reading<'_>| r.cards.iter().map(|c| c.orientation).collect::<Vec<_>>();
        assert_eq!(orient(&a), orient(&b));
    }

    #[test]
    fn pinned_three_card_reading() {
        let sel = full_selector();
        let reading = draw_reading(&sel, spread("three_card").unwrap(), 0.42);
        assert_eq!(keys(&reading), vec![59, 20, 51]);
        let orientations: Vec<_> = reading.cards.iter().map(|c| c.orientation).collect();
        assert_eq!(
            orientations,
            vec![Orientation::Upright, Orientation::Reversed, Orientation::Reversed]
        );
        assert_eq!(reading.reversed_count(), 2);
        assert_eq!(reading.cards[1].position.label, "Present");
    }

    #[test]
    fn both_orientations_show_up() {
        let sel = full_selector();
        let cc = spread("celtic_cross").unwrap();
        let reading = draw_reading(&sel, cc, 0.1);
        assert!(reading.reversed_count() > 0);
        assert!(reading.reversed_count() < 10);
    }

    #[test]
    fn quotes_attached_when_available() {
        let sel = full_selector();
        let reading = draw_reading(&sel, spread("horseshoe").unwrap(), 0.9);
        for drawn in &reading.cards {
            let quote = drawn.quote.expect("every card has a quote");
            assert_eq!(quote.text, format!("quote {}", drawn.card.key));
        }
    }

    #[test]
    fn missing_quotes_leave_gaps() {
        let sel = QuoteSelector::new(QuoteStore::new());
        let reading = draw_reading(&sel, spread("three_card").unwrap(), 0.5);
        assert_eq!(reading.cards.len(), 3);
        assert!(reading.cards.iter().all(|c| c.quote.is_none()));
    }

    #[test]
    fn serializes_to_json() {
        let sel = full_selector();
        let reading = draw_reading(&sel, spread("single").unwrap(), 0.3);
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["spread"], "single");
        assert_eq!(json["cards"].as_array().unwrap().len(), 1);
        assert!(json["cards"][0]["quote"]["text"].is_string());
        assert!(json.get("layout").is_none());
    }
}
