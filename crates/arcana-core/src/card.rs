//! The tarot deck.
//!
//! Cards are identified by a numeric [`CardKey`]: 0-21 are the Major Arcana
//! in traditional order, 22-77 are the Minor Arcana grouped by suit (Wands,
//! Cups, Swords, Pentacles), each suit running Ace through King.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Number of cards in a standard tarot deck.
pub const DECK_SIZE: u32 = 78;

/// Number of Major Arcana cards.
const MAJOR_COUNT: u32 = 22;

/// Names of the Major Arcana, indexed by card key.
const MAJOR_ARCANA: [&str; MAJOR_COUNT as usize] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Integer identifier of a card.
///
/// Keys outside `0..78` are representable on purpose: quote data may be
/// keyed by ids the deck does not know, and lookups simply come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(pub u32);

impl CardKey {
    /// Returns true if this key names one of the 78 cards of the deck.
    pub fn in_deck(self) -> bool {
        self.0 < DECK_SIZE
    }

    /// Iterate over every key of the standard deck, in order.
    pub fn deck() -> impl Iterator<Item = CardKey> {
        (0..DECK_SIZE).map(CardKey)
    }
}

impl From<u32> for CardKey {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a card was drawn upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The card faces the reader.
    #[default]
    Upright,
    /// The card is upside down.
    Reversed,
}

impl Orientation {
    /// Build an orientation from a `reversed` flag.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Returns true for [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A Minor Arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Fire: drive, creativity, ambition.
    Wands,
    /// Water: feeling, relationships, intuition.
    Cups,
    /// Air: thought, conflict, truth.
    Swords,
    /// Earth: work, money, the body.
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// The rank of a Minor Arcana card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Ace (one).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page (court).
    Page,
    /// Knight (court).
    Knight,
    /// Queen (court).
    Queen,
    /// King (court).
    King,
}

impl Rank {
    /// All ranks in suit order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// Returns true for Page, Knight, Queen and King.
    pub fn is_court(self) -> bool {
        matches!(self, Self::Page | Self::Knight | Self::Queen | Self::King)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        };
        write!(f, "{name}")
    }
}

/// Which half of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// One of the 22 trump cards.
    Major,
    /// A suited pip or court card.
    Minor {
        /// The card's suit.
        suit: Suit,
        /// The card's rank within the suit.
        rank: Rank,
    },
}

/// A card of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The card's key.
    pub key: CardKey,
    /// Display name, e.g. "The Fool" or "Ace of Cups".
    pub name: String,
    /// Major or Minor Arcana.
    pub arcana: Arcana,
}

impl Card {
    /// Look up the card with the given key. Returns `None` outside the deck.
    pub fn from_key(key: impl Into<CardKey>) -> Option<Self> {
        let key = key.into();
        if key.0 < MAJOR_COUNT {
            return Some(Self {
                key,
                name: MAJOR_ARCANA[key.0 as usize].to_string(),
                arcana: Arcana::Major,
            });
        }
        if !key.in_deck() {
            return None;
        }

        let minor = (key.0 - MAJOR_COUNT) as usize;
        let suit = Suit::ALL[minor / Rank::ALL.len()];
        let rank = Rank::ALL[minor % Rank::ALL.len()];
        Some(Self {
            key,
            name: format!("{rank} of {suit}"),
            arcana: Arcana::Minor { suit, rank },
        })
    }

    /// All 78 cards in key order.
    pub fn all() -> Vec<Self> {
        CardKey::deck().filter_map(Self::from_key).collect()
    }

    /// Resolve a card from user input.
    ///
    /// Accepts a numeric key (`"13"`), a display name in any case
    /// (`"The Hanged Man"`), a slug (`"the-hanged-man"`), or a name without
    /// the leading article (`"hanged man"`).
    pub fn find(query: &str) -> CoreResult<Self> {
        let trimmed = query.trim();
        if let Ok(n) = trimmed.parse::<u32>() {
            return Self::from_key(n).ok_or_else(|| CoreError::UnknownCard(trimmed.to_string()));
        }

        let wanted = normalize_name(trimmed);
        let wanted_bare = strip_article(&wanted);
        Self::all()
            .into_iter()
            .find(|card| {
                let name = normalize_name(&card.name);
                name == wanted || strip_article(&name) == wanted_bare
            })
            .ok_or_else(|| CoreError::UnknownCard(trimmed.to_string()))
    }

    /// URL-friendly name, e.g. `"the-high-priestess"`.
    pub fn slug(&self) -> String {
        normalize_name(&self.name).replace(' ', "-")
    }

    /// Returns true for the Major Arcana.
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// The suit of a Minor Arcana card.
    pub fn suit(&self) -> Option<Suit> {
        match self.arcana {
            Arcana::Major => None,
            Arcana::Minor { suit, .. } => Some(suit),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_article(s: &str) -> &str {
    s.strip_prefix("the ").unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deck_has_78_cards() {
        let deck = Card::all();
        assert_eq!(deck.len(), 78);
        assert_eq!(deck.iter().filter(|c| c.is_major()).count(), 22);
    }

    #[test]
    fn major_arcana_in_order() {
        assert_eq!(Card::from_key(0u32).unwrap().name, "The Fool");
        assert_eq!(Card::from_key(13u32).unwrap().name, "Death");
        assert_eq!(Card::from_key(21u32).unwrap().name, "The World");
    }

    #[test]
    fn minor_arcana_layout() {
        assert_eq!(Card::from_key(22u32).unwrap().name, "Ace of Wands");
        assert_eq!(Card::from_key(35u32).unwrap().name, "King of Wands");
        assert_eq!(Card::from_key(36u32).unwrap().name, "Ace of Cups");
        assert_eq!(Card::from_key(50u32).unwrap().name, "Ace of Swords");
        assert_eq!(Card::from_key(77u32).unwrap().name, "King of Pentacles");

        let queen = Card::from_key(76u32).unwrap();
        assert_eq!(queen.suit(), Some(Suit::Pentacles));
        assert!(matches!(queen.arcana, Arcana::Minor { rank, .. } if rank.is_court()));
    }

    #[test]
    fn keys_outside_deck() {
        assert!(Card::from_key(78u32).is_none());
        assert!(Card::from_key(999u32).is_none());
        assert!(!CardKey(78).in_deck());
        assert!(CardKey(77).in_deck());
    }

    #[test]
    fn find_accepts_many_spellings() {
        assert_eq!(Card::find("13").unwrap().key, CardKey(13));
        assert_eq!(Card::find("The Hanged Man").unwrap().key, CardKey(12));
        assert_eq!(Card::find("the-hanged-man").unwrap().key, CardKey(12));
        assert_eq!(Card::find("hanged man").unwrap().key, CardKey(12));
        assert_eq!(Card::find("  ACE of cups ").unwrap().key, CardKey(36));
        assert_eq!(Card::find("wheel_of_fortune").unwrap().key, CardKey(10));
    }

    #[test]
    fn find_rejects_unknown() {
        assert!(matches!(Card::find("99"), Err(CoreError::UnknownCard(_))));
        assert!(matches!(Card::find("The Joker"), Err(CoreError::UnknownCard(_))));
    }

    #[test]
    fn slugs() {
        assert_eq!(Card::from_key(2u32).unwrap().slug(), "the-high-priestess");
        assert_eq!(Card::from_key(64u32).unwrap().slug(), "ace-of-pentacles");
    }

    #[test]
    fn orientation_from_flag() {
        assert_eq!(Orientation::from_reversed(true), Orientation::Reversed);
        assert_eq!(Orientation::from_reversed(false), Orientation::Upright);
        assert!(Orientation::Reversed.is_reversed());
        assert_eq!(Orientation::default(), Orientation::Upright);
        assert_eq!(Orientation::Reversed.to_string(), "reversed");
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::Reversed).unwrap();
        assert_eq!(json, "\"reversed\"");
    }

    proptest! {
        #[test]
        fn every_card_is_found_by_its_name(key in 0u32..78) {
            let card = Card::from_key(key).unwrap();
            prop_assert_eq!(Card::find(&card.name).unwrap().key, card.key);
            prop_assert_eq!(Card::find(&card.slug()).unwrap().key, card.key);
        }
    }
}
