//! Spread layouts.
//!
//! A spread is an ordered list of positions, each with a label, a short
//! reading of what the position means, and where the card sits on the table.
//! Coordinates are in card-sized grid units with the origin top-left; a
//! renderer scales them however it likes.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// One position in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpreadPosition {
    /// Short label, e.g. "Past".
    pub label: &'static str,
    /// What a card in this position speaks to.
    pub meaning: &'static str,
    /// Horizontal grid coordinate.
    pub x: f32,
    /// Vertical grid coordinate.
    pub y: f32,
    /// Laid crosswise over the previous card.
    pub rotated: bool,
}

/// A named arrangement of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpreadLayout {
    /// Stable identifier, e.g. `"celtic_cross"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Positions in dealing order.
    pub positions: &'static [SpreadPosition],
}

impl SpreadLayout {
    /// Number of cards the spread deals.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the spread has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Width and height of the bounding box, in grid units.
    pub fn extent(&self) -> (f32, f32) {
        self.positions.iter().fold((0.0_f32, 0.0_f32), |(w, h), p| {
            (w.max(p.x + 1.0), h.max(p.y + 1.0))
        })
    }
}

const fn pos(label: &'static str, meaning: &'static str, x: f32, y: f32) -> SpreadPosition {
    SpreadPosition {
        label,
        meaning,
        x,
        y,
        rotated: false,
    }
}

const SINGLE: SpreadLayout = SpreadLayout {
    id: "single",
    name: "Card of the Day",
    description: "One card to carry through the day.",
    positions: &[pos("Focus", "The energy to work with today", 0.0, 0.0)],
};

const THREE_CARD: SpreadLayout = SpreadLayout {
    id: "three_card",
    name: "Past, Present, Future",
    description: "A quick read of where a situation came from and where it is heading.",
    positions: &[
        pos("Past", "What led here", 0.0, 0.0),
        pos("Present", "Where things stand", 1.0, 0.0),
        pos("Future", "Where things are heading", 2.0, 0.0),
    ],
};

const CELTIC_CROSS: SpreadLayout = SpreadLayout {
    id: "celtic_cross",
    name: "Celtic Cross",
    description: "The classic ten-card spread for a full look at one question.",
    positions: &[
        pos("Present", "The heart of the matter", 1.0, 1.0),
        SpreadPosition {
            label: "Challenge",
            meaning: "What crosses you",
            x: 1.0,
            y: 1.0,
            rotated: true,
        },
        pos("Foundation", "What lies beneath", 1.0, 2.0),
        pos("Recent Past", "What is passing away", 0.0, 1.0),
        pos("Crown", "What you are reaching for", 1.0, 0.0),
        pos("Near Future", "What is approaching", 2.0, 1.0),
        pos("Self", "How you stand in this", 3.0, 3.0),
        pos("Environment", "The people and forces around you", 3.0, 2.0),
        pos("Hopes and Fears", "What you want and what you dread", 3.0, 1.0),
        pos("Outcome", "Where this road leads", 3.0, 0.0),
    ],
};

const HORSESHOE: SpreadLayout = SpreadLayout {
    id: "horseshoe",
    name: "Horseshoe",
    description: "Seven cards in an arc, for practical guidance on a decision.",
    positions: &[
        pos("Past", "Influences behind you", 0.0, 0.0),
        pos("Present", "Your current position", 1.0, 1.0),
        pos("Hidden Influences", "What you cannot yet see", 2.0, 2.0),
        pos("Obstacles", "What stands in the way", 3.0, 2.5),
        pos("External Influences", "How others affect this", 4.0, 2.0),
        pos("Advice", "The suggested approach", 5.0, 1.0),
        pos("Outcome", "The likely result", 6.0, 0.0),
    ],
};

const RELATIONSHIP: SpreadLayout = SpreadLayout {
    id: "relationship",
    name: "Relationship",
    description: "Five cards on two people and what sits between them.",
    positions: &[
        pos("You", "What you bring", 0.0, 1.0),
        pos("Partner", "What they bring", 2.0, 1.0),
        pos("Connection", "The bond itself", 1.0, 1.0),
        pos("Challenge", "The friction to work through", 1.0, 0.0),
        pos("Potential", "What the bond can become", 1.0, 2.0),
    ],
};

static SPREADS: [SpreadLayout; 5] = [SINGLE, THREE_CARD, CELTIC_CROSS, HORSESHOE, RELATIONSHIP];

/// All bundled spread layouts.
pub fn all_spreads() -> &'static [SpreadLayout] {
    &SPREADS
}

/// Look up a spread by id. Dashes and case are ignored, so
/// `"Three-Card"` finds `three_card`.
pub fn spread(id: &str) -> CoreResult<&'static SpreadLayout> {
    let wanted = id.trim().to_lowercase().replace(['-', ' '], "_");
    SPREADS
        .iter()
        .find(|s| s.id == wanted)
        .ok_or_else(|| CoreError::UnknownSpread(id.to_string()))
}
