//! Quote records.

use serde::Serialize;

/// Where a quote comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributionKind {
    /// Attributed to a real author, text, or proverb.
    #[default]
    Named,
    /// House-written filler text.
    Generic,
}

/// An immutable quote.
///
/// The attribution is decided once, when the store is loaded, and is not
/// part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quote {
    /// The quote text.
    pub text: String,
    /// The named source, or the house label for filler.
    pub source: String,
    /// Named or generic.
    #[serde(skip)]
    pub attribution: AttributionKind,
}

impl Quote {
    /// Create a quote with an explicit attribution.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        attribution: AttributionKind,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            attribution,
        }
    }

    /// Returns true if the quote has a real, named source.
    pub fn is_named(&self) -> bool {
        self.attribution == AttributionKind::Named
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.source)
    }
}
