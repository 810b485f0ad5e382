//! Content libraries and their items.

use std::collections::HashMap;
use std::str::FromStr;

use arcana_core::CardKey;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ContentError, ContentResult};

/// The bundled content libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Breathing, grounding, and body-scan exercises.
    Mindfulness,
    /// Cognitive behavioral therapy: distortions and reframes.
    Cbt,
    /// Dialectical behavior therapy skills.
    Dbt,
    /// Journal prompts, some tied to specific cards.
    JournalPrompts,
    /// Achievements, streaks, and levels.
    Gamification,
}

impl ContentKind {
    /// All libraries.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Mindfulness,
        ContentKind::Cbt,
        ContentKind::Dbt,
        ContentKind::JournalPrompts,
        ContentKind::Gamification,
    ];

    /// File name of the library inside a content directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Mindfulness => "mindfulness.json",
            Self::Cbt => "cbt.json",
            Self::Dbt => "dbt.json",
            Self::JournalPrompts => "journal_prompts.json",
            Self::Gamification => "gamification.json",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mindfulness => write!(f, "mindfulness"),
            Self::Cbt => write!(f, "cbt"),
            Self::Dbt => write!(f, "dbt"),
            Self::JournalPrompts => write!(f, "journal_prompts"),
            Self::Gamification => write!(f, "gamification"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "mindfulness" => Ok(Self::Mindfulness),
            "cbt" => Ok(Self::Cbt),
            "dbt" => Ok(Self::Dbt),
            "journal" | "journal_prompts" | "prompts" => Ok(Self::JournalPrompts),
            "gamification" | "achievements" => Ok(Self::Gamification),
            _ => Err(ContentError::UnknownLibrary(s.to_string())),
        }
    }
}

/// One entry of a content library.
///
/// Every library shares `id`, `title` and `category`. Anything else in the
/// JSON (steps, durations, point values) is kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique id within the library.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Grouping used by [`ContentLibrary::by_category`].
    #[serde(default)]
    pub category: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Card the item relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardKey>,
    /// Library-specific fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    items: Vec<ContentItem>,
}

/// A loaded library with an id index.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    kind: ContentKind,
    items: Vec<ContentItem>,
    index: HashMap<String, usize>,
}

impl ContentLibrary {
    /// Build a library from items. Later items with an id already seen are
    /// dropped.
    pub fn new(kind: ContentKind, items: Vec<ContentItem>) -> Self {
        let mut kept = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());
        for item in items {
            if index.contains_key(&item.id) {
                warn!(library = %kind, id = %item.id, "duplicate content id, keeping the first");
                continue;
            }
            index.insert(item.id.clone(), kept.len());
            kept.push(item);
        }
        Self {
            kind,
            items: kept,
            index,
        }
    }

    /// Parse a library from JSON of the form `{ "items": [...] }`.
    pub fn from_json(kind: ContentKind, json: &str) -> ContentResult<Self> {
        let file: LibraryFile =
            serde_json::from_str(json).map_err(|source| ContentError::Parse { kind, source })?;
        let library = Self::new(kind, file.items);
        debug!(library = %kind, items = library.len(), "loaded content library");
        Ok(library)
    }

    /// Which library this is.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All items in file order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items in a category, compared case-insensitively.
    pub fn by_category(&self, category: &str) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct categories in order of first appearance. Categories that
    /// differ only in case are one category, spelled as first seen.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            let category = item.category.as_str();
            if !category.is_empty() && !seen.iter().any(|c| c.eq_ignore_ascii_case(category)) {
                seen.push(category);
            }
        }
        seen
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the library has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "items": [
            { "id": "box", "title": "Box Breathing", "category": "breathing",
              "duration_minutes": 4, "steps": ["in", "hold", "out", "hold"] },
            { "id": "scan", "title": "Body Scan", "category": "body" },
            { "id": "478", "title": "4-7-8 Breath", "category": "Breathing", "card": 14 },
            { "id": "box", "title": "Duplicate", "category": "breathing" }
        ]
    }"#;

    fn sample() -> ContentLibrary {
        ContentLibrary::from_json(ContentKind::Mindfulness, SAMPLE).unwrap()
    }

    #[test]
    fn parses_items_and_extra_fields() {
        let lib = sample();
        let item = lib.get("box").unwrap();
        assert_eq!(item.title, "Box Breathing");
        assert_eq!(item.extra["duration_minutes"], 4);
        assert_eq!(item.extra["steps"].as_array().unwrap().len(), 4);
        assert_eq!(lib.get("478").unwrap().card, Some(CardKey(14)));
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let lib = sample();
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.get("box").unwrap().title, "Box Breathing");
    }

    #[test]
    fn category_lookup_ignores_case() {
        let lib = sample();
        let ids: Vec<_> = lib.by_category("breathing").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["box", "478"]);
        assert!(lib.by_category("sleep").is_empty());
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(sample().categories(), vec!["breathing", "body"]);
    }

    #[test]
    fn every_category_listed_finds_its_items() {
        let lib = sample();
        let total: usize = lib.categories().iter().map(|c| lib.by_category(c).len()).sum();
        assert_eq!(total, lib.len());
    }

    #[test]
    fn missing_id_is_none() {
        assert!(sample().get("nope").is_none());
    }

    #[test]
    fn parse_error_names_library() {
        let err = ContentLibrary::from_json(ContentKind::Cbt, "[1, 2").unwrap_err();
        assert!(err.to_string().contains("cbt"));
    }

    #[test]
    fn kind_names() {
        assert_eq!("journal".parse::<ContentKind>().unwrap(), ContentKind::JournalPrompts);
        assert_eq!("Journal-Prompts".parse::<ContentKind>().unwrap(), ContentKind::JournalPrompts);
        assert_eq!("DBT".parse::<ContentKind>().unwrap(), ContentKind::Dbt);
        assert!(matches!(
            "astrology".parse::<ContentKind>(),
            Err(ContentError::UnknownLibrary(_))
        ));
        for kind in ContentKind::ALL {
            assert_eq!(kind.to_string().parse::<ContentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn item_round_trips_through_json() {
        let lib = sample();
        let item = lib.get("box").unwrap();
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["duration_minutes"], 4);
        assert!(json.get("card").is_none());
        assert!(json.get("description").is_none());
    }
}
