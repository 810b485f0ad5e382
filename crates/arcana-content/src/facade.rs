//! Lookup facade over the content libraries.

use std::collections::BTreeMap;
use std::path::Path;

use arcana_core::CardKey;
use tracing::debug;

use crate::error::{ContentError, ContentResult};
use crate::library::{ContentItem, ContentKind, ContentLibrary};

const BUNDLED: [(ContentKind, &str); 5] = [
    (
        ContentKind::Mindfulness,
        include_str!("../data/mindfulness.json"),
    ),
    (ContentKind::Cbt, include_str!("../data/cbt.json")),
    (ContentKind::Dbt, include_str!("../data/dbt.json")),
    (
        ContentKind::JournalPrompts,
        include_str!("../data/journal_prompts.json"),
    ),
    (
        ContentKind::Gamification,
        include_str!("../data/gamification.json"),
    ),
];

/// Read-only access to the content libraries.
///
/// The lenient lookups (`get_*`, `categories`, `prompts_for_card`) return
/// `None` or an empty list when a library or item is missing. Use
/// [`ContentFacade::library`] when a missing library should be an error.
#[derive(Debug, Clone, Default)]
pub struct ContentFacade {
    libraries: BTreeMap<ContentKind, ContentLibrary>,
}

impl ContentFacade {
    /// An empty facade with no libraries loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// All libraries bundled with the crate.
    pub fn bundled() -> ContentResult<Self> {
        BUNDLED
            .iter()
            .try_fold(Self::new(), |facade, (kind, json)| facade.load_json(*kind, json))
    }

    /// Load every library file found in `dir`.
    ///
    /// Files are named after [`ContentKind::file_name`]. Missing files are
    /// skipped; unreadable or malformed ones are errors.
    pub fn from_dir(dir: &Path) -> ContentResult<Self> {
        let mut facade = Self::new();
        for kind in ContentKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.is_file() {
                debug!(library = %kind, path = %path.display(), "no library file, skipping");
                continue;
            }
            let json = std::fs::read_to_string(&path)
                .map_err(|source| ContentError::Io { path: path.clone(), source })?;
            facade = facade.load_json(kind, &json)?;
        }
        Ok(facade)
    }

    /// Parse and add a library, replacing any loaded library of that kind.
    pub fn load_json(self, kind: ContentKind, json: &str) -> ContentResult<Self> {
        Ok(self.with_library(ContentLibrary::from_json(kind, json)?))
    }

    /// Add a library, replacing any loaded library of that kind.
    pub fn with_library(mut self, library: ContentLibrary) -> Self {
        self.libraries.insert(library.kind(), library);
        self
    }

    /// The library of a kind, or [`ContentError::NotLoaded`].
    pub fn library(&self, kind: ContentKind) -> ContentResult<&ContentLibrary> {
        self.libraries
            .get(&kind)
            .ok_or(ContentError::NotLoaded(kind))
    }

    /// Returns true if the library is loaded.
    pub fn is_loaded(&self, kind: ContentKind) -> bool {
        self.libraries.contains_key(&kind)
    }

    /// Kinds of the loaded libraries.
    pub fn loaded(&self) -> impl Iterator<Item = ContentKind> + '_ {
        self.libraries.keys().copied()
    }

    /// Look up an item by id.
    pub fn get_by_id(&self, kind: ContentKind, id: &str) -> Option<&ContentItem> {
        self.libraries.get(&kind)?.get(id)
    }

    /// All items of a library; empty if it is not loaded.
    pub fn get_all(&self, kind: ContentKind) -> &[ContentItem] {
        self.libraries
            .get(&kind)
            .map(ContentLibrary::items)
            .unwrap_or(&[])
    }

    /// Items of a library in one category; empty if there are none.
    pub fn get_by_category(&self, kind: ContentKind, category: &str) -> Vec<&ContentItem> {
        self.libraries
            .get(&kind)
            .map(|lib| lib.by_category(category))
            .unwrap_or_default()
    }

    /// Distinct categories of a library.
    pub fn categories(&self, kind: ContentKind) -> Vec<&str> {
        self.libraries
            .get(&kind)
            .map(ContentLibrary::categories)
            .unwrap_or_default()
    }

    /// Journal prompts tied to a card.
    pub fn prompts_for_card(&self, card: impl Into<CardKey>) -> Vec<&ContentItem> {
        let card = card.into();
        self.get_all(ContentKind::JournalPrompts)
            .iter()
            .filter(|item| item.card == Some(card))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bundled_loads_every_library() {
        let facade = ContentFacade::bundled().unwrap();
        for kind in ContentKind::ALL {
            assert!(facade.is_loaded(kind), "{kind} not loaded");
            assert!(!facade.get_all(kind).is_empty(), "{kind} is empty");
        }
        assert_eq!(facade.loaded().count(), 5);
    }

    #[test]
    fn lookups_on_bundled_data() {
        let facade = ContentFacade::bundled().unwrap();
        let item = facade
            .get_by_id(ContentKind::Mindfulness, "box_breathing")
            .unwrap();
        assert_eq!(item.category, "breathing");
        assert!(!facade.get_by_category(ContentKind::Dbt, "distress_tolerance").is_empty());
        assert!(facade.categories(ContentKind::Cbt).contains(&"cognitive_distortions"));
    }

    #[test]
    fn prompts_for_card() {
        let facade = ContentFacade::bundled().unwrap();
        let fool = facade.prompts_for_card(0u32);
        assert!(!fool.is_empty());
        assert!(fool.iter().all(|p| p.card == Some(CardKey(0))));
        assert!(facade.prompts_for_card(999u32).is_empty());
    }

    #[test]
    fn missing_things_are_empty_not_errors() {
        let facade = ContentFacade::new();
        assert!(facade.get_all(ContentKind::Cbt).is_empty());
        assert!(facade.get_by_id(ContentKind::Cbt, "anything").is_none());
        assert!(facade.get_by_category(ContentKind::Cbt, "anything").is_empty());
        assert!(facade.categories(ContentKind::Cbt).is_empty());
        assert!(facade.prompts_for_card(0u32).is_empty());

        let bundled = ContentFacade::bundled().unwrap();
        assert!(bundled.get_by_id(ContentKind::Cbt, "no_such_item").is_none());
        assert!(bundled.get_by_category(ContentKind::Cbt, "no_such_category").is_empty());
    }

    #[test]
    fn strict_accessor_reports_not_loaded() {
        let facade = ContentFacade::new();
        assert!(matches!(
            facade.library(ContentKind::Dbt),
            Err(ContentError::NotLoaded(ContentKind::Dbt))
        ));
    }

    #[test]
    fn from_dir_loads_present_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cbt.json"),
            r#"{ "items": [{ "id": "a", "title": "A", "category": "x" }] }"#,
        )
        .unwrap();
        let facade = ContentFacade::from_dir(dir.path()).unwrap();
        assert!(facade.is_loaded(ContentKind::Cbt));
        assert!(!facade.is_loaded(ContentKind::Dbt));
        assert_eq!(facade.get_all(ContentKind::Cbt).len(), 1);
    }

    #[test]
    fn from_dir_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dbt.json"), "{ nope").unwrap();
        let err = ContentFacade::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { kind: ContentKind::Dbt, .. }));
    }

    #[test]
    fn later_library_replaces_earlier() {
        let facade = ContentFacade::new()
            .load_json(ContentKind::Cbt, r#"{ "items": [{ "id": "a", "title": "A" }] }"#)
            .unwrap()
            .load_json(ContentKind::Cbt, r#"{ "items": [{ "id": "b", "title": "B" }] }"#)
            .unwrap();
        assert!(facade.get_by_id(ContentKind::Cbt, "a").is_none());
        assert!(facade.get_by_id(ContentKind::Cbt, "b").is_some());
    }
}
