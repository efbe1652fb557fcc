//! In-memory flashcard catalog
//!
//! Categories map to an ordered list of cards. The catalog lives only as
//! long as the process; nothing here touches the disk.

use std::collections::BTreeMap;

use super::models::{Card, CardImage, CategoryView};

/// All categories and their cards, keyed by exact category name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<Card>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the example categories shown on first launch
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.add_card("2. Weltkrieg", "Dauer", Some("1939-1945"), None);
        catalog.add_card(
            "2. Weltkrieg",
            "Schlacht von Stalingrad",
            Some("1942-1943"),
            None,
        );
        catalog.add_card(
            "Mathematik",
            "Was ist Pi?",
            Some("Eine mathematische Konstante ~ 3.14159"),
            None,
        );
        catalog
    }

    // ==================== Mutation ====================

    /// Append a card to a category, creating the category if needed.
    ///
    /// Returns `None` and leaves the catalog untouched when the category
    /// name is empty, or when there is neither a topic nor an image.
    pub fn add_card(
        &mut self,
        category: &str,
        topic: &str,
        answer: Option<&str>,
        image: Option<CardImage>,
    ) -> Option<&Card> {
        if category.is_empty() {
            log::debug!("Ignoring card without category");
            return None;
        }
        if topic.is_empty() && image.is_none() {
            log::debug!("Ignoring card without topic or image in '{}'", category);
            return None;
        }

        let card = Card::new(topic.to_string(), answer.map(str::to_string), image);
        let cards = self.categories.entry(category.to_string()).or_default();
        cards.push(card);
        log::info!("Added card to '{}' ({} cards)", category, cards.len());
        cards.last()
    }

    /// Remove the card at `index`, dropping the category once it is empty.
    ///
    /// Unknown categories and out-of-range indices are ignored.
    pub fn delete_card(&mut self, category: &str, index: usize) -> Option<Card> {
        let Some(cards) = self.categories.get_mut(category) else {
            log::debug!("Delete ignored: no category '{}'", category);
            return None;
        };
        if index >= cards.len() {
            log::debug!(
                "Delete ignored: index {} out of range for '{}' ({} cards)",
                index,
                category,
                cards.len()
            );
            return None;
        }

        let removed = cards.remove(index);
        if cards.is_empty() {
            self.categories.remove(category);
            log::info!("Removed empty category '{}'", category);
        }
        Some(removed)
    }

    // ==================== Queries ====================

    /// Category names in lexicographic order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn categories(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Categories matching a search string.
    ///
    /// A category matches when its name contains the query, or when any of
    /// its card topics does, ignoring case. Matching categories keep all of
    /// their cards. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<CategoryView<'_>> {
        let needle = query.to_lowercase();
        self.categories
            .iter()
            .filter(|(name, cards)| {
                needle.is_empty()
                    || name.to_lowercase().contains(&needle)
                    || cards
                        .iter()
                        .any(|card| card.topic.to_lowercase().contains(&needle))
            })
            .map(|(name, cards)| CategoryView {
                name: name.as_str(),
                cards: cards.as_slice(),
            })
            .collect()
    }

    /// Cards of a category in insertion order
    pub fn cards(&self, category: &str) -> Option<&[Card]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn get(&self, category: &str, index: usize) -> Option<&Card> {
        self.categories.get(category).and_then(|cards| cards.get(index))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of cards across all categories
    pub fn card_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.categories().collect()
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(names(&catalog), vec!["2. Weltkrieg", "Mathematik"]);
        assert_eq!(catalog.card_count(), 3);
        assert_eq!(catalog.cards("2. Weltkrieg").unwrap()[1].topic, "Schlacht von Stalingrad");
    }

    #[test]
    fn test_add_creates_category() {
        let mut catalog = Catalog::new();
        let card = catalog.add_card("Chemie", "H2O", Some("Wasser"), None).unwrap();
        assert_eq!(card.topic, "H2O");
        assert_eq!(names(&catalog), vec!["Chemie"]);
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut catalog = Catalog::seeded();
        catalog.add_card("Mathematik", "Kreiszahl", Some("≈3.14"), None);

        assert_eq!(names(&catalog), vec!["2. Weltkrieg", "Mathematik"]);
        let cards = catalog.cards("Mathematik").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].topic, "Was ist Pi?");
        assert_eq!(cards[1].topic, "Kreiszahl");
        assert_eq!(cards[1].answer.as_deref(), Some("≈3.14"));
    }

    #[test]
    fn test_add_rejects_empty_topic_without_image() {
        let mut catalog = Catalog::seeded();
        let before = catalog.clone();

        assert!(catalog.add_card("Mathematik", "", Some("x"), None).is_none());
        assert!(catalog.add_card("Neu", "", None, None).is_none());

        assert_eq!(names(&catalog), names(&before));
        assert_eq!(catalog.cards("Mathematik"), before.cards("Mathematik"));
        assert!(!catalog.contains("Neu"));
    }

    #[test]
    fn test_add_accepts_image_without_topic() {
        let mut catalog = Catalog::new();
        let image = CardImage::new("map.png", vec![0x89, 0x50]);
        assert!(catalog.add_card("Geografie", "", None, Some(image)).is_some());
        assert_eq!(catalog.card_count(), 1);
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_card("", "Thema", None, None).is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_category_keys_are_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.add_card("Mathematik", "a", None, None);
        catalog.add_card("mathematik", "b", None, None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_delete_last_card_removes_category() {
        let mut catalog = Catalog::seeded();
        let removed = catalog.delete_card("Mathematik", 0).unwrap();
        assert_eq!(removed.topic, "Was ist Pi?");
        assert_eq!(names(&catalog), vec!["2. Weltkrieg"]);
    }

    #[test]
    fn test_delete_keeps_non_empty_category() {
        let mut catalog = Catalog::seeded();
        catalog.delete_card("2. Weltkrieg", 0);
        let cards = catalog.cards("2. Weltkrieg").unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].topic, "Schlacht von Stalingrad");
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.delete_card("Mathematik", 1).is_none());
        assert!(catalog.delete_card("Physik", 0).is_none());
        assert_eq!(catalog.card_count(), 3);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let catalog = Catalog::seeded();
        let filtered: Vec<&str> = catalog.filter("").iter().map(|c| c.name).collect();
        assert_eq!(filtered, names(&catalog));
    }

    #[test]
    fn test_filter_matches_category_case_insensitive() {
        let catalog = Catalog::seeded();
        let filtered = catalog.filter("mathe");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Mathematik");
    }

    #[test]
    fn test_filter_by_topic_keeps_all_cards() {
        let catalog = Catalog::seeded();
        let filtered = catalog.filter("STALINGRAD");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "2. Weltkrieg");
        assert_eq!(filtered[0].card_count(), 2);
    }

    #[test]
    fn test_filter_does_not_match_answers() {
        let catalog = Catalog::seeded();
        assert!(catalog.filter("1939").is_empty());
    }

    #[test]
    fn test_categories_iterator_restarts() {
        let catalog = Catalog::seeded();
        let iter = catalog.categories();
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["2. Weltkrieg", "Mathematik"]);
    }
}
