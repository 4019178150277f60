//! Filter composer: free-text query AND category set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::event::Event;
use crate::domain::post::ShowcasePost;

/// Fields the text query searches.
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
}

impl Searchable for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for ShowcasePost {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A conjunction of a text query and a category set.
///
/// An empty query or an empty category set matches everything. Both the
/// query and the category labels compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFilter {
    query: String,
    categories: BTreeSet<String>,
}

impl EntityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text query. Surrounding whitespace is ignored.
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.set_query(query);
        self
    }

    /// Replaces the selected categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = categories
            .into_iter()
            .map(|c| normalize(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    pub fn set_query(&mut self, query: impl AsRef<str>) {
        self.query = normalize(query.as_ref());
    }

    /// Selects the category if unselected, otherwise deselects it.
    /// Returns whether it is selected afterwards.
    pub fn toggle_category(&mut self, category: impl AsRef<str>) -> bool {
        let category = normalize(category.as_ref());
        if category.is_empty() {
            return false;
        }
        if self.categories.remove(&category) {
            false
        } else {
            self.categories.insert(category);
            true
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.categories.is_empty()
    }

    /// Text half of the conjunction.
    pub fn matches_text<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.query.is_empty()
            || [item.title(), item.description(), item.category()]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// Category half of the conjunction.
    pub fn matches_category<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.categories.is_empty() || self.categories.contains(&normalize(item.category()))
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.matches_text(item) && self.matches_category(item)
    }

    /// Returns the matching items in their original order.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        title: String,
        description: String,
        category: String,
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            &self.title
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    fn item(title: &str, description: &str, category: &str) -> Item {
        Item {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("Tech Innovation Summit", "Startups and demos", "Technology"),
            item("Career Workshop", "Polish your CV", "Career"),
            item("Open Mic", "Poetry and music", "Arts"),
        ]
    }

    #[test]
    fn tech_query_matches_only_summit() {
        let items = catalog();
        let filter = EntityFilter::new().with_query("tech");
        let found = filter.apply(&items[..2]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Tech Innovation Summit");
    }

    #[test]
    fn empty_filter_returns_everything() {
        let items = catalog();
        assert_eq!(EntityFilter::new().apply(&items).len(), 3);
    }

    #[test]
    fn query_searches_description_and_category() {
        let items = catalog();
        assert_eq!(EntityFilter::new().with_query("POETRY").apply(&items).len(), 1);
        assert_eq!(EntityFilter::new().with_query("career").apply(&items).len(), 1);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        let filter = EntityFilter::new().with_query("   ");
        assert!(filter.is_empty());
    }

    #[test]
    fn categories_compare_case_insensitively() {
        let items = catalog();
        let filter = EntityFilter::new().with_categories(["technology", "ARTS"]);
        let titles: Vec<_> = filter
            .apply(&items)
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Tech Innovation Summit", "Open Mic"]);
    }

    #[test]
    fn query_and_categories_are_conjoined() {
        let items = catalog();
        let filter = EntityFilter::new()
            .with_query("workshop")
            .with_categories(["Technology"]);
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn toggle_category_selects_then_deselects() {
        let mut filter = EntityFilter::new();
        assert!(filter.toggle_category("Career"));
        assert_eq!(filter.categories().collect::<Vec<_>>(), vec!["career"]);
        assert!(!filter.toggle_category("career"));
        assert!(filter.is_empty());
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        let words = prop::sample::select(vec!["tech", "career", "art", "Summit", "music", "AI"]);
        let cats = prop::sample::select(vec!["Technology", "Career", "Arts"]);
        (words.clone(), words, cats).prop_map(|(t, d, c)| item(t, d, c))
    }

    proptest! {
        #[test]
        fn text_and_category_filters_commute(
            items in prop::collection::vec(arb_item(), 0..20),
            query in prop::sample::select(vec!["", "te", "CAREER", "ar", "zzz"]),
            cats in prop::collection::vec(prop::sample::select(vec!["technology", "career", "arts"]), 0..3),
        ) {
            let text_only = EntityFilter::new().with_query(query);
            let cat_only = EntityFilter::new().with_categories(&cats);

            let text_then_cat: Vec<Item> = items
                .iter()
                .filter(|i| text_only.matches(*i))
                .filter(|i| cat_only.matches(*i))
                .cloned()
                .collect();
            let cat_then_text: Vec<Item> = items
                .iter()
                .filter(|i| cat_only.matches(*i))
                .filter(|i| text_only.matches(*i))
                .cloned()
                .collect();
            let combined: Vec<Item> = EntityFilter::new()
                .with_query(query)
                .with_categories(&cats)
                .apply(&items)
                .into_iter()
                .cloned()
                .collect();

            prop_assert_eq!(&text_then_cat, &cat_then_text);
            prop_assert_eq!(&text_then_cat, &combined);
        }
    }
}
