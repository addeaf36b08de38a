//! The result set produced by one search

use super::collate::compare_names;
use crate::api::Person;
use crate::search::{SearchMode, SortKey};

/// People returned by the last search, in display order
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    people: Vec<Person>,
    mode: SearchMode,
    ai_summary: Option<String>,
}

impl ResultSet {
    /// Lexical results, in server order
    pub fn lexical(people: Vec<Person>) -> Self {
        Self {
            people,
            mode: SearchMode::Lexical,
            ai_summary: None,
        }
    }

    /// Semantic results, pre-ranked by relevance
    pub fn semantic(people: Vec<Person>, ai_summary: Option<String>) -> Self {
        Self {
            people,
            mode: SearchMode::Semantic,
            ai_summary: ai_summary.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Apply the user's sort selection.
    ///
    /// Semantic order encodes relevance and is left alone whatever the selector says.
    pub fn sorted(mut self, sort: Option<SortKey>) -> Self {
        if self.mode == SearchMode::Semantic {
            return self;
        }
        match sort {
            Some(SortKey::Name) => self
                .people
                .sort_by(|a, b| compare_names(a.display_name(), b.display_name())),
            Some(SortKey::NameDesc) => self
                .people
                .sort_by(|a, b| compare_names(b.display_name(), a.display_name())),
            None => {}
        }
        self
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn ai_summary(&self) -> Option<&str> {
        self.ai_summary.as_deref()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// "1 result" for exactly one, "{n} results" otherwise
    pub fn count_label(&self) -> String {
        count_label(self.len())
    }
}

/// Result count text with the right plural
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, name: &str) -> Person {
        Person {
            id,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn names(set: &ResultSet) -> Vec<&str> {
        set.people().iter().map(|p| p.display_name()).collect()
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 results");
        assert_eq!(count_label(1), "1 result");
        assert_eq!(count_label(5), "5 results");
    }

    #[test]
    fn test_lexical_sort() {
        let people = vec![person(1, "Bob"), person(2, "Alice")];

        let asc = ResultSet::lexical(people.clone()).sorted(Some(SortKey::Name));
        assert_eq!(names(&asc), vec!["Alice", "Bob"]);

        let desc = ResultSet::lexical(people.clone()).sorted(Some(SortKey::NameDesc));
        assert_eq!(names(&desc), vec!["Bob", "Alice"]);

        let unsorted = ResultSet::lexical(people).sorted(None);
        assert_eq!(names(&unsorted), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_semantic_never_resorted() {
        let people = vec![person(1, "Bob"), person(2, "Alice"), person(3, "Carol")];
        for sort in [Some(SortKey::Name), Some(SortKey::NameDesc), None] {
            let set = ResultSet::semantic(people.clone(), None).sorted(sort);
            assert_eq!(names(&set), vec!["Bob", "Alice", "Carol"]);
        }
    }

    #[test]
    fn test_missing_names_sort_first() {
        let people = vec![person(1, "Bob"), Person { id: 2, ..Default::default() }];
        let set = ResultSet::lexical(people).sorted(Some(SortKey::Name));
        assert_eq!(set.people()[0].id, 2);
    }

    #[test]
    fn test_blank_summary_dropped() {
        let set = ResultSet::semantic(vec![], Some("  ".to_string()));
        assert_eq!(set.ai_summary(), None);
    }
}
