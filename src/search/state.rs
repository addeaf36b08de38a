//! Search state owned by the controller

use super::query::{LexicalQuery, SearchRequest, SemanticQuery};
use crate::api::PersonType;
use crate::config::SearchSettings;
use std::collections::BTreeSet;
use std::fmt;

/// Client-side ordering of lexical results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name, A to Z
    Name,
    /// Name, Z to A
    NameDesc,
}

impl SortKey {
    /// Parse a sort selector value; anything unrecognised keeps server order
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(SortKey::Name),
            "name-desc" => Some(SortKey::NameDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::NameDesc => "name-desc",
        }
    }
}

/// Which search backend a dispatch goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Lexical,
    Semantic,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Lexical => f.write_str("lexical"),
            SearchMode::Semantic => f.write_str("semantic"),
        }
    }
}

/// Outcome of a request to change the AI-mode toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Lexical -> Semantic
    Entered,
    /// Semantic -> Lexical
    Left,
    /// Toggle already matched the requested value
    Unchanged,
    /// Semantic was requested while unavailable; mode stays lexical
    Rejected,
}

impl ModeTransition {
    /// Whether the mode actually changed
    pub fn changed(&self) -> bool {
        matches!(self, ModeTransition::Entered | ModeTransition::Left)
    }
}

/// Everything the user has selected, plus AI availability
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    person_type: Option<PersonType>,
    unit: Option<String>,
    tags: BTreeSet<String>,
    sort: Option<SortKey>,
    mode: SearchMode,
    ai_available: bool,
    open_profile: Option<i64>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn person_type(&self) -> Option<PersonType> {
        self.person_type
    }

    /// Set the type filter. Units are type-scoped, so any concrete type clears the unit.
    pub fn set_person_type(&mut self, person_type: Option<PersonType>) {
        if person_type.is_some() {
            self.unit = None;
        }
        self.person_type = person_type;
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Set the unit filter; blank means any
    pub fn set_unit(&mut self, unit: Option<String>) {
        self.unit = unit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Check or uncheck a tag
    pub fn set_tag(&mut self, tag: &str, checked: bool) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if checked {
            self.tags.insert(tag.to_string());
        } else {
            self.tags.remove(tag);
        }
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn ai_available(&self) -> bool {
        self.ai_available
    }

    /// Record the capability probe outcome. Losing availability drops back to lexical.
    pub fn set_ai_available(&mut self, available: bool) {
        self.ai_available = available;
        if !available {
            self.mode = SearchMode::Lexical;
        }
    }

    /// Apply an AI-mode toggle. Never partially applies: a rejection leaves all state as it was.
    pub fn request_ai_mode(&mut self, enabled: bool) -> ModeTransition {
        match (enabled, self.mode) {
            (true, SearchMode::Semantic) | (false, SearchMode::Lexical) => {
                ModeTransition::Unchanged
            }
            (true, SearchMode::Lexical) if !self.ai_available => ModeTransition::Rejected,
            (true, SearchMode::Lexical) => {
                self.mode = SearchMode::Semantic;
                ModeTransition::Entered
            }
            (false, SearchMode::Semantic) => {
                self.mode = SearchMode::Lexical;
                ModeTransition::Left
            }
        }
    }

    pub fn open_profile(&self) -> Option<i64> {
        self.open_profile
    }

    pub fn set_open_profile(&mut self, id: Option<i64>) {
        self.open_profile = id;
    }

    /// Reset query, filters, tags and sort. AI mode is untouched.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.person_type = None;
        self.unit = None;
        self.tags.clear();
        self.sort = None;
    }

    /// Build the request for the current state.
    ///
    /// Semantic search needs text to embed, so an empty query falls back to lexical
    /// even with semantic mode on.
    pub fn build_request(&self, settings: &SearchSettings) -> SearchRequest {
        let query = self.query.trim();

        if self.mode == SearchMode::Semantic && !query.is_empty() {
            return SearchRequest::Semantic(SemanticQuery {
                query: query.to_string(),
                k: settings.semantic_k,
                summary: settings.request_summary,
            });
        }

        SearchRequest::Lexical(LexicalQuery {
            query: (!query.is_empty()).then(|| query.to_string()),
            person_type: self.person_type,
            unit: self.unit.clone(),
            tags: self.tags.iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semantic_state() -> SearchState {
        let mut state = SearchState::new();
        state.set_ai_available(true);
        assert_eq!(state.request_ai_mode(true), ModeTransition::Entered);
        state
    }

    #[test]
    fn test_type_filter_resets_unit() {
        let mut state = SearchState::new();
        state.set_unit(Some("Finance".to_string()));
        state.set_person_type(Some(PersonType::Fellow));
        assert_eq!(state.unit(), None);

        state.set_unit(Some("Finance".to_string()));
        state.set_person_type(Some(PersonType::Faculty));
        assert_eq!(state.unit(), None);
    }

    #[test]
    fn test_any_type_keeps_unit() {
        let mut state = SearchState::new();
        state.set_unit(Some("Finance".to_string()));
        state.set_person_type(None);
        assert_eq!(state.unit(), Some("Finance"));
    }

    #[test]
    fn test_blank_unit_is_any() {
        let mut state = SearchState::new();
        state.set_unit(Some("  ".to_string()));
        assert_eq!(state.unit(), None);
    }

    #[test]
    fn test_enable_ai_when_unavailable_is_rejected() {
        let mut state = SearchState::new();
        state.set_query("supply chains");
        assert_eq!(state.request_ai_mode(true), ModeTransition::Rejected);
        assert_eq!(state.mode(), SearchMode::Lexical);
        assert_eq!(state.query(), "supply chains");
    }

    #[test]
    fn test_mode_transitions() {
        let mut state = semantic_state();
        assert_eq!(state.request_ai_mode(true), ModeTransition::Unchanged);
        assert_eq!(state.request_ai_mode(false), ModeTransition::Left);
        assert_eq!(state.mode(), SearchMode::Lexical);
        assert_eq!(state.request_ai_mode(false), ModeTransition::Unchanged);

        assert!(ModeTransition::Entered.changed());
        assert!(ModeTransition::Left.changed());
        assert!(!ModeTransition::Unchanged.changed());
        assert!(!ModeTransition::Rejected.changed());
    }

    #[test]
    fn test_losing_availability_drops_semantic() {
        let mut state = semantic_state();
        state.set_ai_available(false);
        assert_eq!(state.mode(), SearchMode::Lexical);
    }

    #[test]
    fn test_semantic_request_needs_query() {
        let settings = SearchSettings::default();
        let mut state = semantic_state();
        state.set_query("   ");
        assert!(!state.build_request(&settings).is_semantic());

        state.set_query("  behavioral economics ");
        match state.build_request(&settings) {
            SearchRequest::Semantic(q) => {
                assert_eq!(q.query, "behavioral economics");
                assert_eq!(q.k, 20);
                assert!(q.summary);
            }
            other => panic!("expected semantic request, got {:?}", other),
        }
    }

    #[test]
    fn test_lexical_request_from_filters() {
        let mut state = SearchState::new();
        state.set_person_type(Some(PersonType::Faculty));
        state.set_unit(Some("Strategy".to_string()));
        state.set_tag("Innovation", true);
        state.set_tag("Healthcare", true);
        state.set_tag("Innovation", false);

        match state.build_request(&SearchSettings::default()) {
            SearchRequest::Lexical(q) => {
                assert_eq!(q.query, None);
                assert_eq!(q.person_type, Some(PersonType::Faculty));
                assert_eq!(q.unit.as_deref(), Some("Strategy"));
                assert_eq!(q.tags, vec!["Healthcare".to_string()]);
            }
            other => panic!("expected lexical request, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_filters_keeps_mode() {
        let mut state = semantic_state();
        state.set_query("leadership");
        state.set_person_type(Some(PersonType::Fellow));
        state.set_tag("Energy", true);
        state.set_sort(Some(SortKey::NameDesc));
        state.clear_filters();

        assert_eq!(state.query(), "");
        assert_eq!(state.person_type(), None);
        assert!(state.tags().is_empty());
        assert_eq!(state.sort(), None);
        assert_eq!(state.mode(), SearchMode::Semantic);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("name"), Some(SortKey::Name));
        assert_eq!(SortKey::parse("name-desc"), Some(SortKey::NameDesc));
        assert_eq!(SortKey::parse(""), None);
    }
}
