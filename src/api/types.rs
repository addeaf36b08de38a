//! Wire types returned by the directory service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of person listed in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    Faculty,
    Fellow,
}

impl PersonType {
    /// Value used in query parameters and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Faculty => "faculty",
            PersonType::Fellow => "fellow",
        }
    }

    /// Badge text shown on cards
    pub fn label(&self) -> &'static str {
        match self {
            PersonType::Faculty => "Faculty",
            PersonType::Fellow => "Executive Fellow",
        }
    }

    /// Parse a filter value; empty means "any"
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "faculty" => Some(PersonType::Faculty),
            "fellow" | "fellows" => Some(PersonType::Fellow),
            _ => None,
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person record. Read-only on the client; every field but `id` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, rename = "type")]
    pub person_type: Option<PersonType>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    /// Comma-joined keyword tags
    #[serde(default)]
    pub tag_names: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub mba_year: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Present on semantic search results only
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

impl Person {
    /// Display name, empty when missing
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Keyword tags split from `tag_names`, trimmed, empties dropped
    pub fn tags(&self) -> Vec<&str> {
        self.tag_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn is_faculty(&self) -> bool {
        self.person_type == Some(PersonType::Faculty)
    }
}

/// Capability report from `/api/ai-status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiStatus {
    pub semantic_search_available: bool,
    pub embeddings_configured: bool,
    pub index_loaded: bool,
    pub llm_configured: bool,
    pub index_count: u64,
}

impl AiStatus {
    /// Semantic mode needs all three dependencies ready
    pub fn semantic_ready(&self) -> bool {
        self.semantic_search_available && self.embeddings_configured && self.index_loaded
    }
}

/// Body of `/api/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Person>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Body of `/api/semantic-search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SemanticResponse {
    #[serde(default)]
    pub results: Vec<Person>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `/api/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryStats {
    pub faculty: u64,
    pub fellows: u64,
    pub tags: u64,
    pub total: u64,
}

/// Entry of `/api/units`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCount {
    pub unit: String,
    #[serde(default)]
    pub count: u64,
}

/// Entry of `/api/tags`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_tolerates_nulls() {
        let json = r#"{"id": 3, "name": "Ada Lovelace", "bio": null, "type": "fellow",
                       "tag_names": "Analytics, ,Computing,", "mba_year": null}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.person_type, Some(PersonType::Fellow));
        assert_eq!(person.bio, None);
        assert_eq!(person.tags(), vec!["Analytics", "Computing"]);
        assert!(!person.is_faculty());
    }

    #[test]
    fn test_semantic_ready_requires_all_flags() {
        let mut status = AiStatus {
            semantic_search_available: true,
            embeddings_configured: true,
            index_loaded: false,
            ..Default::default()
        };
        assert!(!status.semantic_ready());
        status.index_loaded = true;
        assert!(status.semantic_ready());
    }

    #[test]
    fn test_parse_type_filter() {
        assert_eq!(PersonType::parse_filter("Faculty"), Some(PersonType::Faculty));
        assert_eq!(PersonType::parse_filter("fellow"), Some(PersonType::Fellow));
        assert_eq!(PersonType::parse_filter(""), None);
    }
}
