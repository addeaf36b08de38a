//! Requests sent to the directory service

use crate::api::PersonType;
use serde::Serialize;

/// Keyword and filter search against structured fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexicalQuery {
    /// Free text, already trimmed; `None` when empty
    pub query: Option<String>,
    pub person_type: Option<PersonType>,
    pub unit: Option<String>,
    /// Selected tag values
    pub tags: Vec<String>,
}

impl LexicalQuery {
    /// Query parameters; empty filters are omitted entirely
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref q) = self.query {
            params.push(("q".to_string(), q.clone()));
        }
        if let Some(person_type) = self.person_type {
            params.push(("type".to_string(), person_type.as_str().to_string()));
        }
        if let Some(ref unit) = self.unit {
            params.push(("unit".to_string(), unit.clone()));
        }
        if !self.tags.is_empty() {
            params.push(("tags".to_string(), self.tags.join(",")));
        }

        params
    }
}

/// Embedding-based relevance search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticQuery {
    /// Non-empty, trimmed query text
    pub query: String,
    /// Result count cap
    pub k: u32,
    /// Ask for an AI summary of the results
    pub summary: bool,
}

impl SemanticQuery {
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("q".to_string(), self.query.clone()),
            ("k".to_string(), self.k.to_string()),
            ("summary".to_string(), self.summary.to_string()),
        ]
    }
}

/// A search ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchRequest {
    Lexical(LexicalQuery),
    Semantic(SemanticQuery),
}

impl SearchRequest {
    pub fn is_semantic(&self) -> bool {
        matches!(self, SearchRequest::Semantic(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lexical_query_has_no_params() {
        assert!(LexicalQuery::default().params().is_empty());
    }

    #[test]
    fn test_lexical_params() {
        let query = LexicalQuery {
            query: Some("pricing".to_string()),
            person_type: Some(PersonType::Faculty),
            unit: Some("Marketing".to_string()),
            tags: vec!["AI".to_string(), "Retail".to_string()],
        };
        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "pricing".to_string()),
                ("type".to_string(), "faculty".to_string()),
                ("unit".to_string(), "Marketing".to_string()),
                ("tags".to_string(), "AI,Retail".to_string()),
            ]
        );
    }

    #[test]
    fn test_semantic_params() {
        let query = SemanticQuery {
            query: "climate finance".to_string(),
            k: 20,
            summary: true,
        };
        let params = query.params();
        assert!(params.contains(&("k".to_string(), "20".to_string())));
        assert!(params.contains(&("summary".to_string(), "true".to_string())));
    }
}
