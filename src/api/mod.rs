//! Directory service API
//!
//! The remote service owns data and ranking. `DirectoryApi` is the seam the
//! controller talks through; `RemoteDirectory` implements it over HTTP.

mod client;
mod types;

pub use client::RemoteDirectory;
pub use types::*;

use crate::error::ApiResult;
use crate::search::{LexicalQuery, SemanticQuery};
use async_trait::async_trait;

/// Operations offered by the directory service
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Capability probe for semantic search
    async fn ai_status(&self) -> ApiResult<AiStatus>;

    /// Keyword and filter search
    async fn search(&self, query: &LexicalQuery) -> ApiResult<SearchResponse>;

    /// Embedding search. An `error` in the body is returned as-is for the caller to surface.
    async fn semantic_search(&self, query: &SemanticQuery) -> ApiResult<SemanticResponse>;

    /// Full profile for one person
    async fn person(&self, id: i64) -> ApiResult<Person>;

    /// Headline counts
    async fn stats(&self) -> ApiResult<DirectoryStats>;

    /// Units available for the unit filter
    async fn units(&self) -> ApiResult<Vec<UnitCount>>;

    /// Tags available for the tag filter
    async fn tags(&self) -> ApiResult<Vec<TagCount>>;
}
