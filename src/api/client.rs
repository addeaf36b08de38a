//! HTTP implementation of the directory API

use super::types::*;
use super::DirectoryApi;
use crate::config::ApiSettings;
use crate::error::{ApiError, ApiResult};
use crate::network::HttpClient;
use crate::search::{LexicalQuery, SemanticQuery};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Directory service reached over HTTP
#[derive(Clone)]
pub struct RemoteDirectory {
    client: HttpClient,
}

impl RemoteDirectory {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn with_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Ok(Self::new(HttpClient::with_settings(settings)?))
    }
}

#[async_trait]
impl DirectoryApi for RemoteDirectory {
    async fn ai_status(&self) -> ApiResult<AiStatus> {
        self.client.get("api/ai-status").await?.json_ok()
    }

    async fn search(&self, query: &LexicalQuery) -> ApiResult<SearchResponse> {
        let response = self
            .client
            .get_with_params("api/search", &query.params())
            .await?;
        let body: SearchResponse = response.json_ok()?;
        debug!("Lexical search returned {} results", body.results.len());
        Ok(body)
    }

    async fn semantic_search(&self, query: &SemanticQuery) -> ApiResult<SemanticResponse> {
        let response = self
            .client
            .get_with_params("api/semantic-search", &query.params())
            .await?;

        if response.is_success() {
            return response.json();
        }

        // 5xx bodies from this endpoint still carry a JSON `error` field
        match response.json::<SemanticResponse>() {
            Ok(body) if body.error.is_some() => {
                warn!(
                    "Semantic search failed with HTTP {}: {:?}",
                    response.status, body.error
                );
                Ok(body)
            }
            _ => Err(ApiError::Status {
                status: response.status,
                url: response.url,
            }),
        }
    }

    async fn person(&self, id: i64) -> ApiResult<Person> {
        self.client
            .get(&format!("api/person/{}", id))
            .await?
            .json_ok()
    }

    async fn stats(&self) -> ApiResult<DirectoryStats> {
        self.client.get("api/stats").await?.json_ok()
    }

    async fn units(&self) -> ApiResult<Vec<UnitCount>> {
        self.client.get("api/units").await?.json_ok()
    }

    async fn tags(&self) -> ApiResult<Vec<TagCount>> {
        self.client.get("api/tags").await?.json_ok()
    }
}
