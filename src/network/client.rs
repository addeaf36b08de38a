//! HTTP client for requests against the directory service

use crate::config::ApiSettings;
use crate::error::{ApiError, ApiResult};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Raw response from the directory service
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse as JSON, turning a non-2xx status into an error
    pub fn json_ok<T: serde::de::DeserializeOwned>(&self) -> ApiResult<T> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status,
                url: self.url.clone(),
            });
        }
        self.json()
    }
}

/// HTTP client wrapper bound to one directory service base URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    user_agent: String,
    extra_headers: Vec<(String, String)>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> ApiResult<Self> {
        Self::with_settings(&ApiSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &ApiSettings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true)
            .build()?;

        // A trailing slash makes Url::join append instead of replacing the last segment
        let mut base = settings.base_url.trim_end_matches('/').to_string();
        base.push('/');

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            user_agent: settings.user_agent.clone().unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
            extra_headers: settings
                .extra_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }

    /// Resolve an endpoint path (e.g. `api/search`) against the base URL
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Simple GET request
    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.get_with_params(path, &[]).await
    }

    /// GET request with query parameters, in the given order
    pub async fn get_with_params(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> ApiResult<ApiResponse> {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, params);

        let mut req_builder = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        if !params.is_empty() {
            req_builder = req_builder.query(params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> ApiResult<ApiResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(ApiResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let settings = ApiSettings {
            request_timeout: f64::NAN,
            ..Default::default()
        };
        assert!(HttpClient::with_settings(&settings).is_ok());
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let settings = ApiSettings {
            base_url: "http://example.org/directory".to_string(),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        assert_eq!(
            client.endpoint("/api/person/7").unwrap().as_str(),
            "http://example.org/directory/api/person/7"
        );
    }

    #[test]
    fn test_default_user_agent() {
        let client = HttpClient::new().unwrap();
        assert!(client.user_agent().starts_with("directory-search/"));
    }

    #[test]
    fn test_json_ok_rejects_error_status() {
        let response = ApiResponse {
            status: 404,
            text: "{}".to_string(),
            url: "http://localhost/api/person/1".to_string(),
        };
        assert!(matches!(
            response.json_ok::<serde_json::Value>(),
            Err(ApiError::Status { status: 404, .. })
        ));
    }
}
