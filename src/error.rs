//! Error types for calls against the directory service

use thiserror::Error;

/// Failure of a single request against the directory service.
///
/// Every variant is terminal for that request; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or transport failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status without a usable error payload
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with an explicit error message
    #[error("{0}")]
    Service(String),

    /// Endpoint URL could not be built from the configured base URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Message suitable for showing inline in the result area
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Service(msg) => msg.clone(),
            ApiError::Status { status, .. } => format!("Search failed (HTTP {}).", status),
            _ => "Search failed. Please try again.".to_string(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_passes_through() {
        let err = ApiError::Service("Embedding API not configured".to_string());
        assert_eq!(err.user_message(), "Embedding API not configured");
    }

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            status: 502,
            url: "http://localhost/api/search".to_string(),
        };
        assert_eq!(err.user_message(), "Search failed (HTTP 502).");
    }
}
