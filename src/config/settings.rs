//! Settings structures for the directory search client

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub ui: UiSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (DIRSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("DIRSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("DIRSEARCH_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("DIRSEARCH_TIMEOUT") {
            if let Some(timeout) = parse_timeout(&val) {
                self.api.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("DIRSEARCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.search.debounce_ms = ms;
            }
        }
    }
}

/// Seconds as a positive, finite number
fn parse_timeout(val: &str) -> Option<f64> {
    val.parse().ok().filter(|t: &f64| t.is_finite() && *t > 0.0)
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Directory name shown in the header
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Faculty & Fellows Directory".to_string(),
        }
    }
}

/// Remote directory service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the directory service
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// User agent string (none = crate name and version)
    pub user_agent: Option<String>,
    /// Extra headers to send with every request
    pub extra_headers: HashMap<String, String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            request_timeout: 10.0,
            pool_maxsize: 8,
            user_agent: None,
            extra_headers: HashMap::new(),
        }
    }
}

impl ApiSettings {
    /// Request timeout, or the default when the configured value is not a positive number
    pub fn timeout(&self) -> Duration {
        let secs = Some(self.request_timeout)
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or_else(|| ApiSettings::default().request_timeout);
        Duration::from_secs_f64(secs)
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
    /// Result count cap for semantic searches
    pub semantic_k: u32,
    /// Ask the service for an AI summary with semantic results
    pub request_summary: bool,
    /// Drop responses that arrive after a newer search was dispatched
    pub discard_stale_responses: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            semantic_k: 20,
            request_summary: true,
            discard_stale_responses: false,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Characters of bio shown on a result card
    pub bio_preview_length: usize,
    /// Keyword tags shown on a result card
    pub card_tag_limit: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            bio_preview_length: 150,
            card_tag_limit: 4,
        }
    }
}
