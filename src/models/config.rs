//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetch behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Snapshot cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Published CSV feed endpoints
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.cache.max_age_secs == 0 {
            return Err(AppError::validation("cache.max_age_secs must be > 0"));
        }
        if self.sources.books_url.trim().is_empty()
            || self.sources.talks_url.trim().is_empty()
            || self.sources.news_url.trim().is_empty()
        {
            return Err(AppError::validation("sources must define all three feed URLs"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Snapshot cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding cached snapshots and the language file
    #[serde(default = "defaults::cache_dir")]
    pub dir: String,

    /// Freshness window in seconds; snapshots younger than this are served
    /// without a network call
    #[serde(default = "defaults::max_age")]
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: defaults::cache_dir(),
            max_age_secs: defaults::max_age(),
        }
    }
}

/// The three published spreadsheet CSV endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "defaults::books_url")]
    pub books_url: String,

    #[serde(default = "defaults::talks_url")]
    pub talks_url: String,

    #[serde(default = "defaults::news_url")]
    pub news_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            books_url: defaults::books_url(),
            talks_url: defaults::talks_url(),
            news_url: defaults::news_url(),
        }
    }
}

mod defaults {
    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; sheetfolio/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Cache defaults
    pub fn cache_dir() -> String {
        "cache".into()
    }
    pub fn max_age() -> u64 {
        3600
    }

    // Source defaults: published CSV exports of the three content sheets
    pub fn books_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-books/pub?output=csv".into()
    }
    pub fn talks_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-talks/pub?output=csv".into()
    }
    pub fn news_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-news/pub?output=csv".into()
    }
}
