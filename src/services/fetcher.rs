// src/services/fetcher.rs

//! Feed fetching service.
//!
//! Fetches published CSV feeds and decodes them into records. The fetch
//! boundary fails soft: any network, status, or decode problem is logged with
//! the offending URL and degrades to an empty record set.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{FetcherConfig, Record};
use crate::services::decoder::RecordDecoder;

/// A source of feed records, keyed by URL.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and decode a feed. Never fails; problems degrade to `vec![]`.
    async fn fetch(&self, url: &str) -> Vec<Record>;
}

/// HTTP-backed record source.
pub struct SourceFetcher {
    client: Client,
    decoder: Arc<dyn RecordDecoder>,
}

impl SourceFetcher {
    /// Create a fetcher with the given configuration and decoder.
    pub fn new(config: &FetcherConfig, decoder: Arc<dyn RecordDecoder>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, decoder })
    }

    async fn try_fetch(&self, url: &str) -> Result<Vec<Record>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                url,
                status.canonical_reason().unwrap_or(status.as_str()),
            ));
        }

        let body = response.text().await?;
        self.decoder.decode(&body)
    }
}

#[async_trait]
impl RecordSource for SourceFetcher {
    async fn fetch(&self, url: &str) -> Vec<Record> {
        if url.trim().is_empty() {
            log::warn!("Feed URL is empty, skipping fetch");
            return Vec::new();
        }

        match self.try_fetch(url).await {
            Ok(records) => records,
            Err(error) => {
                log::warn!("Failed to fetch feed {}: {}", url, error);
                Vec::new()
            }
        }
    }
}
