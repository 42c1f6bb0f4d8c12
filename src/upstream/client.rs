//! HTTP client for the YGOPRODeck random card endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::types::CardRecord;

pub const DEFAULT_UPSTREAM_URL: &str = "http://db.ygoprodeck.com/api/v7/randomcard.php";

/// Anything that can hand out a random card record
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_random(&self) -> Result<CardRecord>;
}

/// Card source backed by the upstream HTTP API
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: Client,
    url: String,
}

impl HttpCardSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Reuse an existing client, e.g. one built with custom proxy settings
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn download(&self) -> Result<Vec<u8>> {
        // Upstream status is not checked; only the body is parsed.
        let body = self
            .client
            .get(&self.url)
            .header("accept", "application/json")
            .header("user-agent", concat!("randomcard/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?
            .bytes()
            .await?;

        Ok(body.to_vec())
    }
}

impl Default for HttpCardSource {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

#[async_trait]
impl CardSource for HttpCardSource {
    async fn fetch_random(&self) -> Result<CardRecord> {
        let body = self.download().await?;
        tracing::debug!("downloaded {} bytes from {}", body.len(), self.url);
        CardRecord::from_slice(&body)
    }
}

/// Fetch one random card and pull out its name
pub async fn random_card_name(source: &dyn CardSource) -> Result<Value> {
    let card = source.fetch_random().await?;
    card.card_name()
}
