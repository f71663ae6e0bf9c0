//! Remote feed over HTTP

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::FeedSource;
use crate::feed::{Feed, FeedError, FeedResult};

/// Fetches the feed with a single `GET`; no retries
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FeedResult<Feed> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Network(format!("timeout fetching {}", self.url))
            } else {
                FeedError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let feed = Feed::from_slice(&body)?;
        tracing::info!(url = %self.url, normas = feed.normas.len(), "feed fetched");
        Ok(feed)
    }
}
