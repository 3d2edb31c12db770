//! Feed types and the network fetch path.
//!
//! `Snapshot` is the unit the cache persists: one fetched-and-normalized feed.
//! The JSON field names (`Blog title`, `Blog link`) are the on-disk cache
//! contract and must stay stable across releases.

use async_trait::async_trait;
use feed_rs::model::Feed;
use feed_rs::parser;
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, RssError};

pub mod normalize;

/// One feed item. `title` is the dedup key within a snapshot; two posts in
/// the same snapshot never share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Publication date normalized to yyyymmdd.
    pub date: String,
    pub link: String,
    /// Every link href carried by the entry, in source order. May be empty.
    pub links: Vec<String>,
}

/// One fetch result, cached as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Blog title")]
    pub feed_title: String,
    #[serde(rename = "Blog link")]
    pub feed_link: String,
    pub posts: Vec<Post>,
}

/// Seam between the cache/display core and the network. Tests substitute a
/// canned feed here instead of reaching the network.
#[async_trait]
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> Result<Feed>;
}

/// Production fetcher: HTTP GET via reqwest, parsed with feed-rs.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.fetch_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.fetch_timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| RssError::FeedUnreachable(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Feed> {
        // Reject strings that are not URLs at all before touching the network.
        let parsed = url::Url::parse(url)
            .map_err(|e| RssError::InvalidFeedUrl(format!("'{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RssError::InvalidFeedUrl(format!(
                "'{}': unsupported scheme '{}'",
                url,
                parsed.scheme()
            )));
        }

        info!("Fetching feed from {}", url);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| RssError::FeedUnreachable(format!("'{}': {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RssError::FeedUnreachable(format!(
                "'{}': HTTP status {}",
                url, status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RssError::FeedUnreachable(format!("'{}': {}", url, e)))?;

        parser::parse(bytes.as_ref())
            .map_err(|e| RssError::FeedMalformed(format!("'{}': {}", url, e)))
    }
}
