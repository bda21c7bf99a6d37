use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};

use crate::loader::LoadError;

/// Source of candidate file bodies.
///
/// Implementations return the body of a successful response and map
/// everything else onto [`LoadError`]. Carried by the loader as
/// `Arc<dyn Fetcher>`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, LoadError>;
}

/// Plain unauthenticated GET over HTTP with caching disabled.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, LoadError> {
        let response = self
            .client
            .get(cache_busted(url))
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// Appends a `_=<millis>` query pair so intermediaries never answer from cache.
fn cache_busted(url: &Url) -> Url {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair("_", &Utc::now().timestamp_millis().to_string());
    busted
}
