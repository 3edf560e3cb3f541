//! HTTP access for live attributes.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::config::LiveConfig;
use crate::error::LiveError;

/// Fetches the raw text behind a live attribute's URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
  async fn fetch(&self, url: &str) -> Result<String, LiveError>;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
  async fn fetch(&self, url: &str) -> Result<String, LiveError> {
    (**self).fetch(url).await
  }
}

/// `reqwest`-backed fetcher: plain GET, body as text, non-2xx is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(config: &LiveConfig) -> Result<Self, LiveError> {
    let client = reqwest::Client::builder()
      .timeout(config.fetch_timeout)
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| LiveError::Client(e.to_string()))?;
    Ok(Self { client })
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  async fn fetch(&self, url: &str) -> Result<String, LiveError> {
    debug!(url = %url, "GET");
    let fetch_err = |e: reqwest::Error| LiveError::Fetch {
      url: url.to_string(),
      reason: e.to_string(),
    };
    let response = self.client.get(url).send().await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
      return Err(LiveError::Status {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }
    response.text().await.map_err(fetch_err)
  }
}
