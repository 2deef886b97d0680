//! Client for the statistics backend.
//!
//! Two endpoints, both keyed by chat id:
//! - `GET  {base}/api/chat/{id}`  → [`Stats`] JSON
//! - `POST {base}/api/share/{id}` → empty body, response ignored
//!
//! There is no auth, retry, or timeout. On wasm32 `reqwest` rides on the
//! browser `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::config::ApiConfig;

use super::query::ChatId;
use super::stats::Stats;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("response is not a stats payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Backend operations the slideshow needs.
#[async_trait(?Send)]
pub trait StatsApi {
    async fn fetch_stats(&self, chat: &ChatId) -> Result<Stats, ApiError>;

    async fn notify_share(&self, chat: &ChatId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpStatsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn stats_url(&self, chat: &ChatId) -> Result<Url, ApiError> {
        endpoint(&self.config, "chat", chat)
    }

    pub fn share_url(&self, chat: &ChatId) -> Result<Url, ApiError> {
        endpoint(&self.config, "share", chat)
    }
}

#[async_trait(?Send)]
impl StatsApi for HttpStatsApi {
    async fn fetch_stats(&self, chat: &ChatId) -> Result<Stats, ApiError> {
        let url = self.stats_url(chat)?;
        tracing::debug!(%url, "fetching chat stats");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(Stats::from_json(&body)?)
    }

    async fn notify_share(&self, chat: &ChatId) -> Result<(), ApiError> {
        let url = self.share_url(chat)?;
        tracing::debug!(%url, "reporting share");

        let response = self.client.post(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

fn endpoint(config: &ApiConfig, kind: &str, chat: &ChatId) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: config.base_url().to_string(),
        reason,
    };

    let mut url = Url::parse(config.base_url()).map_err(|err| invalid(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(["api", kind, chat.as_str()]);
    Ok(url)
}
