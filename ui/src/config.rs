//! Backend location.
//!
//! The WASM bundle has no process environment, so the base URL is fixed at
//! build time: set `CHATLY_API_URL` when running `dx build` to point the app
//! at another backend.

/// Backend used when `CHATLY_API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "https://api.chatly-stats.ru";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match option_env!("CHATLY_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
