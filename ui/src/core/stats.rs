//! Statistics payload returned by the backend for a single chat.
//!
//! The backend does not publish a schema, so decoding is lenient: every
//! top-level block is decoded on its own and a malformed block turns into
//! `None` instead of failing the whole payload. Only a body that is not a JSON
//! object at all is treated as an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient_block")]
    pub active_user: Option<ActiveUser>,
    #[serde(default, deserialize_with = "lenient_words")]
    pub top_words: Option<Vec<WordCount>>,
}

/// Most active participant of the chat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActiveUser {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ActiveUser {
    /// Avatar URL, ignoring blank values.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Single-letter placeholder shown when there is no avatar.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl Stats {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn lenient_block<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

fn lenient_words<'de, D>(deserializer: D) -> Result<Option<Vec<WordCount>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let words = match raw {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<WordCount>(entry).ok())
            .collect(),
        _ => return Ok(None),
    };
    Ok(Some(words))
}
