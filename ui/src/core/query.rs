//! Chat identifier carried in the page query string (`?id=...`).

use std::fmt;

use reqwest::Url;

/// Query key holding the chat identifier.
pub const CHAT_ID_KEY: &str = "id";

/// Opaque chat identifier, kept exactly as given. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the chat id from a raw `location.search` value.
///
/// Accepts the string with or without the leading `?`. The first `id` pair
/// wins; a blank value counts as absent.
pub fn chat_id_from_query(search: &str) -> Option<ChatId> {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        return None;
    }

    let mut url = Url::parse("http://localhost/").ok()?;
    url.set_query(Some(search));
    let id = url
        .query_pairs()
        .find(|(key, _)| key == CHAT_ID_KEY)
        .map(|(_, value)| value.into_owned())?;
    ChatId::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_with_or_without_question_mark() {
        assert_eq!(chat_id_from_query("?id=42").unwrap().as_str(), "42");
        assert_eq!(chat_id_from_query("id=42").unwrap().as_str(), "42");
    }

    #[test]
    fn decodes_and_picks_first_id() {
        let id = chat_id_from_query("?lang=ru&id=-100%2042&id=7").unwrap();
        assert_eq!(id.as_str(), "-100 42");
    }

    #[test]
    fn surrounding_whitespace_is_preserved() {
        let id = chat_id_from_query("?id=%2042").unwrap();
        assert_eq!(id.as_str(), " 42");
        assert_eq!(ChatId::new("42 ").unwrap().as_str(), "42 ");
    }

    #[test]
    fn missing_or_blank_id_is_absent() {
        assert_eq!(chat_id_from_query(""), None);
        assert_eq!(chat_id_from_query("?"), None);
        assert_eq!(chat_id_from_query("?chat=42"), None);
        assert_eq!(chat_id_from_query("?id="), None);
        assert_eq!(chat_id_from_query("?id=%20"), None);
    }
}
