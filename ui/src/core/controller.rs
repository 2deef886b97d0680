//! Side-effecting slideshow operations: loading stats on mount and sharing.
//!
//! Both take the raw query string so the chat id is re-read on every call.
//! Neither returns an error; failures are logged and folded into the
//! outcome.

use super::api::{ApiError, StatsApi};
use super::bridge::HostBridge;
use super::query::chat_id_from_query;
use super::stats::Stats;

#[derive(Debug)]
pub enum LoadOutcome {
    /// No `id` in the query string; nothing was requested.
    MissingChatId,
    Loaded(Stats),
    Failed(ApiError),
}

impl LoadOutcome {
    /// Stats to settle the slideshow with. Everything but a successful load
    /// ends in the "no data" screen.
    pub fn into_stats(self) -> Option<Stats> {
        match self {
            LoadOutcome::Loaded(stats) => Some(stats),
            LoadOutcome::MissingChatId | LoadOutcome::Failed(_) => None,
        }
    }
}

pub async fn load_stats<A>(api: &A, search: &str) -> LoadOutcome
where
    A: StatsApi + ?Sized,
{
    let Some(chat) = chat_id_from_query(search) else {
        tracing::info!("no chat id in query; skipping stats request");
        return LoadOutcome::MissingChatId;
    };

    match api.fetch_stats(&chat).await {
        Ok(stats) => {
            tracing::info!(%chat, "stats loaded");
            LoadOutcome::Loaded(stats)
        }
        Err(err) => {
            tracing::warn!(%chat, error = %err, "failed to load stats");
            LoadOutcome::Failed(err)
        }
    }
}

#[derive(Debug)]
pub enum ShareOutcome {
    /// No `id` in the query string.
    Skipped,
    Sent,
    Failed(ApiError),
}

/// Close the Mini App (when hosted) and report the share to the backend.
/// The close request does not wait on the report.
pub async fn share<A, B>(api: &A, bridge: &B, search: &str) -> ShareOutcome
where
    A: StatsApi + ?Sized,
    B: HostBridge + ?Sized,
{
    let Some(chat) = chat_id_from_query(search) else {
        tracing::debug!("share pressed without chat id");
        return ShareOutcome::Skipped;
    };

    if bridge.is_available() {
        bridge.close();
    }

    match api.notify_share(&chat).await {
        Ok(()) => {
            tracing::info!(%chat, "share reported");
            ShareOutcome::Sent
        }
        Err(err) => {
            tracing::warn!(%chat, error = %err, "failed to report share");
            ShareOutcome::Failed(err)
        }
    }
}
