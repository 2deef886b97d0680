//! Runtime collaborators handed to components through Dioxus context.

use std::rc::Rc;

use crate::config::ApiConfig;
use crate::core::api::{HttpStatsApi, StatsApi};
use crate::core::bridge::{HostBridge, TelegramBridge};

/// Backend client and host bridge used by [`crate::components::StatsSlideshow`].
///
/// Platform crates may provide one with `use_context_provider`; without it the
/// component falls back to [`Services::production`].
#[derive(Clone)]
pub struct Services {
    pub api: Rc<dyn StatsApi>,
    pub bridge: Rc<dyn HostBridge>,
}

impl Services {
    pub fn new(api: Rc<dyn StatsApi>, bridge: Rc<dyn HostBridge>) -> Self {
        Self { api, bridge }
    }

    /// HTTP backend from the build-time config plus the Telegram bridge.
    pub fn production() -> Self {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = config.base_url(), "using stats backend");
        Self::new(Rc::new(HttpStatsApi::new(config)), Rc::new(TelegramBridge))
    }
}
