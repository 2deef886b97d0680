//! Platform detection and browser glue.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Raw `location.search` of the hosting page (e.g. `"?id=42"`).
///
/// Off the web there is no page URL, so this is always empty and the
/// slideshow falls into its "no data" screen.
pub fn current_query() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().map(|window| window.location().search()) {
            Some(Ok(search)) => search,
            Some(Err(err)) => {
                tracing::warn!(?err, "location.search unavailable");
                String::new()
            }
            None => String::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}
