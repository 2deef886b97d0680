//! Internationalization (i18n) support for `chatly-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/chatly-ui.ftl   (fallback/reference)
//!   ru-RU/chatly-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("share");
//! let line = t!("active-user-summary", name = "Ann", count = 10);
//! ```
//!
//! Ids stored in static data (slide titles) go through [`tr`], since `fl!`
//! only accepts literals.
//!
//! Language selection: the browser / OS locale list first, then the Telegram
//! user's `language_code` when the Mini App host reports one
//! ([`apply_host_language`]).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("share")
///     t!("top-words-summary", word = "hi", count = 5)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "chatly-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain text output; the bidi isolation marks only get in the way of CSS.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Look up a message by runtime id.
pub fn tr(id: &str) -> String {
    LOADER.get(id)
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Map a host language code (`"ru"`, `"en-GB"`) onto an embedded locale by
/// primary language subtag.
pub fn resolve_language(code: &str) -> Option<String> {
    let requested: LanguageIdentifier = code.trim().parse().ok()?;
    available_languages().into_iter().find(|tag| {
        tag.parse::<LanguageIdentifier>()
            .map(|lang| lang.language == requested.language)
            .unwrap_or(false)
    })
}

/// Follow the Mini App host's interface language when we ship it.
pub fn apply_host_language(code: &str) {
    init();
    let Some(tag) = resolve_language(code) else {
        tracing::debug!(code, "host language not bundled; keeping current");
        return;
    };
    if let Err(err) = set_language(&tag) {
        tracing::warn!(%err, %tag, "failed switching to host language");
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn bundled_languages_are_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "ru-RU"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language(FALLBACK);
        let s = fl!(&*LOADER, "share");
        assert_eq!(s, "Share");
    }

    #[test]
    fn runtime_lookup_matches_macro() {
        init();
        let _ = set_language(FALLBACK);
        assert_eq!(tr("next"), fl!(&*LOADER, "next"));
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let _ = set_language(FALLBACK);
        let before = fl!(&*LOADER, "share");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "share");
        assert_eq!(before, after);
    }

    #[test]
    fn domain_matches_config_and_bundle_names() {
        let config = include_str!("../i18n.toml");
        assert!(config.contains(&format!("domain = \"{DOMAIN}\"")));
        for lang in ["en-US", "ru-RU"] {
            assert!(Localizations::get(&format!("{lang}/{DOMAIN}.ftl")).is_some(), "{lang}");
        }
    }

    #[test]
    fn indicator_label_takes_one_based_position() {
        init();
        let _ = set_language(FALLBACK);
        let position: usize = 0;
        let label = crate::t!("indicator-label", position = position.saturating_add(1));
        assert_eq!(label, "Slide 1");
    }

    #[test]
    fn host_codes_resolve_by_primary_language() {
        assert_eq!(resolve_language("ru").as_deref(), Some("ru-RU"));
        assert_eq!(resolve_language("en-GB").as_deref(), Some("en-US"));
        assert_eq!(resolve_language("de"), None);
        assert_eq!(resolve_language(""), None);
    }
}
