//! Host messaging platform integration (Telegram Mini Apps).
//!
//! The page may be opened inside Telegram, where `telegram-web-app.js`
//! exposes `window.Telegram.WebApp`, or in a plain browser where it does not.
//! Every call is a no-op when the host object is missing.

pub trait HostBridge {
    fn is_available(&self) -> bool;

    /// Ask the host to close the Mini App window.
    fn close(&self);

    /// Tell the host the page is ready to be shown.
    fn ready(&self);

    /// Expand the Mini App to full height.
    fn expand(&self);

    /// Interface language of the host user, e.g. `"ru"`.
    fn language_code(&self) -> Option<String>;
}

/// Bridge for environments without a host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBridge;

impl HostBridge for NoBridge {
    fn is_available(&self) -> bool {
        false
    }

    fn close(&self) {}

    fn ready(&self) {}

    fn expand(&self) {}

    fn language_code(&self) -> Option<String> {
        None
    }
}

/// `window.Telegram.WebApp`, looked up on every call so a late-loading
/// script is still picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramBridge;

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    fn property(target: &JsValue, name: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    pub(super) fn web_app() -> Option<JsValue> {
        let window: JsValue = web_sys::window()?.into();
        let telegram = property(&window, "Telegram")?;
        property(&telegram, "WebApp")
    }

    pub(super) fn call(method: &str) {
        let Some(app) = web_app() else {
            return;
        };
        let Some(function) = property(&app, method).and_then(|f| f.dyn_into::<Function>().ok())
        else {
            tracing::warn!(method, "Telegram.WebApp method missing");
            return;
        };
        if let Err(err) = function.call0(&app) {
            tracing::warn!(method, ?err, "Telegram.WebApp call failed");
        }
    }

    pub(super) fn language_code() -> Option<String> {
        let app = web_app()?;
        let init = property(&app, "initDataUnsafe")?;
        let user = property(&init, "user")?;
        property(&user, "language_code")?.as_string()
    }
}

#[cfg(target_arch = "wasm32")]
impl HostBridge for TelegramBridge {
    fn is_available(&self) -> bool {
        web::web_app().is_some()
    }

    fn close(&self) {
        web::call("close");
    }

    fn ready(&self) {
        web::call("ready");
    }

    fn expand(&self) {
        web::call("expand");
    }

    fn language_code(&self) -> Option<String> {
        web::language_code()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HostBridge for TelegramBridge {
    fn is_available(&self) -> bool {
        false
    }

    fn close(&self) {}

    fn ready(&self) {}

    fn expand(&self) {}

    fn language_code(&self) -> Option<String> {
        None
    }
}
