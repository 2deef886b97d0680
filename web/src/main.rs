use dioxus::prelude::*;

use ui::core::platform::Platform;
use ui::services::Services;
use ui::views::Stats;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Stats {},
    // Telegram may open the Mini App on a sub-path; every path shows the stats.
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TELEGRAM_WEB_APP_JS: &str = "https://telegram.org/js/telegram-web-app.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        ui::i18n::init();
        tracing::info!(
            platform = ?Platform::current(),
            version = env!("CARGO_PKG_VERSION"),
            "chatly mini app starting"
        );
    });
    use_context_provider(Services::production);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Script { src: TELEGRAM_WEB_APP_JS }

        Router::<Route> {}
    }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(?segments, "unknown path; showing stats");
    rsx! { Stats {} }
}
