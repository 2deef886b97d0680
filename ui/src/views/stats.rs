use dioxus::prelude::*;

use crate::components::StatsSlideshow;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn Stats() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        main { class: "page page-stats",
            StatsSlideshow {}
        }
    }
}
