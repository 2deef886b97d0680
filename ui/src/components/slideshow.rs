use dioxus::prelude::*;

use crate::core::controller;
use crate::core::format::{format_count, format_rank};
use crate::core::platform;
use crate::core::slides::{Slide, SlideImage};
use crate::core::slideshow::{
    ActiveUserView, Avatar, Screen, SlideContent, SlideView, SlideshowEvent, SlideshowState,
    TopWordsView,
};
use crate::core::swipe::SwipeTracker;
use crate::i18n;
use crate::services::Services;
use crate::t;

const SHAPE_IMAGE: Asset = asset!("/assets/images/shape.svg");

/// Two-slide chat stats viewer.
///
/// Loads stats for the `?id=` chat once per mount, then lets the user page
/// between slides with the footer button or a horizontal swipe (touch or
/// mouse drag).
#[component]
pub fn StatsSlideshow() -> Element {
    i18n::init();

    let services =
        use_hook(|| try_consume_context::<Services>().unwrap_or_else(Services::production));
    let mut state = use_signal(SlideshowState::new);
    let mut swipe = use_signal(SwipeTracker::default);

    // Mount: greet the host, then fetch. The task is scoped to this component
    // and dropped with it.
    use_hook({
        let services = services.clone();
        move || {
            let bridge = services.bridge.clone();
            if bridge.is_available() {
                bridge.ready();
                bridge.expand();
                if let Some(code) = bridge.language_code() {
                    i18n::apply_host_language(&code);
                }
            }

            let api = services.api.clone();
            spawn(async move {
                let search = platform::current_query();
                let outcome = controller::load_stats(api.as_ref(), &search).await;
                state.with_mut(|s| s.apply(SlideshowEvent::Loaded(outcome.into_stats())));
            })
        }
    });

    let view = match state.read().screen() {
        Screen::Loading => {
            return rsx! {
                div { class: "screen-placeholder screen-placeholder--loading", {t!("loading")} }
            }
        }
        Screen::NoData => {
            return rsx! {
                div { class: "screen-placeholder screen-placeholder--empty", {t!("no-data")} }
            }
        }
        Screen::Slide(view) => view,
    };

    let on_share = move |_: MouseEvent| {
        if !swipe.with_mut(|tracker| tracker.allow_click()) {
            return;
        }
        let api = services.api.clone();
        let bridge = services.bridge.clone();
        spawn(async move {
            let search = platform::current_query();
            controller::share(api.as_ref(), bridge.as_ref(), &search).await;
        });
    };

    rsx! {
        div {
            class: "main-container",
            ontouchstart: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    let at = point.client_coordinates();
                    swipe.with_mut(|tracker| tracker.press(at.x, at.y));
                }
            },
            ontouchmove: move |evt: TouchEvent| {
                if swipe.read().is_tracking() {
                    evt.prevent_default();
                }
            },
            ontouchend: move |evt: TouchEvent| {
                let released = evt
                    .touches_changed()
                    .first()
                    .map(|point| point.client_coordinates());
                let direction = swipe.with_mut(|tracker| match released {
                    Some(at) => tracker.release(at.x, at.y),
                    None => {
                        tracker.cancel();
                        None
                    }
                });
                if let Some(direction) = direction {
                    state.with_mut(|s| s.apply(SlideshowEvent::Swiped(direction)));
                }
            },
            ontouchcancel: move |_| swipe.with_mut(|tracker| tracker.cancel()),
            onmousedown: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                swipe.with_mut(|tracker| tracker.press(at.x, at.y));
            },
            onmouseup: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                if let Some(direction) = swipe.with_mut(|tracker| tracker.release(at.x, at.y)) {
                    state.with_mut(|s| s.apply(SlideshowEvent::Swiped(direction)));
                }
            },
            onmouseleave: move |_| swipe.with_mut(|tracker| tracker.cancel()),

            div { class: "white-header" }

            {render_slide(view)}

            div { class: "white-footer",
                div { class: "buttons-container",
                    button {
                        r#type: "button",
                        class: "btn btn-share",
                        onclick: on_share,
                        {t!("share")}
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            path { d: "M12 15V3M7 8l5-5 5 5M5 13v6a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2v-6" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-next",
                        onclick: move |_| {
                            if swipe.with_mut(|tracker| tracker.allow_click()) {
                                state.with_mut(|s| s.apply(SlideshowEvent::Advance));
                            }
                        },
                        {t!("next")}
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            path { d: "M5 12h14M13 6l6 6-6 6" }
                        }
                    }
                }
            }
        }
    }
}

fn render_slide(view: SlideView) -> Element {
    let slide: &'static Slide = view.slide;

    rsx! {
        div {
            class: "colored-section",
            "data-slide": "{slide.id}",
            style: "background-color: {slide.background_color}",

            img { class: "bg-image", src: image_asset(slide.background_image), alt: "" }

            div { class: "indicators-wrapper",
                for indicator in view.indicators {
                    div {
                        key: "{indicator.position}",
                        class: indicator_class(indicator.active),
                        aria_label: t!("indicator-label", position = indicator.position.saturating_add(1)),
                    }
                }
            }

            h1 { class: "slide-title",
                for (i, line) in slide.title.iter().enumerate() {
                    if i > 0 {
                        br {}
                    }
                    if line.accent {
                        span { style: "color: {slide.accent_color}", {i18n::tr(line.message)} }
                    } else {
                        span { {i18n::tr(line.message)} }
                    }
                }
            }

            {
                match view.content {
                    SlideContent::ActiveUser(Some(user)) => render_active_user(user),
                    SlideContent::TopWords(Some(words)) => render_top_words(words),
                    SlideContent::ActiveUser(None) | SlideContent::TopWords(None) => rsx! {},
                }
            }
        }
    }
}

fn render_active_user(user: ActiveUserView) -> Element {
    let number = format_count(user.count);
    let caption = t!("active-user-count-caption", count = user.count);
    let summary = t!("active-user-summary", name = user.name.clone(), count = user.count);
    let alt = t!("active-user-avatar-alt", name = user.name.clone());

    rsx! {
        div { class: "slide-body active-user",
            div { class: "active-user__count",
                span { class: "active-user__number", "{number}" }
                span { class: "active-user__caption", "{caption}" }
            }
            {
                match user.avatar {
                    Avatar::Image(url) => rsx! {
                        img { class: "avatar", src: "{url}", alt: "{alt}" }
                    },
                    Avatar::Initial(letter) => rsx! {
                        div { class: "avatar avatar--placeholder", aria_hidden: "true", "{letter}" }
                    },
                }
            }
            p { class: "slide-summary", "{summary}" }
        }
    }
}

fn render_top_words(words: TopWordsView) -> Element {
    let summary = words
        .leader()
        .map(|leader| t!("top-words-summary", word = leader.word.clone(), count = leader.count));

    rsx! {
        div { class: "slide-body top-words-block",
            ol { class: "top-words",
                for entry in words.ranked {
                    li { key: "{entry.rank}", class: "top-words__item",
                        span { class: "top-words__rank", {format_rank(entry.rank)} }
                        span { class: "top-words__word", "{entry.word}" }
                    }
                }
            }
            if let Some(summary) = summary {
                p { class: "slide-summary", "{summary}" }
            }
        }
    }
}

fn indicator_class(active: bool) -> &'static str {
    if active {
        "indicator active"
    } else {
        "indicator"
    }
}

fn image_asset(image: SlideImage) -> Asset {
    match image {
        SlideImage::Shape => SHAPE_IMAGE,
    }
}
