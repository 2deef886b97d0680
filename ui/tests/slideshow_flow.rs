//! End-to-end slideshow behaviour against an in-memory backend and host.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::json;

use ui::core::api::{ApiError, StatsApi};
use ui::core::bridge::{HostBridge, NoBridge};
use ui::core::controller::{self, LoadOutcome, ShareOutcome};
use ui::core::query::ChatId;
use ui::core::slideshow::{
    Avatar, Screen, SlideContent, SlideshowEvent, SlideshowState,
};
use ui::core::stats::Stats;

#[derive(Default)]
struct FakeBackend {
    body: Option<serde_json::Value>,
    share_fails: bool,
    stats_requests: RefCell<Vec<String>>,
    share_requests: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn serving(body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    fn offline() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl StatsApi for FakeBackend {
    async fn fetch_stats(&self, chat: &ChatId) -> Result<Stats, ApiError> {
        self.stats_requests.borrow_mut().push(chat.to_string());
        match &self.body {
            Some(body) => Ok(Stats::from_json(&body.to_string())?),
            None => Err(ApiError::Status(503)),
        }
    }

    async fn notify_share(&self, chat: &ChatId) -> Result<(), ApiError> {
        self.share_requests.borrow_mut().push(chat.to_string());
        if self.share_fails {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct FakeHost {
    closed: Cell<u32>,
}

impl HostBridge for FakeHost {
    fn is_available(&self) -> bool {
        true
    }

    fn close(&self) {
        self.closed.set(self.closed.get() + 1);
    }

    fn ready(&self) {}

    fn expand(&self) {}

    fn language_code(&self) -> Option<String> {
        Some("en".into())
    }
}

fn sample_body() -> serde_json::Value {
    json!({
        "active_user": { "name": "Ann", "count": 10, "avatar_url": null },
        "top_words": [
            { "word": "hi", "count": 5 },
            { "word": "yo", "count": 3 }
        ]
    })
}

fn mount(api: &FakeBackend, search: &str) -> SlideshowState {
    let mut state = SlideshowState::new();
    let outcome = block_on(controller::load_stats(api, search));
    state.apply(SlideshowEvent::Loaded(outcome.into_stats()));
    state
}

#[test]
fn loads_and_pages_through_both_slides() {
    let api = FakeBackend::serving(sample_body());
    let mut state = mount(&api, "?id=42");
    assert_eq!(*api.stats_requests.borrow(), ["42"]);

    let Screen::Slide(first) = state.screen() else {
        panic!("expected first slide, got {:?}", state.screen());
    };
    let SlideContent::ActiveUser(Some(user)) = first.content else {
        panic!("expected active user block");
    };
    assert_eq!(user.count, 10);
    assert_eq!(user.avatar, Avatar::Initial("A".into()));

    state.advance();
    let Screen::Slide(second) = state.screen() else {
        panic!("expected second slide");
    };
    let SlideContent::TopWords(Some(words)) = second.content else {
        panic!("expected top words block");
    };
    let order: Vec<_> = words.ranked.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(order, ["hi", "yo"]);
}

#[test]
fn missing_id_renders_no_data_without_requests() {
    let api = FakeBackend::serving(sample_body());
    let outcome = block_on(controller::load_stats(&api, "?chat=42"));
    assert!(matches!(outcome, LoadOutcome::MissingChatId));
    assert!(api.stats_requests.borrow().is_empty());

    let state = mount(&api, "");
    assert_eq!(state.screen(), Screen::NoData);
    assert!(api.stats_requests.borrow().is_empty());
}

#[test]
fn network_failure_ends_in_no_data() {
    let api = FakeBackend::offline();
    let outcome = block_on(controller::load_stats(&api, "?id=42"));
    assert!(matches!(outcome, LoadOutcome::Failed(ApiError::Status(503))));

    let state = mount(&api, "?id=42");
    assert!(!state.is_loading());
    assert_eq!(state.screen(), Screen::NoData);
}

#[test]
fn share_posts_once_and_leaves_state_alone() {
    let api = FakeBackend::serving(sample_body());
    let host = FakeHost::default();
    let mut state = mount(&api, "?id=42");
    state.advance();
    let before = state.clone();

    let outcome = block_on(controller::share(&api, &host, "?id=42"));

    assert!(matches!(outcome, ShareOutcome::Sent));
    assert_eq!(*api.share_requests.borrow(), ["42"]);
    assert_eq!(host.closed.get(), 1);
    assert_eq!(state, before);
}

#[test]
fn share_without_id_is_a_no_op() {
    let api = FakeBackend::serving(sample_body());
    let host = FakeHost::default();

    let outcome = block_on(controller::share(&api, &host, "?foo=bar"));

    assert!(matches!(outcome, ShareOutcome::Skipped));
    assert!(api.share_requests.borrow().is_empty());
    assert_eq!(host.closed.get(), 0);
}

#[test]
fn share_failure_is_swallowed() {
    let api = FakeBackend {
        share_fails: true,
        ..FakeBackend::serving(sample_body())
    };

    let outcome = block_on(controller::share(&api, &NoBridge, "?id=7"));

    assert!(matches!(outcome, ShareOutcome::Failed(ApiError::Status(500))));
    assert_eq!(*api.share_requests.borrow(), ["7"]);
}

#[test]
fn repeated_navigation_is_clamped() {
    let api = FakeBackend::serving(sample_body());
    let mut state = mount(&api, "?id=42");

    for _ in 0..5 {
        state.apply(SlideshowEvent::Advance);
    }
    assert_eq!(state.index().get(), 1);

    for _ in 0..5 {
        state.apply(SlideshowEvent::Retreat);
    }
    assert_eq!(state.index().get(), 0);
}
