//! Shared UI crate for the Chatly stats Mini App. All logic and views live here;
//! platform crates only launch and route.

pub mod config;
pub mod core;
pub mod i18n;
pub mod services;
pub mod views;

pub mod components {
    // Two-slide stats viewer (components/slideshow.rs)
    pub mod slideshow;
    pub use slideshow::StatsSlideshow;
}
