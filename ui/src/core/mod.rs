//! Platform-agnostic slideshow logic: data model, state machine, backend
//! client and host bridge. Nothing here renders.

pub mod api;
pub mod bridge;
pub mod controller;
pub mod format;
pub mod platform;
pub mod query;
pub mod slides;
pub mod slideshow;
pub mod stats;
pub mod swipe;
