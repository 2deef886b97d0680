//! Slideshow state and its render contract.
//!
//! [`SlideshowState`] is the only mutable state of the page. Components feed it
//! [`SlideshowEvent`]s and draw whatever [`SlideshowState::screen`] returns;
//! `screen` is a pure function of the state, so equal states always produce
//! equal screens.

use super::slides::{Slide, SlideIndex, SlideKind, SLIDES};
use super::stats::{ActiveUser, Stats, WordCount};
use super::swipe::SwipeDirection;

/// How many words the top-words slide ranks.
pub const TOP_WORDS_SHOWN: usize = 3;
/// Fewer words than this and the top-words block is omitted.
pub const TOP_WORDS_MIN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SlideshowEvent {
    Advance,
    Retreat,
    Swiped(SwipeDirection),
    Loaded(Option<Stats>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowState {
    index: SlideIndex,
    stats: Option<Stats>,
    loading: bool,
}

impl Default for SlideshowState {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideshowState {
    pub fn new() -> Self {
        Self {
            index: SlideIndex::FIRST,
            stats: None,
            loading: true,
        }
    }

    pub fn index(&self) -> SlideIndex {
        self.index
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Settle the load. Only the first call has an effect.
    pub fn finish_loading(&mut self, stats: Option<Stats>) {
        if !self.loading {
            tracing::debug!("stats already settled; ignoring late result");
            return;
        }
        self.stats = stats;
        self.loading = false;
    }

    pub fn advance(&mut self) -> bool {
        self.index.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.index.retreat()
    }

    pub fn apply(&mut self, event: SlideshowEvent) {
        match event {
            SlideshowEvent::Advance | SlideshowEvent::Swiped(SwipeDirection::Left) => {
                self.advance();
            }
            SlideshowEvent::Retreat | SlideshowEvent::Swiped(SwipeDirection::Right) => {
                self.retreat();
            }
            SlideshowEvent::Loaded(stats) => self.finish_loading(stats),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.loading {
            return Screen::Loading;
        }
        let Some(stats) = self.stats.as_ref() else {
            return Screen::NoData;
        };

        let slide = self.index.slide();
        let indicators = SLIDES
            .iter()
            .enumerate()
            .map(|(position, _)| Indicator {
                position,
                active: position == slide.indicator_position,
            })
            .collect();

        let content = match slide.kind {
            SlideKind::ActiveUser => {
                SlideContent::ActiveUser(stats.active_user.as_ref().map(ActiveUserView::from))
            }
            SlideKind::TopWords => {
                SlideContent::TopWords(stats.top_words.as_deref().and_then(TopWordsView::build))
            }
        };

        Screen::Slide(SlideView {
            index: self.index.get(),
            slide,
            indicators,
            content,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    NoData,
    Slide(SlideView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub index: usize,
    pub slide: &'static Slide,
    pub indicators: Vec<Indicator>,
    pub content: SlideContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    ActiveUser(Option<ActiveUserView>),
    TopWords(Option<TopWordsView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initial(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveUserView {
    pub name: String,
    pub count: u64,
    pub avatar: Avatar,
}

impl From<&ActiveUser> for ActiveUserView {
    fn from(user: &ActiveUser) -> Self {
        let avatar = match user.avatar() {
            Some(url) => Avatar::Image(url.to_string()),
            None => Avatar::Initial(user.initial()),
        };
        Self {
            name: user.name.clone(),
            count: user.count,
            avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// 1-based.
    pub rank: usize,
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopWordsView {
    pub ranked: Vec<RankedWord>,
}

impl TopWordsView {
    fn build(words: &[WordCount]) -> Option<Self> {
        if words.len() < TOP_WORDS_MIN {
            return None;
        }
        let ranked = words
            .iter()
            .take(TOP_WORDS_SHOWN)
            .enumerate()
            .map(|(i, entry)| RankedWord {
                rank: i + 1,
                word: entry.word.clone(),
                count: entry.count,
            })
            .collect();
        Some(Self { ranked })
    }

    /// The most used word, cited in the summary sentence.
    pub fn leader(&self) -> Option<&RankedWord> {
        self.ranked.first()
    }
}
