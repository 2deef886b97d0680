//! The fixed slide table and a bounded index into it.

/// Which stats block a slide presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    ActiveUser,
    TopWords,
}

/// Decorative artwork layered behind the slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideImage {
    Shape,
}

/// One line of a slide title. `message` is a localization id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleLine {
    pub message: &'static str,
    pub accent: bool,
}

impl TitleLine {
    pub const fn plain(message: &'static str) -> Self {
        Self {
            message,
            accent: false,
        }
    }

    pub const fn accent(message: &'static str) -> Self {
        Self {
            message,
            accent: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub background_color: &'static str,
    /// Color of accented title lines.
    pub accent_color: &'static str,
    pub indicator_position: usize,
    pub background_image: SlideImage,
    pub title: &'static [TitleLine],
    pub kind: SlideKind,
}

pub const SLIDES: [Slide; 2] = [
    Slide {
        id: 15,
        background_color: "#B9A3DB",
        accent_color: "#52546F",
        indicator_position: 0,
        background_image: SlideImage::Shape,
        title: &[
            TitleLine::plain("slide-active-title-1"),
            TitleLine::accent("slide-active-title-2"),
        ],
        kind: SlideKind::ActiveUser,
    },
    Slide {
        id: 16,
        background_color: "#55C2BC",
        accent_color: "#3D5258",
        indicator_position: 1,
        background_image: SlideImage::Shape,
        title: &[
            TitleLine::plain("slide-words-title-1"),
            TitleLine::accent("slide-words-title-2"),
            TitleLine::accent("slide-words-title-3"),
        ],
        kind: SlideKind::TopWords,
    },
];

/// Position in [`SLIDES`]. Always valid; navigation clamps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlideIndex(usize);

impl SlideIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(SLIDES.len() - 1);

    pub fn get(self) -> usize {
        self.0
    }

    pub fn slide(self) -> &'static Slide {
        &SLIDES[self.0]
    }

    /// Step forward. Returns `false` at the last slide.
    pub fn advance(&mut self) -> bool {
        if self.0 < Self::LAST.0 {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Returns `false` at the first slide.
    pub fn retreat(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}
