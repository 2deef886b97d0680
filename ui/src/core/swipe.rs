//! Horizontal swipe recognition shared by touch and mouse input.

/// Minimum horizontal travel before a release counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
    /// The last release was a swipe; the click the browser fires right after
    /// it must not reach a button.
    swallow_click: bool,
}

impl SwipeTracker {
    pub fn press(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
        self.swallow_click = false;
    }

    /// Whether a click following the last press/release may run. Consumes
    /// the guard left by a swipe.
    pub fn allow_click(&mut self) -> bool {
        !std::mem::take(&mut self.swallow_click)
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Finish the gesture and classify it. Vertical drags and short taps
    /// yield `None`.
    pub fn release(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.origin.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() < SWIPE_THRESHOLD_PX || dx.abs() <= dy.abs() {
            return None;
        }

        self.swallow_click = true;
        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}
