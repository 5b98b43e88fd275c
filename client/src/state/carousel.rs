//! Carousel position, auto-advance gating, and swipe tracking.
//!
//! DESIGN
//! ======
//! This is the timer-free half of the carousel. The component owns the
//! browser timers and calls [`CarouselState::tick`] and
//! [`CarouselState::resume`] when they fire; everything here is plain data so
//! wraparound and pause rules can be tested natively.
//!
//! Every manual navigation opens a new pause window and hands back a
//! [`PauseToken`]. Only the token from the most recent window can end the
//! pause, so a cooldown that was superseded by a later navigation expires
//! without effect.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::time::Duration;

/// How long automatic advance stays suspended after a manual navigation.
pub const PAUSE_WINDOW: Duration = Duration::from_secs(5);

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Identifies one pause window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseToken(u64);

/// Manual navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    GoTo(usize),
}

/// Direction of a completed swipe, named after the finger's travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next slide.
    Left,
    /// Finger moved right: show the previous slide.
    Right,
}

impl Swipe {
    /// Classify the travel `start_x - end_x`.
    #[must_use]
    pub fn from_distance(distance: f64) -> Option<Self> {
        if distance > SWIPE_THRESHOLD_PX {
            Some(Self::Left)
        } else if distance < -SWIPE_THRESHOLD_PX {
            Some(Self::Right)
        } else {
            None
        }
    }

    #[must_use]
    pub fn navigation(self) -> Navigation {
        match self {
            Self::Left => Navigation::Next,
            Self::Right => Navigation::Previous,
        }
    }
}

/// Horizontal coordinates of an in-progress touch gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn moved(&mut self, x: f64) {
        self.end_x = Some(x);
    }

    /// End the gesture and clear both coordinates.
    ///
    /// A touch that never moved has no end coordinate and is not a swipe.
    pub fn finish(&mut self) -> Option<Swipe> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        Swipe::from_distance(start? - end?)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.start_x.is_none() && self.end_x.is_none()
    }
}

/// Carousel state for one mounted carousel instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    auto_play: bool,
    interval: Duration,
    paused: bool,
    pause_generation: u64,
    swipe: SwipeTracker,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize, auto_play: bool, interval: Duration) -> Self {
        Self {
            len,
            current: 0,
            auto_play,
            interval,
            paused: false,
            pause_generation: 0,
            swipe: SwipeTracker::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    /// Whether the auto-advance timer should be running right now.
    #[must_use]
    pub fn auto_advance_active(&self) -> bool {
        self.auto_play && !self.paused && !self.interval.is_zero() && self.len > 0
    }

    /// Automatic advance. Returns `false` when auto-advance is suppressed.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance_active() {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        true
    }

    /// Apply a manual navigation and open a fresh pause window.
    ///
    /// Jump targets are reduced modulo the slide count so the index can never
    /// leave `0..len`.
    pub fn navigate(&mut self, nav: Navigation) -> PauseToken {
        if self.len > 0 {
            self.current = match nav {
                Navigation::Previous => (self.current + self.len - 1) % self.len,
                Navigation::Next => (self.current + 1) % self.len,
                Navigation::GoTo(index) => index % self.len,
            };
        }
        self.pause()
    }

    /// End the pause window identified by `token`.
    ///
    /// Returns `false` (and leaves the carousel paused) if a later navigation
    /// has already opened a newer window.
    pub fn resume(&mut self, token: PauseToken) -> bool {
        if token.0 != self.pause_generation {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.moved(x);
    }

    /// Finish the current gesture, navigating if it was a swipe.
    pub fn touch_end(&mut self) -> Option<PauseToken> {
        let swipe = self.swipe.finish()?;
        Some(self.navigate(swipe.navigation()))
    }

    /// Slide strip offset as a percentage of one slide's width.
    #[must_use]
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// CSS transform for the sliding strip.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }

    fn pause(&mut self) -> PauseToken {
        self.paused = true;
        self.pause_generation += 1;
        PauseToken(self.pause_generation)
    }
}
