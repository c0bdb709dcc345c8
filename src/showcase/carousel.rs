// SPDX-License-Identifier: MPL-2.0
//! Services carousel state machine.
//!
//! The carousel used to be an external collaborator configured
//! declaratively; the same knobs survive here as data: slides-per-view per
//! width breakpoint, a looping index, an autoplay timer that pauses while
//! the pointer hovers the strip, and clickable pagination bullets. Manual
//! navigation nudges the autoplay anchor but never disables autoplay.

use std::time::{Duration, Instant};

/// Autoplay interval between automatic advances.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(4000);
/// Duration of the slide transition, used by the view for easing.
pub const TRANSITION: Duration = Duration::from_millis(600);

/// How many slides are shown at once and how far apart they sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Fractional values deliberately show a sliver of the next slide.
    pub slides_per_view: f32,
    /// Gap between slides in logical pixels.
    pub gap: f32,
}

/// Width-dependent layouts, widest first.
const BREAKPOINTS: &[(f32, SlideLayout)] = &[
    (
        1024.0,
        SlideLayout {
            slides_per_view: 3.0,
            gap: 32.0,
        },
    ),
    (
        768.0,
        SlideLayout {
            slides_per_view: 2.2,
            gap: 28.0,
        },
    ),
    (
        640.0,
        SlideLayout {
            slides_per_view: 1.5,
            gap: 24.0,
        },
    ),
];

/// Layout below every breakpoint.
const BASE_LAYOUT: SlideLayout = SlideLayout {
    slides_per_view: 1.2,
    gap: 24.0,
};

/// Resolves the slide layout for a window width.
pub fn layout_for_width(width: f32) -> SlideLayout {
    for (min_width, layout) in BREAKPOINTS {
        if width >= *min_width {
            return *layout;
        }
    }
    BASE_LAYOUT
}

/// Looping, autoplaying carousel over a fixed number of slides.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    layout: SlideLayout,
    hovered: bool,
    autoplay_anchor: Option<Instant>,
    autoplay_delay: Duration,
}

impl Carousel {
    pub fn new(slide_count: usize, window_width: f32) -> Self {
        Self {
            slide_count,
            current: 0,
            layout: layout_for_width(window_width),
            hovered: false,
            autoplay_anchor: None,
            autoplay_delay: AUTOPLAY_DELAY,
        }
    }

    /// Overrides the autoplay interval (from the `[carousel]` config).
    pub fn set_autoplay_delay(&mut self, delay: Duration) {
        self.autoplay_delay = delay;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Starts (or restarts) the autoplay timer from `now`.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay_anchor = Some(now);
    }

    /// Advances one slide, wrapping after the last.
    pub fn advance(&mut self, now: Instant) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.slide_count;
        self.reset_anchor(now);
    }

    /// Steps back one slide, wrapping to the last from the first.
    pub fn retreat(&mut self, now: Instant) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.reset_anchor(now);
    }

    /// Jumps to a slide from a pagination bullet. Out-of-range is ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.slide_count {
            self.current = index;
            self.reset_anchor(now);
        }
    }

    /// Pointer entered or left the strip. Hovering pauses autoplay; when
    /// the pointer leaves, the timer restarts from `now` so the next
    /// advance is a full delay away.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        self.hovered = hovered;
        if !hovered {
            self.reset_anchor(now);
        }
    }

    /// Re-resolves the layout after a window resize.
    pub fn set_width(&mut self, width: f32) {
        self.layout = layout_for_width(width);
    }

    /// Fires autoplay when due. Returns true if the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hovered || self.slide_count < 2 {
            return false;
        }
        let Some(anchor) = self.autoplay_anchor else {
            return false;
        };
        if now.saturating_duration_since(anchor) >= self.autoplay_delay {
            self.advance(now);
            true
        } else {
            false
        }
    }

    fn reset_anchor(&mut self, now: Instant) {
        if self.autoplay_anchor.is_some() {
            self.autoplay_anchor = Some(now);
        }
    }
}
