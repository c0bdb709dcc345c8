// SPDX-License-Identifier: MPL-2.0
//! Scroll-derived UI state and smooth anchor scrolling.
//!
//! The header condenses once the page is scrolled past a small offset, the
//! back-to-top control appears further down, and a thin progress bar tracks
//! how far through the page the reader is. Anchor navigation animates the
//! scroll offset with an ease-out curve instead of jumping; any manual
//! scroll input cancels the animation (the app simply drops it).

use std::time::{Duration, Instant};

/// Offset past which the header switches to its condensed style.
pub const HEADER_SCROLLED_OFFSET: f32 = 100.0;
/// Offset past which the back-to-top control becomes visible.
pub const BACK_TO_TOP_OFFSET: f32 = 500.0;
/// Duration of an animated anchor scroll.
pub const ANCHOR_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// True once the page is scrolled enough to condense the header.
pub fn header_is_scrolled(offset: f32) -> bool {
    offset > HEADER_SCROLLED_OFFSET
}

/// True once the back-to-top control should be shown.
pub fn back_to_top_visible(offset: f32) -> bool {
    offset > BACK_TO_TOP_OFFSET
}

/// Read-through fraction in `0.0..=1.0` for the progress bar.
///
/// A page shorter than the viewport reports 0 rather than dividing by a
/// non-positive scroll range.
pub fn progress_fraction(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let range = content_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

/// An in-flight animated scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: ANCHOR_SCROLL_DURATION,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Samples the animated offset. The second value is true once the
    /// animation has landed on its target.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
