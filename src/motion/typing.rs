// SPDX-License-Identifier: MPL-2.0
//! Typewriter reveal for the hero headline.
//!
//! After a short start delay the headline appears one character at a
//! time: the first character lands exactly at the delay, each following
//! one a fixed interval later. The effect runs at most once per app
//! session and is skipped entirely on narrow windows or when motion is
//! disabled, in which case the full text shows right away.

use std::time::{Duration, Instant};

/// Delay before the first character appears.
pub const START_DELAY: Duration = Duration::from_millis(800);
/// Interval between characters.
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending { started_at: Instant },
    Typing { began: Instant, visible: usize },
    Complete,
}

/// Reveals `text` one character at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingEffect {
    text: String,
    phase: Phase,
}

impl TypingEffect {
    /// Starts the effect; the start delay runs from `now`.
    pub fn start(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            phase: Phase::Pending { started_at: now },
        }
    }

    /// An effect that has already finished — used when the headline should
    /// show without animation (repeat sessions, reduced motion, narrow
    /// windows).
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phase: Phase::Complete,
        }
    }

    /// Advances the effect. Late ticks catch up: the visible prefix is
    /// derived from elapsed time, not tick count. Characters are revealed
    /// on `char` boundaries so multi-byte text never tears.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Pending { started_at } = self.phase {
            if now.saturating_duration_since(started_at) >= START_DELAY {
                self.phase = Phase::Typing {
                    began: started_at + START_DELAY,
                    visible: 0,
                };
            }
        }

        if let Phase::Typing { began, .. } = self.phase {
            let total = self.text.chars().count();
            let elapsed = now.saturating_duration_since(began);
            let steps = (elapsed.as_millis() / CHAR_INTERVAL.as_millis()) as usize + 1;
            let visible = steps.min(total);

            self.phase = if visible >= total {
                Phase::Complete
            } else {
                Phase::Typing { began, visible }
            };
        }
    }

    /// The currently visible prefix of the headline.
    pub fn visible_text(&self) -> &str {
        match self.phase {
            Phase::Pending { .. } => "",
            Phase::Complete => &self.text,
            Phase::Typing { visible, .. } => {
                let end = self
                    .text
                    .char_indices()
                    .nth(visible)
                    .map_or(self.text.len(), |(idx, _)| idx);
                &self.text[..end]
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }
}
