// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay state: a single cursor into the ordered project list.
//!
//! The cursor always stays within `[0, len)`; next/previous wrap modulo the
//! list length. Keyboard arrows and Escape only act while the overlay is
//! open — when closed, `key_action` maps nothing so the page keeps its own
//! keyboard behavior.

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// What a key press should do to the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Close,
}

/// Overlay state. `None` while closed, `Some(index)` while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    current: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The index of the shown project, if the overlay is open.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Opens the overlay on `index`. Out-of-range indices (including any
    /// index into an empty list) are ignored.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.current = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Advances to the next project, wrapping to the first after the last.
    /// No-op while closed.
    pub fn next(&mut self, len: usize) {
        if let Some(current) = self.current {
            if len > 0 {
                self.current = Some((current + 1) % len);
            }
        }
    }

    /// Steps back to the previous project, wrapping to the last from the
    /// first. No-op while closed.
    pub fn previous(&mut self, len: usize) {
        if let Some(current) = self.current {
            if len > 0 {
                self.current = Some((current + len - 1) % len);
            }
        }
    }

    /// Maps a key press to an action — only while the overlay is open.
    pub fn key_action(&self, key: Key) -> Option<Action> {
        if !self.is_open() {
            return None;
        }
        Some(match key {
            Key::ArrowLeft => Action::Previous,
            Key::ArrowRight => Action::Next,
            Key::Escape => Action::Close,
        })
    }

    /// Applies a keyboard action.
    pub fn apply(&mut self, action: Action, len: usize) {
        match action {
            Action::Previous => self.previous(len),
            Action::Next => self.next(len),
            Action::Close => self.close(),
        }
    }

    /// Indices worth prefetching while the overlay shows `current`: the
    /// immediate neighbors on both sides.
    pub fn prefetch_targets(&self, len: usize) -> Vec<usize> {
        let Some(current) = self.current else {
            return Vec::new();
        };
        if len < 2 {
            return Vec::new();
        }
        let next = (current + 1) % len;
        let previous = (current + len - 1) % len;
        if next == previous {
            vec![next]
        } else {
            vec![next, previous]
        }
    }
}
