// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, wheel, resize) are routed into page messages,
//! and a periodic tick drives the animations. The tick runs fast only
//! while something is actually animating; when merely the autoplay timer,
//! the pulse delay or toast expiry is pending it slows down, and with
//! nothing to do it stops entirely.

use super::{App, Message};
use crate::showcase::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Frame-rate tick for running animations.
const FAST_TICK: Duration = Duration::from_millis(16);
/// Coarse tick for timers that only need ~100 ms resolution.
const SLOW_TICK: Duration = Duration::from_millis(100);

pub fn create(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![create_event_subscription()];

    if app.needs_fast_ticks() {
        subscriptions.push(time::every(FAST_TICK).map(Message::Tick));
    } else if app.needs_slow_ticks() {
        subscriptions.push(time::every(SLOW_TICK).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

/// Routes raw window, wheel and keyboard events into messages.
fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match &event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }

        // Wheel input cancels an in-flight anchor animation; the
        // scrollable itself consumes the scroll.
        event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. }) => {
            Some(Message::WheelScrolled)
        }

        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                Some(Message::KeyPressed(lightbox::Key::Escape))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::KeyPressed(lightbox::Key::ArrowLeft))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(Message::KeyPressed(lightbox::Key::ArrowRight))
            }
            _ => None,
        },

        _ => None,
    })
}

impl App {
    /// True while a per-frame animation is in progress.
    fn needs_fast_ticks(&self) -> bool {
        !self.typing.is_complete()
            || self.scroll_animation.is_some()
            || self
                .counters
                .iter()
                .any(|c| c.has_started() && !c.is_done())
    }

    /// True while a coarse timer still has work pending.
    fn needs_slow_ticks(&self) -> bool {
        self.config.carousel.autoplay.unwrap_or(true)
            || !self.notifications.is_empty()
            || !self.pulse_visible
    }
}
