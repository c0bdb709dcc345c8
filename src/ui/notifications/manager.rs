// SPDX-License-Identifier: MPL-2.0
//! Toast notification manager.
//!
//! Holds the queue of visible toasts, expires them on ticks, and renders
//! them stacked in the corner. Errors stay until dismissed by hand.

use super::notification::{Notification, NotificationId};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border as border_tokens, radius, sizing, spacing, typography};
use iced::widget::{button, column, container, row, text};
use iced::{Background, Border, Element, Length, Theme};
use std::time::Instant;

/// Message emitted by the toast stack.
#[derive(Debug, Clone)]
pub enum NotificationMessage {
    Dismiss(NotificationId),
}

/// Queue of visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id() != id);
    }

    /// Drops expired notifications. Returns true if anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired(now));
        self.notifications.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn update(&mut self, message: NotificationMessage) {
        match message {
            NotificationMessage::Dismiss(id) => self.dismiss(id),
        }
    }

    /// Renders the toast stack.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, NotificationMessage> {
        let mut stack = column![].spacing(spacing::XS);
        for notification in &self.notifications {
            let accent = notification.severity().color();
            let body = row![
                text(i18n.tr(notification.message_key())).size(typography::BODY),
                button(text("×").size(typography::BODY_LG))
                    .on_press(NotificationMessage::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(crate::ui::styles::button::ghost),
            ]
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center);

            stack = stack.push(
                container(body)
                    .padding(spacing::SM)
                    .width(Length::Fixed(sizing::TOAST_WIDTH))
                    .style(move |theme: &Theme| {
                        let base = theme.extended_palette();
                        container::Style {
                            background: Some(Background::Color(base.background.weak.color)),
                            border: Border {
                                radius: radius::MD.into(),
                                width: border_tokens::WIDTH_MD,
                                color: accent,
                            },
                            ..container::Style::default()
                        }
                    }),
            );
        }
        stack.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_and_dismiss_manage_the_queue() {
        let mut manager = Manager::new();
        let toast = Notification::info("notification-state-read-error");
        let id = toast.id();
        manager.push(toast);
        assert_eq!(manager.len(), 1);

        manager.update(NotificationMessage::Dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn expire_removes_only_stale_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-form-delivered"));
        manager.push(Notification::error("notification-config-parse-error"));

        let changed = manager.expire(Instant::now() + Duration::from_secs(10));
        assert!(changed);
        assert_eq!(manager.len(), 1);

        // Nothing further expires.
        assert!(!manager.expire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn toast_stack_renders() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-state-parse-error"));
        let i18n = I18n::default();
        let _element = manager.view(&i18n);
    }
}
