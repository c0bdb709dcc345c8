// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Auto-dismiss duration; `None` means manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast shown in the corner of the window. The message is an i18n key
/// resolved at render time so notifications survive locale switches.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// True once this notification has outlived its display time.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn success_expires_but_errors_do_not() {
        let success = Notification::success("notification-form-delivered");
        let error = Notification::error("notification-config-parse-error");
        let later = Instant::now() + Duration::from_secs(10);

        assert!(success.is_expired(later));
        assert!(!error.is_expired(later));
    }

    #[test]
    fn warnings_outlive_successes() {
        let success_ttl = Severity::Success
            .auto_dismiss_duration()
            .expect("success auto-dismisses");
        let warning_ttl = Severity::Warning
            .auto_dismiss_duration()
            .expect("warning auto-dismisses");
        assert!(warning_ttl > success_ttl);
    }
}
