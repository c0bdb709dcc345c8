// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.

mod manager;
mod notification;

pub use manager::{Manager, NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
