// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Only a few events reach the user this way: a refused notification
//! permission and an unreadable settings file. Push failures are logged,
//! not shown.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - Toast rendering
//!
//! ```ignore
//! manager.push(Notification::error("notification-denied"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
