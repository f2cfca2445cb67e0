// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks every 250ms while toasts are shown so they can auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
