// SPDX-License-Identifier: MPL-2.0
//! Domain layer - settings value types with no runtime dependencies.
//!
//! Types here only derive `serde` traits so they can be persisted; they
//! never touch the filesystem, the network, or the UI toolkit.
//!
//! # Modules
//!
//! - [`language`]: Language registry ([`LanguageEntry`](language::LanguageEntry),
//!   [`LanguageCategory`](language::LanguageCategory))
//! - [`notifications`]: Notification preferences
//!   ([`NotificationSettings`](notifications::NotificationSettings),
//!   [`SoundToggleList`](notifications::SoundToggleList)) and push subscription
//!   records ([`PushSubscriptionRecord`](notifications::PushSubscriptionRecord))

pub mod language;
pub mod notifications;
