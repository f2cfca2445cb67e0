// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the chat server's HTTP API, the
//! local data directory and the native dialog toolkit.
//!
//! # Available Adapters
//!
//! - [`http`]: Chat server client (implements [`PushBackend`])
//! - [`push_store`]: Subscription record kept on disk (implements [`PushRegistry`])
//! - [`platform`]: Native permission dialog (implements [`NotificationPermission`])
//!
//! [`PushBackend`]: crate::application::port::PushBackend
//! [`PushRegistry`]: crate::application::port::PushRegistry
//! [`NotificationPermission`]: crate::application::port::NotificationPermission

pub mod http;
pub mod platform;
pub mod push_store;

pub use http::{ApiClient, OfflineBackend};
pub use platform::{DesktopPermission, PermissionPrompt};
pub use push_store::FilePushRegistry;
