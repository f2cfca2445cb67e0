// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions for the platform capabilities the settings
//!   panes depend on (notification permission, push registry, backend)
//! - [`query`]: Read-only operations (preferred-language resolution)
//! - [`notifications`]: Desktop/push/sound toggle use cases
//! - [`store`]: Observable settings store shared with the UI
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use chat_settings::application::notifications::NotificationController;
//! use chat_settings::application::store::SettingsStore;
//!
//! let controller = NotificationController::new(permission, registry, backend, store);
//! let outcome = controller.set_desktop(true).await;
//! ```

pub mod notifications;
pub mod port;
pub mod push_key;
pub mod query;
pub mod store;
