// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The settings panes never reach for a global platform object. Every
//! capability they need is one of these traits, injected as
//! `Arc<dyn Trait>` so tests can substitute in-memory doubles.
//!
//! # Available Ports
//!
//! - [`permission`]: OS-level notification permission
//! - [`push`]: Background push registration (subscribe / unsubscribe / lookup)
//! - [`backend`]: Chat server endpoints that record push subscriptions
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so results can be produced inside `Task::perform`
//! - Methods are `async` through `async_trait` to stay object safe

pub mod backend;
pub mod permission;
pub mod push;

pub use backend::PushBackend;
pub use permission::NotificationPermission;
pub use push::PushRegistry;
