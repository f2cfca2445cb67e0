// SPDX-License-Identifier: MPL-2.0
//! `chat_settings` provides the language and notification settings panes of a
//! chat client, built with the Iced GUI framework.
//!
//! The crate is layered:
//!
//! - [`domain`] - language registry and notification value types
//! - [`application`] - language resolution, the settings store and the
//!   notification controller, written against the traits in
//!   [`application::port`]
//! - [`infrastructure`] - HTTP, file and dialog implementations of those traits
//! - [`ui`] and [`app`] - the Iced screen

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod ui;
