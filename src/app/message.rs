// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::notifications::{DesktopOutcome, PushOutcome, PushState, Ticket};
use crate::error::PushError;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the subscription lookup started on launch.
    PushQueried { ticket: Ticket, state: PushState },
    /// Result of a push toggle.
    PushChanged {
        ticket: Ticket,
        result: Result<PushOutcome, PushError>,
    },
    DesktopChanged(DesktopOutcome),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override, matched against the language registry
    /// (e.g. `fr`, `pt-BR`).
    pub lang: Option<String>,
    /// Optional data directory override (for the push subscription).
    /// Takes precedence over `CHAT_SETTINGS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHAT_SETTINGS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
