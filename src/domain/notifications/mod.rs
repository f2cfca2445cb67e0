// SPDX-License-Identifier: MPL-2.0
//! Notification preference types.

pub mod push;

pub use push::{
    ApplicationServerKey, PushSubscriptionRecord, SubscribeOptions, SubscriptionKeys,
    WebPushSubscription,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Desktop and push notification flags.
///
/// `push` mirrors whether a push subscription exists; it is never the source
/// of truth for the subscription itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub desktop: bool,
    #[serde(default)]
    pub push: bool,
}

/// Outcome of an OS-level notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionState {
    /// The user has not decided yet; requesting will prompt.
    #[default]
    Default,
    Granted,
    Denied,
}

impl PermissionState {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// Identifier of a notification sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundId {
    Message,
    Outbound,
    CallJoin,
    CallLeave,
}

impl SoundId {
    pub const ALL: [SoundId; 4] = [
        SoundId::Message,
        SoundId::Outbound,
        SoundId::CallJoin,
        SoundId::CallLeave,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SoundId::Message => "message",
            SoundId::Outbound => "outbound",
            SoundId::CallJoin => "call_join",
            SoundId::CallLeave => "call_leave",
        }
    }

    /// Returns the i18n key of the sound's label.
    #[must_use]
    pub fn i18n_key(self) -> String {
        format!("settings-notifications-sound-{}", self.as_str().replace('_', "-"))
    }

    #[must_use]
    pub fn enabled_by_default(self) -> bool {
        !matches!(self, SoundId::Outbound)
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundToggle {
    pub id: SoundId,
    pub enabled: bool,
}

/// Ordered per-sound enabled flags.
///
/// Each sound appears at most once; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SoundToggle>", into = "Vec<SoundToggle>")]
pub struct SoundToggleList(Vec<SoundToggle>);

impl Default for SoundToggleList {
    fn default() -> Self {
        Self(
            SoundId::ALL
                .iter()
                .map(|&id| SoundToggle {
                    id,
                    enabled: id.enabled_by_default(),
                })
                .collect(),
        )
    }
}

impl SoundToggleList {
    pub fn iter(&self) -> impl Iterator<Item = &SoundToggle> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_enabled(&self, id: SoundId) -> bool {
        self.0
            .iter()
            .find(|toggle| toggle.id == id)
            .is_some_and(|toggle| toggle.enabled)
    }

    /// Sets the flag of a single sound, appending it if it is not listed yet.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_enabled(&mut self, id: SoundId, enabled: bool) -> bool {
        match self.0.iter_mut().find(|toggle| toggle.id == id) {
            Some(toggle) if toggle.enabled == enabled => false,
            Some(toggle) => {
                toggle.enabled = enabled;
                true
            }
            None => {
                self.0.push(SoundToggle { id, enabled });
                true
            }
        }
    }
}

impl From<Vec<SoundToggle>> for SoundToggleList {
    fn from(toggles: Vec<SoundToggle>) -> Self {
        let mut list = Self(Vec::with_capacity(toggles.len()));
        for toggle in toggles {
            // later duplicates override earlier ones
            list.set_enabled(toggle.id, toggle.enabled);
        }
        list
    }
}

impl From<SoundToggleList> for Vec<SoundToggle> {
    fn from(list: SoundToggleList) -> Self {
        list.0
    }
}
