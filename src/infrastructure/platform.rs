// SPDX-License-Identifier: MPL-2.0
//! Desktop implementation of [`NotificationPermission`].
//!
//! Permission follows the browser model: the first request shows a native
//! yes/no dialog, and once the user answered, later requests return that
//! answer without prompting again. Closing the dialog leaves the state at
//! [`PermissionState::Default`].

use crate::application::port::NotificationPermission;
use crate::domain::notifications::PermissionState;
use async_trait::async_trait;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::sync::{Mutex, PoisonError};

/// Localized text of the permission dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPrompt {
    pub title: String,
    pub description: String,
}

impl Default for PermissionPrompt {
    fn default() -> Self {
        Self {
            title: "Desktop notifications".to_string(),
            description: "Allow this app to show desktop notifications?".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct DesktopPermission {
    supported: bool,
    state: Mutex<PermissionState>,
    prompt: Mutex<PermissionPrompt>,
}

impl DesktopPermission {
    /// `initial` is the answer remembered from a previous session.
    #[must_use]
    pub fn new(supported: bool, initial: PermissionState) -> Self {
        Self {
            supported,
            state: Mutex::new(initial),
            prompt: Mutex::new(PermissionPrompt::default()),
        }
    }

    /// Replaces the dialog text, e.g. after the UI language changed.
    pub fn set_prompt(&self, prompt: PermissionPrompt) {
        *self.prompt.lock().unwrap_or_else(PoisonError::into_inner) = prompt;
    }

    #[must_use]
    pub fn state(&self) -> PermissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remember(&self, answer: PermissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = answer;
    }
}

fn answer_from(result: &MessageDialogResult) -> PermissionState {
    match result {
        MessageDialogResult::Yes | MessageDialogResult::Ok => PermissionState::Granted,
        MessageDialogResult::No => PermissionState::Denied,
        _ => PermissionState::Default,
    }
}

#[async_trait]
impl NotificationPermission for DesktopPermission {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn request(&self) -> PermissionState {
        if !self.supported {
            return PermissionState::Denied;
        }

        let current = self.state();
        if current != PermissionState::Default {
            return current;
        }

        let prompt = self
            .prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let result = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(&prompt.title)
            .set_description(&prompt.description)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        let answer = answer_from(&result);
        tracing::debug!(?answer, "Notification permission prompt answered");
        if answer != PermissionState::Default {
            self.remember(answer);
        }
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_platform_denies_without_prompt() {
        let permission = DesktopPermission::new(false, PermissionState::Default);
        assert!(!permission.is_supported());
        assert_eq!(permission.request().await, PermissionState::Denied);
        assert_eq!(permission.state(), PermissionState::Default);
    }

    #[tokio::test]
    async fn remembered_answer_is_returned() {
        let granted = DesktopPermission::new(true, PermissionState::Granted);
        assert_eq!(granted.request().await, PermissionState::Granted);

        let denied = DesktopPermission::new(true, PermissionState::Denied);
        assert_eq!(denied.request().await, PermissionState::Denied);
    }

    #[test]
    fn dialog_buttons_map_to_states() {
        assert_eq!(answer_from(&MessageDialogResult::Yes), PermissionState::Granted);
        assert_eq!(answer_from(&MessageDialogResult::No), PermissionState::Denied);
        assert_eq!(answer_from(&MessageDialogResult::Cancel), PermissionState::Default);
    }

    #[test]
    fn prompt_text_can_be_replaced() {
        let permission = DesktopPermission::new(true, PermissionState::Default);
        let prompt = PermissionPrompt {
            title: "Notifications".into(),
            description: "Autoriser ?".into(),
        };
        permission.set_prompt(prompt.clone());
        assert_eq!(
            *permission.prompt.lock().unwrap(),
            prompt
        );
    }
}
