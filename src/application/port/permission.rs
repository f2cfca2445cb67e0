// SPDX-License-Identifier: MPL-2.0
//! Notification permission port.

use crate::domain::notifications::PermissionState;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationPermission: Send + Sync {
    /// Whether the platform can show desktop notifications at all.
    fn is_supported(&self) -> bool;

    /// Asks the user for permission. May suspend on an interactive prompt.
    ///
    /// A dismissed prompt is reported as [`PermissionState::Default`].
    async fn request(&self) -> PermissionState;
}
