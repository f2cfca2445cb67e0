// SPDX-License-Identifier: MPL-2.0
//! Chat backend port for push registration.

use crate::domain::notifications::WebPushSubscription;
use crate::error::PushError;
use async_trait::async_trait;

#[async_trait]
pub trait PushBackend: Send + Sync {
    /// Returns the server's push key (URL-safe base64).
    async fn server_key(&self) -> Result<String, PushError>;

    /// `POST /push/subscribe`
    async fn subscribe(&self, subscription: &WebPushSubscription) -> Result<(), PushError>;

    /// `POST /push/unsubscribe`
    async fn unsubscribe(&self) -> Result<(), PushError>;
}
