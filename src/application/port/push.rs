// SPDX-License-Identifier: MPL-2.0
//! Push registration port.
//!
//! Models the background worker registration that owns the client's single
//! push subscription.

use crate::domain::notifications::{PushSubscriptionRecord, SubscribeOptions};
use crate::error::PushError;
use async_trait::async_trait;

#[async_trait]
pub trait PushRegistry: Send + Sync {
    /// Whether a background registration is installed.
    async fn has_registration(&self) -> bool;

    /// Returns the current subscription, if any.
    async fn get_subscription(&self) -> Result<Option<PushSubscriptionRecord>, PushError>;

    /// Creates a subscription for the given server key.
    async fn subscribe(
        &self,
        options: SubscribeOptions,
    ) -> Result<PushSubscriptionRecord, PushError>;

    /// Removes the subscription. Returns `false` if it no longer existed.
    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<bool, PushError>;
}
