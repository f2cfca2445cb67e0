// SPDX-License-Identifier: MPL-2.0
//! Push subscription value types.

use serde::{Deserialize, Serialize};

/// Raw bytes of the server's public key (VAPID application server key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationServerKey(Vec<u8>);

impl ApplicationServerKey {
    /// Wraps decoded key bytes. Returns `None` for an empty key.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Client key material of a push subscription, both URL-safe base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// P-256 public key of the client.
    pub p256dh: String,
    /// Shared authentication secret.
    pub auth: String,
}

/// Handle of an active push subscription.
///
/// A subscription without key material cannot be registered with the
/// backend; callers must check [`PushSubscriptionRecord::keys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscriptionRecord {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<SubscriptionKeys>,
    /// Server key the subscription was created for (URL-safe base64).
    pub server_key: String,
}

/// Options for creating a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeOptions {
    /// Every push must result in a user-visible notification.
    pub user_visible_only: bool,
    pub application_server_key: ApplicationServerKey,
}

impl SubscribeOptions {
    #[must_use]
    pub fn user_visible(application_server_key: ApplicationServerKey) -> Self {
        Self {
            user_visible_only: true,
            application_server_key,
        }
    }
}

/// Body of `POST /push/subscribe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPushSubscription {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

impl WebPushSubscription {
    /// Builds the registration body, or `None` when key material is absent.
    #[must_use]
    pub fn from_record(record: &PushSubscriptionRecord) -> Option<Self> {
        let keys = record.keys.as_ref()?;
        Some(Self {
            endpoint: record.endpoint.clone(),
            p256dh: keys.p256dh.clone(),
            auth: keys.auth.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keys: Option<SubscriptionKeys>) -> PushSubscriptionRecord {
        PushSubscriptionRecord {
            endpoint: "https://push.example/abc".into(),
            keys,
            server_key: "BKey".into(),
        }
    }

    #[test]
    fn empty_server_key_is_rejected() {
        assert!(ApplicationServerKey::from_bytes(Vec::new()).is_none());
        assert!(ApplicationServerKey::from_bytes(vec![4, 1]).is_some());
    }

    #[test]
    fn registration_body_requires_keys() {
        assert!(WebPushSubscription::from_record(&record(None)).is_none());

        let body = WebPushSubscription::from_record(&record(Some(SubscriptionKeys {
            p256dh: "pk".into(),
            auth: "secret".into(),
        })))
        .expect("keys present");
        assert_eq!(body.endpoint, "https://push.example/abc");
        assert_eq!(body.p256dh, "pk");
        assert_eq!(body.auth, "secret");
    }

    #[test]
    fn registration_body_serializes_flat() {
        let body = WebPushSubscription {
            endpoint: "e".into(),
            p256dh: "p".into(),
            auth: "a".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "endpoint": "e", "p256dh": "p", "auth": "a" })
        );
    }
}
