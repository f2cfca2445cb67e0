// SPDX-License-Identifier: MPL-2.0
//! File-backed [`PushRegistry`].
//!
//! The desktop client has no browser service worker, so the single push
//! subscription is kept as a JSON file in the data directory. Subscribing
//! generates fresh P-256 key material and a random endpoint below the
//! configured endpoint base.

use crate::application::port::PushRegistry;
use crate::application::push_key::{encode_server_key, same_key};
use crate::domain::notifications::{PushSubscriptionRecord, SubscribeOptions, SubscriptionKeys};
use crate::error::PushError;
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const AUTH_SECRET_LEN: usize = 16;
const ENDPOINT_ID_LEN: usize = 16;

/// On-disk form of the subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSubscription {
    #[serde(flatten)]
    record: PushSubscriptionRecord,
    /// Client private key (URL-safe base64 scalar), needed to decrypt pushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    subscribed_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct FilePushRegistry {
    path: Option<PathBuf>,
    endpoint_base: String,
    // Serializes read-modify-write cycles on the file.
    lock: Mutex<()>,
}

impl FilePushRegistry {
    /// `path` is `None` when no data directory could be resolved; the
    /// registry then reports that no registration exists.
    #[must_use]
    pub fn new(path: Option<PathBuf>, endpoint_base: impl Into<String>) -> Self {
        Self {
            path,
            endpoint_base: endpoint_base.into(),
            lock: Mutex::new(()),
        }
    }

    fn require_path(&self) -> Result<&Path, PushError> {
        self.path.as_deref().ok_or(PushError::NoRegistration)
    }

    async fn read(&self) -> Result<Option<StoredSubscription>, PushError> {
        let path = self.require_path()?;
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PushError::Subscription(e.to_string())),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| PushError::Subscription(format!("{}: {e}", path.display())))
    }

    async fn write(&self, stored: &StoredSubscription) -> Result<(), PushError> {
        let path = self.require_path()?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PushError::Subscription(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(stored)
            .map_err(|e| PushError::Subscription(e.to_string()))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| PushError::Subscription(e.to_string()))
    }

    fn create(&self, options: &SubscribeOptions) -> StoredSubscription {
        let secret = SecretKey::random(&mut OsRng);
        let public = secret.public_key().to_encoded_point(false);

        let mut auth = [0u8; AUTH_SECRET_LEN];
        OsRng.fill_bytes(&mut auth);
        let mut id = [0u8; ENDPOINT_ID_LEN];
        OsRng.fill_bytes(&mut id);

        StoredSubscription {
            record: PushSubscriptionRecord {
                endpoint: format!(
                    "{}/{}",
                    self.endpoint_base.trim_end_matches('/'),
                    URL_SAFE_NO_PAD.encode(id)
                ),
                keys: Some(SubscriptionKeys {
                    p256dh: URL_SAFE_NO_PAD.encode(public.as_bytes()),
                    auth: URL_SAFE_NO_PAD.encode(auth),
                }),
                server_key: encode_server_key(&options.application_server_key),
            },
            private_key: Some(URL_SAFE_NO_PAD.encode(secret.to_bytes())),
            subscribed_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PushRegistry for FilePushRegistry {
    async fn has_registration(&self) -> bool {
        self.path.is_some()
    }

    async fn get_subscription(&self) -> Result<Option<PushSubscriptionRecord>, PushError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.map(|stored| stored.record))
    }

    async fn subscribe(
        &self,
        options: SubscribeOptions,
    ) -> Result<PushSubscriptionRecord, PushError> {
        let _guard = self.lock.lock().await;

        if let Some(existing) = self.read().await? {
            if same_key(&existing.record.server_key, &options.application_server_key) {
                return Ok(existing.record);
            }
        }

        let stored = self.create(&options);
        self.write(&stored).await?;
        tracing::info!(endpoint = %stored.record.endpoint, "Created push subscription");
        Ok(stored.record)
    }

    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<bool, PushError> {
        let _guard = self.lock.lock().await;

        let Some(existing) = self.read().await? else {
            return Ok(false);
        };
        if existing.record.endpoint != record.endpoint {
            return Ok(false);
        }

        let path = self.require_path()?;
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PushError::Subscription(e.to_string())),
        }
    }
}
