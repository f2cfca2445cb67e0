// SPDX-License-Identifier: MPL-2.0
//! Chat server client implementing [`PushBackend`].
//!
//! Talks to three routes:
//!
//! - `GET /` returns the server configuration; its `vapid` field is the push key
//! - `POST /push/subscribe` registers a subscription
//! - `POST /push/unsubscribe` drops it
//!
//! Both POSTs carry the session token in the `X-Session-Token` header when one
//! is configured.

use crate::application::port::PushBackend;
use crate::config::defaults::{DEFAULT_REQUEST_TIMEOUT_SECS, SESSION_TOKEN_HEADER};
use crate::config::ServerConfig;
use crate::domain::notifications::WebPushSubscription;
use crate::error::{Error, PushError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const SUBSCRIBE_PATH: &str = "push/subscribe";
const UNSUBSCRIBE_PATH: &str = "push/unsubscribe";

/// Subset of the server configuration returned by `GET /`.
#[derive(Debug, Deserialize)]
struct ServerInfo {
    #[serde(default)]
    vapid: Option<String>,
}

/// HTTP adapter for the chat backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
    session_token: Option<String>,
}

impl ApiClient {
    /// Builds a client for the server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `api_url` is not an absolute URL and
    /// [`Error::Http`] when the HTTP client cannot be created.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut base = Url::parse(config.api_url.trim())
            .map_err(|e| Error::Config(format!("invalid api_url '{}': {e}", config.api_url)))?;

        // Url::join replaces the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("ChatSettings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base,
            session_token: config.session_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, PushError> {
        self.base
            .join(path)
            .map_err(|e| PushError::BackendNotify(e.to_string()))
    }

    fn post(&self, path: &str) -> std::result::Result<reqwest::RequestBuilder, PushError> {
        let mut request = self.client.post(self.endpoint(path)?);
        if let Some(token) = &self.session_token {
            request = request.header(SESSION_TOKEN_HEADER, token);
        }
        Ok(request)
    }

    async fn send(request: reqwest::RequestBuilder) -> std::result::Result<(), PushError> {
        let response = request.send().await.map_err(notify_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PushError::BackendNotify(format!("HTTP status: {status}")));
        }
        Ok(())
    }
}

fn notify_error(error: reqwest::Error) -> PushError {
    PushError::BackendNotify(error.to_string())
}

#[async_trait]
impl PushBackend for ApiClient {
    async fn server_key(&self) -> std::result::Result<String, PushError> {
        let response = self
            .client
            .get(self.base.clone())
            .send()
            .await
            .map_err(notify_error)?;

        if !response.status().is_success() {
            return Err(PushError::BackendNotify(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        let info: ServerInfo = response.json().await.map_err(notify_error)?;
        match info.vapid {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(PushError::MissingServerKey),
        }
    }

    async fn subscribe(
        &self,
        subscription: &WebPushSubscription,
    ) -> std::result::Result<(), PushError> {
        tracing::debug!(endpoint = %subscription.endpoint, "Registering push subscription");
        Self::send(self.post(SUBSCRIBE_PATH)?.json(subscription)).await
    }

    async fn unsubscribe(&self) -> std::result::Result<(), PushError> {
        tracing::debug!("Unregistering push subscription");
        Self::send(self.post(UNSUBSCRIBE_PATH)?).await
    }
}

/// Stand-in used when no usable server is configured. Every call fails with
/// the reason the client could not be built.
#[derive(Debug, Clone)]
pub struct OfflineBackend {
    reason: String,
}

impl OfflineBackend {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> PushError {
        PushError::BackendNotify(self.reason.clone())
    }
}

#[async_trait]
impl PushBackend for OfflineBackend {
    async fn server_key(&self) -> std::result::Result<String, PushError> {
        Err(self.error())
    }

    async fn subscribe(&self, _: &WebPushSubscription) -> std::result::Result<(), PushError> {
        Err(self.error())
    }

    async fn unsubscribe(&self) -> std::result::Result<(), PushError> {
        Err(self.error())
    }
}
