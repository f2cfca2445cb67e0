// SPDX-License-Identifier: MPL-2.0
//! In-memory port doubles shared by unit and integration tests.
//!
//! Each double records how it was called so tests can assert on the
//! interaction as well as on the resulting store state.

use crate::application::port::{NotificationPermission, PushBackend, PushRegistry};
use crate::application::push_key::encode_server_key;
use crate::domain::notifications::{
    PermissionState, PushSubscriptionRecord, SubscribeOptions, SubscriptionKeys,
    WebPushSubscription,
};
use crate::error::PushError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Valid URL-safe base64 server key used across tests.
pub const TEST_SERVER_KEY: &str = "BP-_AQ";

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

// =============================================================================
// Permission
// =============================================================================

/// Permission double that always gives the same answer.
#[derive(Debug)]
pub struct FakePermission {
    supported: bool,
    answer: PermissionState,
    requests: AtomicUsize,
}

impl FakePermission {
    #[must_use]
    pub fn answering(answer: PermissionState) -> Self {
        Self {
            supported: true,
            answer,
            requests: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn granted() -> Self {
        Self::answering(PermissionState::Granted)
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::answering(PermissionState::Denied)
        }
    }

    /// Number of prompts shown so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationPermission for FakePermission {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn request(&self) -> PermissionState {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Push registry double holding at most one subscription.
#[derive(Debug)]
pub struct FakeRegistry {
    registered: bool,
    current: Mutex<Option<PushSubscriptionRecord>>,
    last_options: Mutex<Option<SubscribeOptions>>,
    omit_keys: bool,
    fail_lookup: bool,
    fail_subscribe: bool,
    fail_unsubscribe: bool,
    subscribe_calls: AtomicUsize,
    unsubscribe_calls: AtomicUsize,
}

impl FakeRegistry {
    fn build(registered: bool, current: Option<PushSubscriptionRecord>) -> Self {
        Self {
            registered,
            current: Mutex::new(current),
            last_options: Mutex::new(None),
            omit_keys: false,
            fail_lookup: false,
            fail_subscribe: false,
            fail_unsubscribe: false,
            subscribe_calls: AtomicUsize::new(0),
            unsubscribe_calls: AtomicUsize::new(0),
        }
    }

    /// Registered, without a subscription.
    #[must_use]
    pub fn empty() -> Self {
        Self::build(true, None)
    }

    /// No background registration at all.
    #[must_use]
    pub fn unregistered() -> Self {
        Self::build(false, None)
    }

    /// Registered, with a subscription created for `server_key`.
    #[must_use]
    pub fn with_subscription(server_key: &str) -> Self {
        Self::build(true, Some(record("existing", server_key)))
    }

    /// New subscriptions come back without key material.
    #[must_use]
    pub fn without_keys(mut self) -> Self {
        self.omit_keys = true;
        self
    }

    #[must_use]
    pub fn failing_lookup(mut self) -> Self {
        self.fail_lookup = true;
        self
    }

    #[must_use]
    pub fn failing_subscribe(mut self) -> Self {
        self.fail_subscribe = true;
        self
    }

    #[must_use]
    pub fn failing_unsubscribe(mut self) -> Self {
        self.fail_unsubscribe = true;
        self
    }

    #[must_use]
    pub fn current(&self) -> Option<PushSubscriptionRecord> {
        lock(&self.current).clone()
    }

    #[must_use]
    pub fn last_options(&self) -> Option<SubscribeOptions> {
        lock(&self.last_options).clone()
    }

    #[must_use]
    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.load(Ordering::SeqCst)
    }
}

fn record(id: &str, server_key: &str) -> PushSubscriptionRecord {
    PushSubscriptionRecord {
        endpoint: format!("https://push.test/{id}"),
        keys: Some(SubscriptionKeys {
            p256dh: format!("p256dh-{id}"),
            auth: format!("auth-{id}"),
        }),
        server_key: server_key.to_string(),
    }
}

#[async_trait]
impl PushRegistry for FakeRegistry {
    async fn has_registration(&self) -> bool {
        self.registered
    }

    async fn get_subscription(&self) -> Result<Option<PushSubscriptionRecord>, PushError> {
        if self.fail_lookup {
            return Err(PushError::Subscription("lookup failed".into()));
        }
        Ok(self.current())
    }

    async fn subscribe(
        &self,
        options: SubscribeOptions,
    ) -> Result<PushSubscriptionRecord, PushError> {
        let call = self.subscribe_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_subscribe {
            return Err(PushError::Subscription("subscribe rejected".into()));
        }

        let mut created = record(
            &format!("sub-{call}"),
            &encode_server_key(&options.application_server_key),
        );
        if self.omit_keys {
            created.keys = None;
        }

        *lock(&self.last_options) = Some(options);
        *lock(&self.current) = Some(created.clone());
        Ok(created)
    }

    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<bool, PushError> {
        self.unsubscribe_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_unsubscribe {
            return Err(PushError::Subscription("unsubscribe rejected".into()));
        }

        let mut current = lock(&self.current);
        if current.as_ref().is_some_and(|c| c.endpoint == record.endpoint) {
            *current = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Chat server double.
#[derive(Debug)]
pub struct FakeBackend {
    key: Option<String>,
    fail: bool,
    subscriptions: Mutex<Vec<WebPushSubscription>>,
    unsubscribe_calls: AtomicUsize,
    unsubscribed: Notify,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    /// Serves [`TEST_SERVER_KEY`] and accepts every registration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(TEST_SERVER_KEY)
    }

    #[must_use]
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            fail: false,
            subscriptions: Mutex::new(Vec::new()),
            unsubscribe_calls: AtomicUsize::new(0),
            unsubscribed: Notify::new(),
        }
    }

    /// A server that does not advertise a push key.
    #[must_use]
    pub fn without_key() -> Self {
        Self {
            key: None,
            ..Self::new()
        }
    }

    /// Registration endpoints answer with an error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Bodies received by `POST /push/subscribe`, in order.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<WebPushSubscription> {
        lock(&self.subscriptions).clone()
    }

    #[must_use]
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.load(Ordering::SeqCst)
    }

    /// Resolves once `POST /push/unsubscribe` has been called.
    pub async fn wait_for_unsubscribe(&self) {
        self.unsubscribed.notified().await;
    }
}

#[async_trait]
impl PushBackend for FakeBackend {
    async fn server_key(&self) -> Result<String, PushError> {
        self.key.clone().ok_or(PushError::MissingServerKey)
    }

    async fn subscribe(&self, subscription: &WebPushSubscription) -> Result<(), PushError> {
        lock(&self.subscriptions).push(subscription.clone());
        if self.fail {
            return Err(PushError::BackendNotify("503 Service Unavailable".into()));
        }
        Ok(())
    }

    async fn unsubscribe(&self) -> Result<(), PushError> {
        self.unsubscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.unsubscribed.notify_one();
        if self.fail {
            return Err(PushError::BackendNotify("503 Service Unavailable".into()));
        }
        Ok(())
    }
}
