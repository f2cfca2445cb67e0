// SPDX-License-Identifier: MPL-2.0
//! Notification settings use cases.
//!
//! [`NotificationController`] drives the two notification toggles of the
//! settings pane and the per-sound flags:
//!
//! - **Desktop**: turning on asks the platform for permission first and is
//!   aborted on refusal; turning off only clears the stored preference.
//! - **Push**: mirrors whether the push registry holds a subscription.
//!   Turning on subscribes and registers the subscription with the backend;
//!   turning off unsubscribes and tells the backend without waiting for it.
//!
//! Push failures are logged and returned as [`PushError`]; callers keep the
//! toggle's previous value. Nothing here talks to the UI toolkit.

use crate::application::port::{NotificationPermission, PushBackend, PushRegistry};
use crate::application::push_key::{decode_server_key, same_key};
use crate::application::store::{Setting, SettingsStore};
use crate::domain::notifications::{
    PushSubscriptionRecord, SoundId, SubscribeOptions, WebPushSubscription,
};
use crate::error::PushError;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a desktop toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopOutcome {
    Enabled,
    Disabled,
    /// Permission was refused or dismissed; the preference stays off.
    Denied,
}

/// Result of a push toggle request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Enabled,
    Disabled,
    /// The subscription came back without key material; nothing was changed.
    MissingKeys,
    /// No background registration exists; nothing was attempted.
    Unavailable,
}

impl PushOutcome {
    /// The toggle value this outcome settles on, if it changes anything.
    #[must_use]
    pub fn resulting_state(self) -> Option<PushState> {
        match self {
            PushOutcome::Enabled => Some(PushState::On),
            PushOutcome::Disabled => Some(PushState::Off),
            PushOutcome::MissingKeys | PushOutcome::Unavailable => None,
        }
    }
}

// =============================================================================
// Push toggle state
// =============================================================================

/// Visible value of the push toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushState {
    /// The registry has not been queried yet.
    #[default]
    Unknown,
    Off,
    On,
}

impl PushState {
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            PushState::On
        } else {
            PushState::Off
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, PushState::Unknown)
    }

    /// Checkbox value; `Unknown` renders unchecked.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, PushState::On)
    }
}

/// Identifies one asynchronous push operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Push toggle value plus a freshness check for in-flight operations.
///
/// Every query or toggle takes a [`Ticket`]; only the result carrying the
/// latest ticket may change the state. Older results are dropped, so a slow
/// lookup can never overwrite a newer toggle.
#[derive(Debug, Default)]
pub struct PushToggle {
    state: PushState,
    latest: u64,
}

impl PushToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PushState {
        self.state
    }

    /// The control accepts input only once the initial lookup resolved.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.state.is_known()
    }

    /// Starts a new operation, invalidating all earlier tickets.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a result. Returns `false` and leaves the state untouched when
    /// the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, state: PushState) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(%ticket, latest = self.latest, "Dropping stale push result");
            return false;
        }
        self.state = state;
        true
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Drives the notification toggles through the injected ports.
///
/// Cheap to clone; clones share the same ports and store.
#[derive(Clone)]
pub struct NotificationController {
    permission: Arc<dyn NotificationPermission>,
    registry: Arc<dyn PushRegistry>,
    backend: Arc<dyn PushBackend>,
    store: SettingsStore,
    server_key_override: Option<String>,
}

impl fmt::Debug for NotificationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationController")
            .field("store", &self.store)
            .field("server_key_override", &self.server_key_override)
            .finish_non_exhaustive()
    }
}

impl NotificationController {
    #[must_use]
    pub fn new(
        permission: Arc<dyn NotificationPermission>,
        registry: Arc<dyn PushRegistry>,
        backend: Arc<dyn PushBackend>,
        store: SettingsStore,
    ) -> Self {
        Self {
            permission,
            registry,
            backend,
            store,
            server_key_override: None,
        }
    }

    /// Uses `key` instead of asking the backend for its push key.
    #[must_use]
    pub fn with_server_key(mut self, key: Option<String>) -> Self {
        self.server_key_override = key;
        self
    }

    #[must_use]
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    #[must_use]
    pub fn desktop_supported(&self) -> bool {
        self.permission.is_supported()
    }

    // -------------------------------------------------------------------------
    // Desktop
    // -------------------------------------------------------------------------

    /// Turns desktop notifications on or off.
    pub async fn set_desktop(&self, enabled: bool) -> DesktopOutcome {
        if !enabled {
            self.store.set(Setting::DesktopNotifications(false));
            return DesktopOutcome::Disabled;
        }

        let answer = self.permission.request().await;
        self.store.set(Setting::NotificationPermission(answer));

        if !answer.is_granted() {
            tracing::info!(?answer, "Desktop notification permission not granted");
            return DesktopOutcome::Denied;
        }

        self.store.set(Setting::DesktopNotifications(true));
        DesktopOutcome::Enabled
    }

    // -------------------------------------------------------------------------
    // Push
    // -------------------------------------------------------------------------

    /// Looks up whether a subscription exists and mirrors it into the store.
    ///
    /// A failed lookup is logged and reported as `Off` so the toggle becomes
    /// usable.
    pub async fn query_push(&self) -> PushState {
        let exists = if self.registry.has_registration().await {
            match self.registry.get_subscription().await {
                Ok(subscription) => subscription.is_some(),
                Err(error) => {
                    tracing::warn!(%error, "Failed to read push subscription");
                    false
                }
            }
        } else {
            false
        };

        self.store.set(Setting::PushNotifications(exists));
        PushState::from_enabled(exists)
    }

    /// Turns push notifications on or off.
    pub async fn set_push(&self, enabled: bool) -> Result<PushOutcome, PushError> {
        if !self.registry.has_registration().await {
            tracing::debug!("No push registration; ignoring push toggle");
            return Ok(PushOutcome::Unavailable);
        }

        let result = if enabled {
            self.enable_push().await
        } else {
            self.disable_push().await
        };

        if let Err(error) = &result {
            tracing::error!(%error, enabled, "Failed to change push subscription");
        }
        result
    }

    async fn server_key(&self) -> Result<String, PushError> {
        match &self.server_key_override {
            Some(key) => Ok(key.clone()),
            None => self.backend.server_key().await,
        }
    }

    async fn enable_push(&self) -> Result<PushOutcome, PushError> {
        let key = decode_server_key(&self.server_key().await?)?;

        let record = match self.registry.get_subscription().await? {
            Some(existing) if same_key(&existing.server_key, &key) => {
                tracing::debug!(endpoint = %existing.endpoint, "Reusing push subscription");
                existing
            }
            Some(stale) => {
                tracing::info!(endpoint = %stale.endpoint, "Replacing push subscription for a rotated server key");
                self.registry.unsubscribe(&stale).await?;
                self.registry
                    .subscribe(SubscribeOptions::user_visible(key))
                    .await?
            }
            None => {
                self.registry
                    .subscribe(SubscribeOptions::user_visible(key))
                    .await?
            }
        };

        let Some(body) = WebPushSubscription::from_record(&record) else {
            tracing::warn!(
                endpoint = %record.endpoint,
                "Push subscription has no key material; leaving push disabled"
            );
            return Ok(PushOutcome::MissingKeys);
        };

        if let Err(error) = self.backend.subscribe(&body).await {
            tracing::warn!(%error, "Failed to register push subscription with server");
        }

        self.store.set(Setting::PushNotifications(true));
        Ok(PushOutcome::Enabled)
    }

    async fn disable_push(&self) -> Result<PushOutcome, PushError> {
        if let Some(record) = self.registry.get_subscription().await? {
            self.unsubscribe_quietly(&record).await;
        }

        self.store.set(Setting::PushNotifications(false));

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            if let Err(error) = backend.unsubscribe().await {
                tracing::warn!(%error, "Failed to unregister push subscription with server");
            }
        });

        Ok(PushOutcome::Disabled)
    }

    async fn unsubscribe_quietly(&self, record: &PushSubscriptionRecord) {
        match self.registry.unsubscribe(record).await {
            Ok(true) => tracing::debug!(endpoint = %record.endpoint, "Unsubscribed from push"),
            Ok(false) => tracing::debug!(endpoint = %record.endpoint, "Push subscription was already gone"),
            Err(error) => tracing::warn!(%error, "Failed to unsubscribe from push"),
        }
    }

    // -------------------------------------------------------------------------
    // Sounds
    // -------------------------------------------------------------------------

    /// Writes one sound flag straight into the store.
    pub fn set_sound(&self, id: SoundId, enabled: bool) -> bool {
        self.store.set(Setting::Sound(id, enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::PermissionState;
    use crate::test_utils::{FakeBackend, FakePermission, FakeRegistry, TEST_SERVER_KEY};

    fn controller(
        permission: FakePermission,
        registry: FakeRegistry,
        backend: FakeBackend,
    ) -> (
        NotificationController,
        Arc<FakePermission>,
        Arc<FakeRegistry>,
        Arc<FakeBackend>,
    ) {
        let permission = Arc::new(permission);
        let registry = Arc::new(registry);
        let backend = Arc::new(backend);
        let controller = NotificationController::new(
            permission.clone(),
            registry.clone(),
            backend.clone(),
            SettingsStore::default(),
        );
        (controller, permission, registry, backend)
    }

    // -------------------------------------------------------------------------
    // PushToggle
    // -------------------------------------------------------------------------

    #[test]
    fn push_toggle_starts_unknown_and_disabled() {
        let toggle = PushToggle::new();
        assert_eq!(toggle.state(), PushState::Unknown);
        assert!(!toggle.is_interactive());
        assert!(!toggle.state().is_on());
    }

    #[test]
    fn push_toggle_applies_latest_result() {
        let mut toggle = PushToggle::new();
        let ticket = toggle.begin();
        assert!(toggle.resolve(ticket, PushState::On));
        assert_eq!(toggle.state(), PushState::On);
        assert!(toggle.is_interactive());
    }

    #[test]
    fn push_toggle_drops_stale_result() {
        let mut toggle = PushToggle::new();
        let lookup = toggle.begin();
        let user_toggle = toggle.begin();

        assert!(toggle.resolve(user_toggle, PushState::Off));
        assert!(!toggle.resolve(lookup, PushState::On));
        assert_eq!(toggle.state(), PushState::Off);
    }

    #[test]
    fn outcome_maps_to_state() {
        assert_eq!(PushOutcome::Enabled.resulting_state(), Some(PushState::On));
        assert_eq!(PushOutcome::Disabled.resulting_state(), Some(PushState::Off));
        assert_eq!(PushOutcome::MissingKeys.resulting_state(), None);
        assert_eq!(PushOutcome::Unavailable.resulting_state(), None);
    }

    // -------------------------------------------------------------------------
    // Desktop
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn desktop_on_with_permission_granted_persists_true() {
        let (controller, permission, _, _) = controller(
            FakePermission::answering(PermissionState::Granted),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_desktop(true).await, DesktopOutcome::Enabled);
        assert!(controller.store().notifications().desktop);
        assert_eq!(permission.requests(), 1);
        assert_eq!(
            controller.store().get().notifications.permission,
            PermissionState::Granted
        );
    }

    #[tokio::test]
    async fn desktop_on_with_permission_denied_stays_off() {
        let (controller, permission, _, _) = controller(
            FakePermission::answering(PermissionState::Denied),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_desktop(true).await, DesktopOutcome::Denied);
        assert!(!controller.store().notifications().desktop);
        assert_eq!(permission.requests(), 1);
    }

    #[tokio::test]
    async fn desktop_dismissed_prompt_counts_as_denied() {
        let (controller, _, _, _) = controller(
            FakePermission::answering(PermissionState::Default),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_desktop(true).await, DesktopOutcome::Denied);
        assert!(!controller.store().notifications().desktop);
    }

    #[tokio::test]
    async fn desktop_off_never_asks_permission() {
        let (controller, permission, _, _) = controller(
            FakePermission::answering(PermissionState::Granted),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );
        controller.set_desktop(true).await;

        assert_eq!(controller.set_desktop(false).await, DesktopOutcome::Disabled);
        assert!(!controller.store().notifications().desktop);
        assert_eq!(permission.requests(), 1);
    }

    // -------------------------------------------------------------------------
    // Push
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn query_reports_existing_subscription() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::with_subscription(TEST_SERVER_KEY),
            FakeBackend::new(),
        );

        assert_eq!(controller.query_push().await, PushState::On);
        assert!(controller.store().notifications().push);
    }

    #[tokio::test]
    async fn query_without_subscription_is_off() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );
        assert_eq!(controller.query_push().await, PushState::Off);
    }

    #[tokio::test]
    async fn query_failure_resolves_off() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty().failing_lookup(),
            FakeBackend::new(),
        );
        assert_eq!(controller.query_push().await, PushState::Off);
    }

    #[tokio::test]
    async fn enabling_push_subscribes_and_notifies_backend() {
        let (controller, _, registry, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::Enabled));
        assert!(controller.store().notifications().push);
        assert_eq!(registry.subscribe_calls(), 1);

        let registered = backend.subscriptions();
        assert_eq!(registered.len(), 1);
        let current = registry.current().expect("subscription stored");
        assert_eq!(registered[0].endpoint, current.endpoint);
    }

    #[tokio::test]
    async fn enabling_push_uses_user_visible_subscription_with_decoded_key() {
        let (controller, _, registry, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );
        controller.set_push(true).await.unwrap();

        let options = registry.last_options().expect("subscribe called");
        assert!(options.user_visible_only);
        assert_eq!(
            options.application_server_key,
            decode_server_key(TEST_SERVER_KEY).unwrap()
        );
    }

    #[tokio::test]
    async fn enabling_push_twice_reuses_subscription() {
        let (controller, _, registry, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::new(),
        );
        controller.set_push(true).await.unwrap();
        controller.set_push(true).await.unwrap();

        assert_eq!(registry.subscribe_calls(), 1);
        assert_eq!(backend.subscriptions().len(), 2);
    }

    #[tokio::test]
    async fn rotated_server_key_replaces_subscription() {
        let (controller, _, registry, _) = controller(
            FakePermission::granted(),
            FakeRegistry::with_subscription("AAAA"),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::Enabled));
        assert_eq!(registry.unsubscribe_calls(), 1);
        assert_eq!(registry.subscribe_calls(), 1);
        let current = registry.current().unwrap();
        assert!(same_key(
            &current.server_key,
            &decode_server_key(TEST_SERVER_KEY).unwrap()
        ));
    }

    #[tokio::test]
    async fn missing_key_material_leaves_push_off() {
        let (controller, _, _, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::empty().without_keys(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::MissingKeys));
        assert!(!controller.store().notifications().push);
        assert!(backend.subscriptions().is_empty());
    }

    #[tokio::test]
    async fn subscribe_failure_is_returned_and_state_unchanged() {
        let (controller, _, _, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::empty().failing_subscribe(),
            FakeBackend::new(),
        );

        let result = controller.set_push(true).await;
        assert!(matches!(result, Err(PushError::Subscription(_))));
        assert!(!controller.store().notifications().push);
        assert!(backend.subscriptions().is_empty());
    }

    #[tokio::test]
    async fn invalid_server_key_fails_before_subscribing() {
        let (controller, _, registry, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::with_key("***"),
        );

        let result = controller.set_push(true).await;
        assert!(matches!(result, Err(PushError::InvalidServerKey(_))));
        assert_eq!(registry.subscribe_calls(), 0);
    }

    #[tokio::test]
    async fn configured_server_key_skips_backend_lookup() {
        let (controller, _, registry, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::without_key(),
        );
        let controller = controller.with_server_key(Some(TEST_SERVER_KEY.to_string()));

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::Enabled));
        assert_eq!(registry.subscribe_calls(), 1);
    }

    #[tokio::test]
    async fn backend_failure_still_enables_push() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::empty(),
            FakeBackend::new().failing(),
        );

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::Enabled));
        assert!(controller.store().notifications().push);
    }

    #[tokio::test]
    async fn disabling_push_unsubscribes_and_notifies_backend() {
        let (controller, _, registry, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::with_subscription(TEST_SERVER_KEY),
            FakeBackend::new(),
        );
        controller.query_push().await;

        assert_eq!(controller.set_push(false).await, Ok(PushOutcome::Disabled));
        assert!(!controller.store().notifications().push);
        assert!(registry.current().is_none());

        backend.wait_for_unsubscribe().await;
        assert_eq!(backend.unsubscribe_calls(), 1);
    }

    #[tokio::test]
    async fn disabling_push_ignores_unsubscribe_failure() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::with_subscription(TEST_SERVER_KEY).failing_unsubscribe(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_push(false).await, Ok(PushOutcome::Disabled));
        assert!(!controller.store().notifications().push);
    }

    #[tokio::test]
    async fn disabling_push_with_failed_lookup_keeps_state() {
        let (controller, _, _, _) = controller(
            FakePermission::granted(),
            FakeRegistry::with_subscription(TEST_SERVER_KEY),
            FakeBackend::new(),
        );
        controller.query_push().await;

        let controller_failing = NotificationController::new(
            Arc::new(FakePermission::granted()),
            Arc::new(FakeRegistry::empty().failing_lookup()),
            Arc::new(FakeBackend::new()),
            controller.store().clone(),
        );

        let result = controller_failing.set_push(false).await;
        assert!(matches!(result, Err(PushError::Subscription(_))));
        assert!(controller.store().notifications().push);
    }

    #[tokio::test]
    async fn missing_registration_is_a_no_op() {
        let (controller, _, registry, backend) = controller(
            FakePermission::granted(),
            FakeRegistry::unregistered(),
            FakeBackend::new(),
        );

        assert_eq!(controller.set_push(true).await, Ok(PushOutcome::Unavailable));
        assert_eq!(registry.subscribe_calls(), 0);
        assert!(backend.subscriptions().is_empty());
        assert_eq!(controller.query_push().await, PushState::Off);
    }

    // -------------------------------------------------------------------------
    // Sounds
    // -------------------------------------------------------------------------

    #[test]
    fn sound_toggle_writes_through() {
        let controller = NotificationController::new(
            Arc::new(FakePermission::granted()),
            Arc::new(FakeRegistry::empty()),
            Arc::new(FakeBackend::new()),
            SettingsStore::default(),
        );

        assert!(controller.set_sound(SoundId::Outbound, true));
        assert!(controller
            .store()
            .get()
            .notifications
            .sounds
            .is_enabled(SoundId::Outbound));
        assert!(!controller.set_sound(SoundId::Outbound, true));
    }
}
