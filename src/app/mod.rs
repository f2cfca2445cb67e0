// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the settings screen.
//!
//! The `App` struct wires together localization, the settings store and the
//! notification controller, and translates pane events into asynchronous
//! tasks. Push results are applied through a [`PushToggle`] so that only the
//! latest operation can change what the push checkbox shows.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::notifications::{NotificationController, PushToggle};
use crate::application::port::PushBackend;
use crate::application::query::{initial_language, resolve, system_preferences};
use crate::application::store::SettingsStore;
use crate::config::{self, defaults::PUSH_SUBSCRIPTION_FILE, Config};
use crate::domain::language::{LanguageEntry, LANGUAGES};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    ApiClient, DesktopPermission, FilePushRegistry, OfflineBackend, PermissionPrompt,
};
use crate::ui::notifications;
use crate::ui::settings::Pane;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pane: Pane,
    store: SettingsStore,
    /// Copy of the store contents the view borrows from; refreshed after
    /// every update.
    snapshot: Config,
    /// Registry order with the system language promoted to the front.
    languages: Vec<&'static LanguageEntry>,
    language: &'static LanguageEntry,
    controller: NotificationController,
    permission: Arc<DesktopPermission>,
    push: PushToggle,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("pane", &self.pane)
            .field("language", &self.language.key)
            .field("push", &self.push)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn permission_prompt(i18n: &I18n) -> PermissionPrompt {
    PermissionPrompt {
        title: i18n.tr("permission-prompt-title"),
        description: i18n.tr("permission-prompt-description"),
    }
}

fn build_backend(config: &Config) -> (Arc<dyn PushBackend>, Option<String>) {
    match ApiClient::new(&config.server) {
        Ok(client) => (Arc::new(client), None),
        Err(error) => {
            tracing::error!(%error, "Push backend unavailable");
            (
                Arc::new(OfflineBackend::new(error.to_string())),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

impl App {
    /// Builds the application from an already loaded configuration.
    ///
    /// `store` must hold `config`; it is passed separately so tests can use an
    /// in-memory store.
    fn with_store(
        flags: &Flags,
        store: SettingsStore,
        data_dir: Option<std::path::PathBuf>,
    ) -> (Self, Option<String>) {
        let config = store.get();

        let system = system_preferences();
        tracing::debug!(?system, "System language preferences");
        let languages = resolve(LANGUAGES, &system);
        let language = initial_language(
            flags.lang.as_deref(),
            config.general.language.as_deref(),
            &system,
        );

        let mut i18n = I18n::default();
        i18n.set_language(language);

        let permission = Arc::new(DesktopPermission::new(
            config.notifications.supported,
            config.notifications.permission,
        ));
        permission.set_prompt(permission_prompt(&i18n));

        let registry = Arc::new(FilePushRegistry::new(
            data_dir.map(|dir| dir.join(PUSH_SUBSCRIPTION_FILE)),
            config.server.push_endpoint_base.clone(),
        ));
        let (backend, backend_warning) = build_backend(&config);

        let controller =
            NotificationController::new(permission.clone(), registry, backend, store.clone())
                .with_server_key(config.server.vapid.clone());

        let app = App {
            i18n,
            pane: Pane::default(),
            snapshot: config,
            store,
            languages,
            language,
            controller,
            permission,
            push: PushToggle::new(),
            notifications: notifications::Manager::new(),
        };
        (app, backend_warning)
    }

    /// Loads the configuration and starts the subscription lookup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let store = match config::config_path_with_override(None) {
            Some(path) => SettingsStore::persistent(config, path),
            None => SettingsStore::new(config),
        };

        let (mut app, backend_warning) = Self::with_store(&flags, store, paths::get_app_data_dir());
        tracing::info!(language = app.language.key, "Settings screen started");

        for key in [config_warning, backend_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = app.query_push();
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr(self.pane.i18n_key()),
            self.i18n.tr("window-title")
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle(self, message);
        self.snapshot = self.store.get();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            pane: self.pane,
            languages: &self.languages,
            language: self.language,
            snapshot: &self.snapshot,
            desktop_supported: self.controller.desktop_supported(),
            push: self.push.state(),
            notifications: &self.notifications,
        })
    }

    /// Starts a subscription lookup under a fresh ticket.
    fn query_push(&mut self) -> Task<Message> {
        let ticket = self.push.begin();
        let controller = self.controller.clone();
        Task::perform(
            async move { controller.query_push().await },
            move |state| Message::PushQueried { ticket, state },
        )
    }
}
