// SPDX-License-Identifier: MPL-2.0
//! Observable settings store.
//!
//! The store owns the current [`Config`] snapshot. Writes go through
//! [`SettingsStore::set`], which notifies every subscriber and persists the
//! snapshot when the store was created with a file path. Inside a tokio
//! runtime the file is written on the blocking pool; each write saves the
//! newest snapshot, so the file never ends up older than the store. Handles
//! are cheap to clone and can be moved into async tasks.

use crate::config::{self, Config};
use crate::domain::notifications::{NotificationSettings, PermissionState, SoundId};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// A single write to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// Registry key of the current language.
    Language(String),
    DesktopNotifications(bool),
    PushNotifications(bool),
    NotificationPermission(PermissionState),
    Sound(SoundId, bool),
}

impl Setting {
    /// Applies the write, returning whether the snapshot changed.
    fn apply(self, config: &mut Config) -> bool {
        match self {
            Setting::Language(key) => {
                if config.general.language.as_deref() == Some(key.as_str()) {
                    return false;
                }
                config.general.language = Some(key);
                true
            }
            Setting::DesktopNotifications(enabled) => {
                replace(&mut config.notifications.desktop, enabled)
            }
            Setting::PushNotifications(enabled) => replace(&mut config.notifications.push, enabled),
            Setting::NotificationPermission(state) => {
                replace(&mut config.notifications.permission, state)
            }
            Setting::Sound(id, enabled) => config.notifications.sounds.set_enabled(id, enabled),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    sender: Arc<watch::Sender<Config>>,
    path: Option<Arc<PathBuf>>,
    // Held while the file is written.
    writer: Arc<Mutex<()>>,
}

impl SettingsStore {
    /// Creates a store that lives only in memory.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let (sender, _) = watch::channel(config);
        Self {
            sender: Arc::new(sender),
            path: None,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a store that writes every change to `path`.
    #[must_use]
    pub fn persistent(config: Config, path: PathBuf) -> Self {
        let mut store = Self::new(config);
        store.path = Some(Arc::new(path));
        store
    }

    /// Returns a copy of the current snapshot.
    #[must_use]
    pub fn get(&self) -> Config {
        self.sender.borrow().clone()
    }

    #[must_use]
    pub fn notifications(&self) -> NotificationSettings {
        self.sender.borrow().notifications.flags()
    }

    /// Returns a receiver that observes every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Config> {
        self.sender.subscribe()
    }

    /// Writes a setting. Subscribers are only notified when the value changed.
    pub fn set(&self, setting: Setting) -> bool {
        tracing::debug!(?setting, "Updating setting");
        let changed = self.sender.send_if_modified(|config| setting.apply(config));
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        let Some(path) = self.path.clone() else {
            return;
        };
        let sender = Arc::clone(&self.sender);
        let writer = Arc::clone(&self.writer);
        let write = move || write_latest(&sender, &path, &writer);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(write);
            }
            Err(_) => write(),
        }
    }
}

fn write_latest(sender: &watch::Sender<Config>, path: &Path, writer: &Mutex<()>) {
    let _guard = writer.lock().unwrap_or_else(PoisonError::into_inner);
    let snapshot = sender.borrow().clone();
    if let Err(error) = config::save_to_path(&snapshot, path) {
        tracing::error!(path = %path.display(), %error, "Failed to save config");
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
