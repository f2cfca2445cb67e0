// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Pane events become controller calls wrapped in `Task::perform`; their
//! results come back as messages and are applied here.

use super::{permission_prompt, App, Message};
use crate::application::notifications::{DesktopOutcome, PushOutcome, Ticket};
use crate::application::store::Setting;
use crate::domain::language;
use crate::error::PushError;
use crate::ui::notifications::Notification;
use crate::ui::settings::{self, Event};
use iced::Task;

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Settings(message) => handle_settings_event(app, settings::update(message)),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::PushQueried { ticket, state } => {
            app.push.resolve(ticket, state);
            Task::none()
        }
        Message::PushChanged { ticket, result } => {
            handle_push_result(app, ticket, result);
            Task::none()
        }
        Message::DesktopChanged(outcome) => {
            if outcome == DesktopOutcome::Denied {
                app.notifications
                    .push(Notification::error("notification-denied"));
            }
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_settings_event(app: &mut App, event: Event) -> Task<Message> {
    match event {
        Event::PaneSelected(pane) => {
            app.pane = pane;
            Task::none()
        }
        Event::LanguageSelected(key) => {
            select_language(app, key);
            Task::none()
        }
        Event::DesktopToggled(enabled) => {
            let controller = app.controller.clone();
            Task::perform(
                async move { controller.set_desktop(enabled).await },
                Message::DesktopChanged,
            )
        }
        Event::PushToggled(enabled) => {
            if !app.push.is_interactive() {
                return Task::none();
            }
            let ticket = app.push.begin();
            let controller = app.controller.clone();
            Task::perform(
                async move { controller.set_push(enabled).await },
                move |result| Message::PushChanged { ticket, result },
            )
        }
        Event::SoundToggled(id, enabled) => {
            app.controller.set_sound(id, enabled);
            Task::none()
        }
        Event::OpenUrl(url) => {
            open_url(url);
            Task::none()
        }
    }
}

/// Opens `url` in the system browser.
fn open_url(url: &str) {
    if let Err(error) = open::that(url) {
        tracing::warn!(url, %error, "Failed to open URL");
    }
}

fn select_language(app: &mut App, key: &str) {
    let Some(entry) = language::find(key) else {
        tracing::warn!(key, "Selected language is not in the registry");
        return;
    };

    app.language = entry;
    app.i18n.set_language(entry);
    app.permission.set_prompt(permission_prompt(&app.i18n));
    app.store.set(Setting::Language(entry.key.to_string()));
}

fn handle_push_result(
    app: &mut App,
    ticket: Ticket,
    result: Result<PushOutcome, PushError>,
) {
    // Failures were logged by the controller; the checkbox keeps its value.
    let Ok(outcome) = result else {
        return;
    };
    if let Some(state) = outcome.resulting_state() {
        app.push.resolve(ticket, state);
    }
}
