// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The settings screen fills the window; toasts are stacked on top of it.

use super::Message;
use crate::application::notifications::PushState;
use crate::config::Config;
use crate::domain::language::LanguageEntry;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{self, Pane};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pane: Pane,
    pub languages: &'a [&'static LanguageEntry],
    pub language: &'static LanguageEntry,
    pub snapshot: &'a Config,
    pub desktop_supported: bool,
    pub push: PushState,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings_view = settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        pane: ctx.pane,
        languages: ctx.languages,
        current_language: Some(ctx.language.key),
        notifications: ctx.snapshot.notifications.flags(),
        desktop_supported: ctx.desktop_supported,
        push: ctx.push,
        sounds: &ctx.snapshot.notifications.sounds,
    })
    .map(Message::Settings);

    let content = Container::new(settings_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}
