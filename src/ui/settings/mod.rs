// SPDX-License-Identifier: MPL-2.0
//! Settings screen: a pane list on the left, the selected pane on the right.
//!
//! Views are pure functions of a [`ViewContext`]; user input comes back as a
//! [`Message`] that [`update`] translates into an [`Event`] for the
//! application to act on.

pub mod languages;
pub mod notifications;

use crate::application::notifications::PushState;
use crate::domain::language::LanguageEntry;
use crate::domain::notifications::{NotificationSettings, SoundId, SoundToggleList};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Language,
    Notifications,
}

impl Pane {
    pub const ALL: [Pane; 2] = [Pane::Language, Pane::Notifications];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Pane::Language => "settings-tab-language",
            Pane::Notifications => "settings-tab-notifications",
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pane: Pane,
    pub languages: &'a [&'static LanguageEntry],
    pub current_language: Option<&'a str>,
    pub notifications: NotificationSettings,
    pub desktop_supported: bool,
    pub push: PushState,
    pub sounds: &'a SoundToggleList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectPane(Pane),
    Languages(languages::Message),
    Notifications(notifications::Message),
}

/// Intents propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PaneSelected(Pane),
    LanguageSelected(&'static str),
    DesktopToggled(bool),
    PushToggled(bool),
    SoundToggled(SoundId, bool),
    OpenUrl(&'static str),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectPane(pane) => Event::PaneSelected(pane),
        Message::Languages(languages::Message::Select(key)) => Event::LanguageSelected(key),
        Message::Languages(languages::Message::OpenTranslations) => {
            Event::OpenUrl(languages::TRANSLATION_URL)
        }
        Message::Notifications(message) => match message {
            notifications::Message::DesktopToggled(enabled) => Event::DesktopToggled(enabled),
            notifications::Message::PushToggled(enabled) => Event::PushToggled(enabled),
            notifications::Message::SoundToggled(id, enabled) => Event::SoundToggled(id, enabled),
        },
    }
}

fn pane_list<'a>(i18n: &'a I18n, selected: Pane) -> Element<'a, Message> {
    let buttons = Pane::ALL.into_iter().map(|pane| -> Element<'a, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if pane == selected {
            button::primary
        } else {
            button::text
        };
        button(Text::new(i18n.tr(pane.i18n_key())).size(typography::BODY))
            .width(Length::Fill)
            .style(style)
            .on_press(Message::SelectPane(pane))
            .into()
    });

    Column::with_children(buttons)
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::NAV_WIDTH))
        .into()
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.pane {
        Pane::Language => languages::view(languages::ViewContext {
            i18n: ctx.i18n,
            languages: ctx.languages,
            current: ctx.current_language,
        })
        .map(Message::Languages),
        Pane::Notifications => notifications::view(notifications::ViewContext {
            i18n: ctx.i18n,
            settings: ctx.notifications,
            desktop_supported: ctx.desktop_supported,
            push: ctx.push,
            sounds: ctx.sounds,
        })
        .map(Message::Notifications),
    };

    let title = Text::new(ctx.i18n.tr(ctx.pane.i18n_key())).size(typography::TITLE_LG);

    let pane = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::PANE_MAX_WIDTH)
        .push(title)
        .push(body);

    Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(pane_list(ctx.i18n, ctx.pane))
        .push(scrollable(Container::new(pane).width(Length::Fill)).height(Length::Fill))
        .into()
}
