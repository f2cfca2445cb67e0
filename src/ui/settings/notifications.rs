// SPDX-License-Identifier: MPL-2.0
//! Notification settings pane.
//!
//! Two toggles (desktop, push) followed by one checkbox per sound. The
//! desktop checkbox is disabled when the platform cannot show notifications;
//! the push checkbox is disabled until the subscription lookup resolved.

use crate::application::notifications::PushState;
use crate::domain::notifications::{NotificationSettings, SoundId, SoundToggleList};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{checkbox, rule, Column, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: NotificationSettings,
    pub desktop_supported: bool,
    pub push: PushState,
    pub sounds: &'a SoundToggleList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    DesktopToggled(bool),
    PushToggled(bool),
    SoundToggled(SoundId, bool),
}

/// Checkbox with a caption underneath.
fn described<'a>(
    toggle: impl Into<Element<'a, Message>>,
    description: String,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(toggle)
        .push(Text::new(description).size(typography::CAPTION))
        .into()
}

fn desktop_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = checkbox(ctx.settings.desktop)
        .label(ctx.i18n.tr("settings-notifications-desktop"))
        .text_size(typography::BODY);

    if ctx.desktop_supported {
        described(
            toggle.on_toggle(Message::DesktopToggled),
            ctx.i18n.tr("settings-notifications-desktop-description"),
        )
    } else {
        described(
            toggle,
            ctx.i18n.tr("settings-notifications-desktop-unsupported"),
        )
    }
}

fn push_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = checkbox(ctx.push.is_on())
        .label(ctx.i18n.tr("settings-notifications-push"))
        .text_size(typography::BODY);

    let toggle = if ctx.push.is_known() {
        toggle.on_toggle(Message::PushToggled)
    } else {
        toggle
    };

    described(toggle, ctx.i18n.tr("settings-notifications-push-description"))
}

fn sounds_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).push(
        Text::new(ctx.i18n.tr("settings-notifications-sounds")).size(typography::TITLE_SM),
    );

    for sound in ctx.sounds.iter() {
        let id = sound.id;
        column = column.push(
            checkbox(sound.enabled)
                .label(ctx.i18n.tr(&id.i18n_key()))
                .text_size(typography::BODY)
                .on_toggle(move |enabled| Message::SoundToggled(id, enabled)),
        );
    }

    column.into()
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("settings-notifications-push-title")).size(typography::TITLE_SM))
        .push(desktop_toggle(&ctx))
        .push(push_toggle(&ctx))
        .push(rule::horizontal(1))
        .push(sounds_section(&ctx))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_while_push_is_unknown() {
        let i18n = I18n::default();
        let sounds = SoundToggleList::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            settings: NotificationSettings::default(),
            desktop_supported: false,
            push: PushState::Unknown,
            sounds: &sounds,
        });
    }

    #[test]
    fn every_sound_has_a_label() {
        let i18n = I18n::default();
        for id in SoundId::ALL {
            assert!(!i18n.tr(&id.i18n_key()).starts_with("MISSING"));
        }
    }
}
