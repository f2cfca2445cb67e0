// SPDX-License-Identifier: MPL-2.0
//! Language selection pane.
//!
//! Renders the resolved language list in three groups (primary, constructed,
//! alternative), one checkbox per language next to its flag. Only the current
//! language is checked; clicking any entry selects it. A tip at the bottom
//! links to the translation platform.

use crate::application::query::group_by_category;
use crate::domain::language::{Flag, FlagIcon, LanguageEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, checkbox, rule, svg, text, Column, Container, Row, Text};
use iced::{Element, Length};

/// Where translators are pointed to from the tip at the bottom of the pane.
const TRANSLATION_PLATFORM: &str = "Weblate";
pub const TRANSLATION_URL: &str = "https://weblate.insrt.uk/engage/revolt/?utm_source=widget";

const ESPERANTO_SVG: &str = include_str!("../../../assets/flags/esperanto.svg");
const TAMIL_NADU_SVG: &str = include_str!("../../../assets/flags/tamil_nadu.svg");
const TOKI_PONA_SVG: &str = include_str!("../../../assets/flags/toki_pona.svg");
const ENCHANTING_TABLE_SVG: &str = include_str!("../../../assets/flags/enchanting_table.svg");

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Registry entries with the system language promoted to the front.
    pub languages: &'a [&'static LanguageEntry],
    /// Registry key of the selected language.
    pub current: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(&'static str),
    OpenTranslations,
}

fn icon_svg(icon: FlagIcon) -> &'static str {
    match icon {
        FlagIcon::Esperanto => ESPERANTO_SVG,
        FlagIcon::TamilNadu => TAMIL_NADU_SVG,
        FlagIcon::TokiPona => TOKI_PONA_SVG,
        FlagIcon::EnchantingTable => ENCHANTING_TABLE_SVG,
    }
}

fn flag_view<'a>(flag: Flag) -> Element<'a, Message> {
    match flag {
        Flag::Emoji(emoji) => Text::new(emoji)
            .size(sizing::FLAG)
            .shaping(text::Shaping::Advanced)
            .into(),
        Flag::Icon(icon) => svg::Svg::new(svg::Handle::from_memory(icon_svg(icon).as_bytes()))
            .width(Length::Fixed(sizing::FLAG))
            .height(Length::Fixed(sizing::FLAG))
            .into(),
    }
}

/// Right-to-left languages put the flag after the name and hug the right edge.
fn flag_leads(entry: &LanguageEntry) -> bool {
    !entry.rtl
}

fn entry_view<'a>(entry: &'static LanguageEntry, current: Option<&str>) -> Element<'a, Message> {
    let selected = current == Some(entry.key);

    let toggle = checkbox(selected)
        .label(entry.display)
        .text_size(typography::BODY)
        .text_shaping(text::Shaping::Advanced)
        .on_toggle(move |_| Message::Select(entry.key));

    let row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    let (row, align) = if flag_leads(entry) {
        (row.push(flag_view(entry.flag)).push(toggle), Horizontal::Left)
    } else {
        (row.push(toggle).push(flag_view(entry.flag)), Horizontal::Right)
    };

    Container::new(row)
        .width(Length::Fixed(sizing::LANGUAGE_CELL_WIDTH))
        .align_x(align)
        .into()
}

fn group_view<'a>(
    entries: &[&'static LanguageEntry],
    current: Option<&str>,
) -> Element<'a, Message> {
    Row::with_children(entries.iter().map(|entry| entry_view(entry, current)))
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

fn heading<'a>(text: String) -> Element<'a, Message> {
    Text::new(text).size(typography::TITLE_SM).into()
}

fn translation_tip<'a>(i18n: &I18n) -> Element<'a, Message> {
    let link = button(
        Text::new(i18n.tr_with_args("settings-language-tip-link", &[("name", TRANSLATION_PLATFORM)]))
            .size(typography::CAPTION),
    )
    .padding(0)
    .style(button::text)
    .on_press(Message::OpenTranslations);

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("settings-language-tip")).size(typography::CAPTION))
        .push(link)
        .into()
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let groups = group_by_category(ctx.languages);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(heading(ctx.i18n.tr("settings-language-select")))
        .push(group_view(&groups.primary, ctx.current));

    if !groups.constructed.is_empty() {
        column = column
            .push(heading(ctx.i18n.tr("settings-language-const")))
            .push(group_view(&groups.constructed, ctx.current));
    }
    if !groups.alternative.is_empty() {
        column = column
            .push(heading(ctx.i18n.tr("settings-language-other")))
            .push(group_view(&groups.alternative, ctx.current));
    }

    column
        .push(rule::horizontal(1))
        .push(translation_tip(ctx.i18n))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{find, LANGUAGES};

    #[test]
    fn every_icon_flag_has_bundled_svg() {
        for icon in [
            FlagIcon::Esperanto,
            FlagIcon::TamilNadu,
            FlagIcon::TokiPona,
            FlagIcon::EnchantingTable,
        ] {
            let source = icon_svg(icon);
            assert!(source.trim_start().starts_with("<svg"), "{icon:?}");
            assert!(source.trim_end().ends_with("</svg>"), "{icon:?}");
        }
    }

    #[test]
    fn registry_icons_resolve_to_distinct_images() {
        let icons: Vec<&str> = LANGUAGES
            .iter()
            .filter_map(|entry| match entry.flag {
                Flag::Icon(icon) => Some(icon_svg(icon)),
                Flag::Emoji(_) => None,
            })
            .collect();
        assert_eq!(icons.len(), 4);
        for (i, a) in icons.iter().enumerate() {
            assert!(icons[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn right_to_left_entries_trail_with_flag() {
        assert!(!flag_leads(find("ar").unwrap()));
        assert!(!flag_leads(find("he").unwrap()));
        assert!(flag_leads(find("fr").unwrap()));
    }

    #[test]
    fn tip_link_names_the_platform() {
        let i18n = I18n::default();
        let link = i18n.tr_with_args("settings-language-tip-link", &[("name", TRANSLATION_PLATFORM)]);
        assert!(link.contains(TRANSLATION_PLATFORM));
        assert!(TRANSLATION_URL.starts_with("https://"));
    }

    #[test]
    fn view_renders_every_group() {
        let i18n = I18n::default();
        let languages: Vec<&'static LanguageEntry> = LANGUAGES.iter().collect();
        let _element = view(ViewContext {
            i18n: &i18n,
            languages: &languages,
            current: Some("en"),
        });
    }
}
