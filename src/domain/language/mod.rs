// SPDX-License-Identifier: MPL-2.0
//! Language domain types.
//!
//! A [`LanguageEntry`] describes one selectable UI language. Entries are
//! declared once in [`registry::LANGUAGES`] and never mutated.

pub mod registry;

pub use registry::{find, LANGUAGES};

/// Display bucket of a language in the selection pane.
///
/// Entries without a category are primary languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCategory {
    /// Constructed or fictional language (`"const"`).
    Constructed,
    /// Alternative or joke dialect of another language (`"alt"`).
    Alternative,
}

/// Bundled image used in place of an emoji flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagIcon {
    Esperanto,
    TamilNadu,
    TokiPona,
    EnchantingTable,
}

/// Visual marker rendered next to a language name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Emoji(&'static str),
    Icon(FlagIcon),
}

/// One entry of the language registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Locale tag used as the registry key (e.g. `en`, `pt_BR`).
    pub key: &'static str,
    /// Native display name.
    pub display: &'static str,
    pub flag: Flag,
    /// Tag of the string catalog for this language.
    pub i18n: &'static str,
    pub category: Option<LanguageCategory>,
    /// Whether the language is written right-to-left.
    pub rtl: bool,
}

impl LanguageEntry {
    /// Declares a primary language whose catalog tag equals its key.
    #[must_use]
    pub const fn new(key: &'static str, display: &'static str, emoji: &'static str) -> Self {
        Self {
            key,
            display,
            flag: Flag::Emoji(emoji),
            i18n: key,
            category: None,
            rtl: false,
        }
    }

    #[must_use]
    pub const fn with_i18n(mut self, i18n: &'static str) -> Self {
        self.i18n = i18n;
        self
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: FlagIcon) -> Self {
        self.flag = Flag::Icon(icon);
        self
    }

    #[must_use]
    pub const fn constructed(mut self) -> Self {
        self.category = Some(LanguageCategory::Constructed);
        self
    }

    #[must_use]
    pub const fn alternative(mut self) -> Self {
        self.category = Some(LanguageCategory::Alternative);
        self
    }

    #[must_use]
    pub const fn right_to_left(mut self) -> Self {
        self.rtl = true;
        self
    }
}
