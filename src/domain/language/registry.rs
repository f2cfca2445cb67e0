// SPDX-License-Identifier: MPL-2.0
//! Static registry of selectable languages, in declared display order.

use super::{FlagIcon, LanguageEntry};

/// Every language offered in the selection pane.
pub static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry::new("en", "English (Traditional)", "🇬🇧"),
    LanguageEntry::new("ar", "عربي", "🇸🇦").right_to_left(),
    LanguageEntry::new("az", "Azərbaycan dili", "🇦🇿"),
    LanguageEntry::new("be", "Беларуская", "🇧🇾"),
    LanguageEntry::new("bg", "Български", "🇧🇬"),
    LanguageEntry::new("bn", "বাংলা", "🇧🇩"),
    LanguageEntry::new("ca", "Català", "🇪🇸"),
    LanguageEntry::new("cs", "Čeština", "🇨🇿"),
    LanguageEntry::new("da", "Dansk", "🇩🇰"),
    LanguageEntry::new("de", "Deutsch", "🇩🇪"),
    LanguageEntry::new("el", "Ελληνικά", "🇬🇷"),
    LanguageEntry::new("en_US", "English (Simplified)", "🇺🇸"),
    LanguageEntry::new("es", "Español", "🇪🇸"),
    LanguageEntry::new("et", "eesti", "🇪🇪"),
    LanguageEntry::new("fa", "فارسی", "🇮🇷").right_to_left(),
    LanguageEntry::new("fi", "suomi", "🇫🇮"),
    LanguageEntry::new("fil", "Filipino", "🇵🇭"),
    LanguageEntry::new("fr", "Français", "🇫🇷"),
    LanguageEntry::new("he", "עברית", "🇮🇱").right_to_left(),
    LanguageEntry::new("hi", "हिन्दी", "🇮🇳"),
    LanguageEntry::new("hr", "Hrvatski", "🇭🇷"),
    LanguageEntry::new("hu", "Magyar", "🇭🇺"),
    LanguageEntry::new("id", "bahasa Indonesia", "🇮🇩"),
    LanguageEntry::new("it", "Italiano", "🇮🇹"),
    LanguageEntry::new("ja", "日本語", "🇯🇵"),
    LanguageEntry::new("ko", "한국어", "🇰🇷"),
    LanguageEntry::new("lt", "Lietuvių", "🇱🇹"),
    LanguageEntry::new("lv", "Latviešu", "🇱🇻"),
    LanguageEntry::new("nb_NO", "Norsk bokmål", "🇳🇴"),
    LanguageEntry::new("nl", "Nederlands", "🇳🇱"),
    LanguageEntry::new("pl", "Polski", "🇵🇱"),
    LanguageEntry::new("pt_BR", "Português (do Brasil)", "🇧🇷"),
    LanguageEntry::new("pt_PT", "Português (Portugal)", "🇵🇹"),
    LanguageEntry::new("ro", "Română", "🇷🇴"),
    LanguageEntry::new("ru", "Русский", "🇷🇺"),
    LanguageEntry::new("sk", "Slovensky", "🇸🇰"),
    LanguageEntry::new("sl", "Slovenščina", "🇸🇮"),
    LanguageEntry::new("sr", "Српски", "🇷🇸"),
    LanguageEntry::new("sv", "Svenska", "🇸🇪"),
    LanguageEntry::new("ta", "தமிழ்", "🇮🇳").with_icon(FlagIcon::TamilNadu),
    LanguageEntry::new("th", "ไทย", "🇹🇭"),
    LanguageEntry::new("tr", "Türkçe", "🇹🇷"),
    LanguageEntry::new("uk", "Українська", "🇺🇦"),
    LanguageEntry::new("vi", "Tiếng Việt", "🇻🇳"),
    LanguageEntry::new("zh_Hans", "中文 (简体)", "🇨🇳"),
    LanguageEntry::new("zh_Hant", "中文 (繁體)", "🇹🇼"),
    LanguageEntry::new("eo", "Esperanto", "🟩")
        .with_icon(FlagIcon::Esperanto)
        .constructed(),
    LanguageEntry::new("tokipona", "Toki Pona", "🙂")
        .with_i18n("tokipona")
        .with_icon(FlagIcon::TokiPona)
        .constructed(),
    LanguageEntry::new("enchantment", "Enchantment Table", "🪄")
        .with_i18n("enchantment")
        .with_icon(FlagIcon::EnchantingTable)
        .constructed(),
    LanguageEntry::new("owo", "OwO", "🐱").with_i18n("owo").alternative(),
    LanguageEntry::new("pr", "Pirate", "🏴‍☠️").with_i18n("pr").alternative(),
    LanguageEntry::new("bottom", "Bottom", "🥺").with_i18n("bottom").alternative(),
    LanguageEntry::new("leet", "1337", "💾").with_i18n("leet").alternative(),
    LanguageEntry::new("piglatin", "Pig Latin", "🐖")
        .with_i18n("piglatin")
        .alternative(),
];

/// Looks up a registry entry by its exact key.
#[must_use]
pub fn find(key: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.key == key)
}
