// SPDX-License-Identifier: MPL-2.0
use crate::config::defaults::FALLBACK_LOCALE;
use crate::domain::language::LanguageEntry;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded catalog and selects the one closest to `tag`.
    pub fn new(tag: &str) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "Skipping catalog with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            if let Some(bundle) = build_bundle(&locale, content.data.as_ref()) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap_or_default();
        let current_locale = match_locale(tag, &available_locales)
            .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches to the catalog of a registry entry, or the fallback catalog
    /// when the entry has none.
    pub fn set_language(&mut self, entry: &LanguageEntry) {
        let locale = match_locale(entry.i18n, &self.available_locales)
            .unwrap_or_else(|| self.fallback_locale.clone());
        tracing::debug!(language = entry.key, %locale, "Switching UI catalog");
        self.current_locale = locale;
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.fallback_locale] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(locale: &LanguageIdentifier, data: &[u8]) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, count = errors.len(), "Failed to parse catalog");
            return None;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Bidi isolation marks end up as visible glyphs in iced text widgets.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, count = errors.len(), "Failed to load catalog");
        return None;
    }
    Some(bundle)
}

/// Finds the catalog for a catalog tag such as `pt_BR` or `en`.
///
/// Exact matches win; otherwise the first catalog sharing the language
/// subtag is used.
fn match_locale(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let wanted: LanguageIdentifier = tag.trim().replace('_', "-").parse().ok()?;

    if let Some(exact) = available.iter().find(|locale| **locale == wanted) {
        return Some(exact.clone());
    }
    available
        .iter()
        .find(|locale| locale.language == wanted.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::find;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn match_locale_prefers_exact_tag() {
        let available = locales(&["en-US", "pt-BR", "pt-PT"]);
        assert_eq!(
            match_locale("pt_PT", &available),
            Some("pt-PT".parse().unwrap())
        );
    }

    #[test]
    fn match_locale_falls_back_to_language_subtag() {
        let available = locales(&["en-US", "fr"]);
        assert_eq!(match_locale("en", &available), Some("en-US".parse().unwrap()));
        assert_eq!(match_locale("fr_CA", &available), Some("fr".parse().unwrap()));
        assert_eq!(match_locale("de", &available), None);
    }

    #[test]
    fn match_locale_rejects_unparsable_tags() {
        let available = locales(&["en-US"]);
        assert_eq!(match_locale("enchantment", &available), None);
    }

    #[test]
    fn default_uses_fallback_catalog() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), FALLBACK_LOCALE);
        assert_eq!(i18n.tr("settings-language-select"), "Select your language");
    }

    #[test]
    fn switching_language_changes_strings() {
        let mut i18n = I18n::default();
        i18n.set_language(find("fr").unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_ne!(i18n.tr("settings-language-select"), "Select your language");
    }

    #[test]
    fn language_without_catalog_uses_fallback() {
        let mut i18n = I18n::new("fr");
        i18n.set_language(find("enchantment").unwrap());
        assert_eq!(i18n.current_locale().to_string(), FALLBACK_LOCALE);
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("does-not-exist"), "MISSING: does-not-exist");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("settings-language-tip-link", &[("name", "Crowdin")]);
        assert!(text.contains("Crowdin"));
    }

    fn catalog_keys(locale: &str) -> Vec<String> {
        let file = Asset::get(&format!("{locale}.ftl")).unwrap();
        let source = std::str::from_utf8(file.data.as_ref()).unwrap();
        let mut keys: Vec<String> = source
            .lines()
            .filter(|line| !line.starts_with(['#', ' ']) && line.contains(" ="))
            .filter_map(|line| line.split(" =").next())
            .map(str::to_string)
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn every_catalog_defines_the_same_keys() {
        let reference = catalog_keys(FALLBACK_LOCALE);
        assert!(!reference.is_empty());
        for locale in I18n::default().available_locales {
            assert_eq!(catalog_keys(&locale.to_string()), reference, "{locale}");
        }
    }
}
