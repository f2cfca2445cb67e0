// SPDX-License-Identifier: MPL-2.0
//! Preferred-language resolution for the language selection pane.
//!
//! The pane lists the registry in declared order, except that the entry
//! best matching the user's system languages is moved to the top. Only one
//! entry ever moves.
//!
//! Matching runs in two passes over the preference list:
//!
//! 1. **Exact**: a preference matches a key when both are equal once `_` and
//!    `-` are treated as the same separator (ASCII case-insensitive).
//! 2. **Base tag**: only if no preference matched exactly, each preference is
//!    cut at its first separator and the base is compared with the keys.
//!
//! The first preference that matches in a pass wins, so an exact match for a
//! lower-priority preference still beats a base-tag match for a higher one.

use crate::config::DEFAULT_LANGUAGE;
use crate::domain::language::{self, LanguageCategory, LanguageEntry, LANGUAGES};

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn base_tag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn position_of(registry: &[LanguageEntry], tag: &str) -> Option<usize> {
    if tag.is_empty() {
        return None;
    }
    registry.iter().position(|entry| normalize(entry.key) == tag)
}

/// Returns the registry index of the entry best matching `preferences`.
pub fn best_match<S: AsRef<str>>(registry: &[LanguageEntry], preferences: &[S]) -> Option<usize> {
    preferences
        .iter()
        .find_map(|preference| position_of(registry, &normalize(preference.as_ref())))
        .or_else(|| {
            preferences
                .iter()
                .find_map(|preference| position_of(registry, &base_tag(preference.as_ref())))
        })
}

/// Orders the registry for display, promoting the best match to index 0.
///
/// Without a match (or without preferences) the declared order is returned.
pub fn resolve<'a, S: AsRef<str>>(
    registry: &'a [LanguageEntry],
    preferences: &[S],
) -> Vec<&'a LanguageEntry> {
    let mut ordered: Vec<&LanguageEntry> = registry.iter().collect();
    if let Some(index) = best_match(registry, preferences) {
        let preferred = ordered.remove(index);
        ordered.insert(0, preferred);
    }
    ordered
}

/// Resolved languages split into the three display buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGroups<'a> {
    pub primary: Vec<&'a LanguageEntry>,
    pub constructed: Vec<&'a LanguageEntry>,
    pub alternative: Vec<&'a LanguageEntry>,
}

/// Partitions resolved entries by category, preserving their order.
#[must_use]
pub fn group_by_category<'a>(resolved: &[&'a LanguageEntry]) -> LanguageGroups<'a> {
    let mut groups = LanguageGroups::default();
    for &entry in resolved {
        match entry.category {
            None => groups.primary.push(entry),
            Some(LanguageCategory::Constructed) => groups.constructed.push(entry),
            Some(LanguageCategory::Alternative) => groups.alternative.push(entry),
        }
    }
    groups
}

/// Reads the user's preferred locales from the operating system.
#[must_use]
pub fn system_preferences() -> Vec<String> {
    sys_locale::get_locales().collect()
}

/// Picks the language to start with.
///
/// Priority: CLI argument, then the persisted language, then the best match
/// for the system preferences, then the default language.
#[must_use]
pub fn initial_language<S: AsRef<str>>(
    cli_lang: Option<&str>,
    configured: Option<&str>,
    system: &[S],
) -> &'static LanguageEntry {
    if let Some(index) = cli_lang.and_then(|lang| best_match(LANGUAGES, &[lang])) {
        return &LANGUAGES[index];
    }

    if let Some(entry) = configured.and_then(language::find) {
        return entry;
    }

    if let Some(index) = best_match(LANGUAGES, system) {
        return &LANGUAGES[index];
    }

    language::find(DEFAULT_LANGUAGE).unwrap_or(&LANGUAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn entry(key: &'static str) -> LanguageEntry {
        LanguageEntry::new(key, key, "🏳️")
    }

    fn keys(resolved: &[&LanguageEntry]) -> Vec<&'static str> {
        resolved.iter().map(|e| e.key).collect()
    }

    #[test]
    fn base_tag_pass_promotes_regional_preference() {
        let registry = [entry("en"), entry("fr"), entry("es")];
        let resolved = resolve(&registry, &["fr-CA", "de"]);
        assert_eq!(keys(&resolved), vec!["fr", "en", "es"]);
    }

    #[test]
    fn separators_are_equivalent_in_exact_pass() {
        let registry = [entry("en"), entry("pt_BR")];
        let resolved = resolve(&registry, &["pt-BR"]);
        assert_eq!(keys(&resolved), vec!["pt_BR", "en"]);
    }

    #[test]
    fn exact_match_beats_earlier_base_tag_match() {
        let registry = [entry("en"), entry("de"), entry("pt_BR")];
        // "de-AT" only matches by base tag; "pt-BR" matches exactly.
        let resolved = resolve(&registry, &["de-AT", "pt-BR"]);
        assert_eq!(keys(&resolved), vec!["pt_BR", "en", "de"]);
    }

    #[test]
    fn first_exact_preference_wins() {
        let registry = [entry("en"), entry("fr"), entry("es")];
        let resolved = resolve(&registry, &["es", "fr"]);
        assert_eq!(keys(&resolved), vec!["es", "en", "fr"]);
    }

    #[test]
    fn no_match_keeps_declared_order() {
        let registry = [entry("en"), entry("fr"), entry("es")];
        let resolved = resolve(&registry, &["ja-JP", "ko"]);
        assert_eq!(keys(&resolved), vec!["en", "fr", "es"]);
    }

    #[test]
    fn empty_preferences_keep_declared_order() {
        let registry = [entry("en"), entry("fr")];
        let resolved = resolve::<&str>(&registry, &[]);
        assert_eq!(keys(&resolved), vec!["en", "fr"]);
    }

    #[test]
    fn already_first_entry_stays_put() {
        let registry = [entry("en"), entry("fr")];
        let resolved = resolve(&registry, &["en-GB"]);
        assert_eq!(keys(&resolved), vec!["en", "fr"]);
    }

    #[test]
    fn promotion_preserves_relative_order_of_others() {
        let registry = [entry("a"), entry("b"), entry("c"), entry("d"), entry("e")];
        let resolved = resolve(&registry, &["d"]);
        assert_eq!(keys(&resolved), vec!["d", "a", "b", "c", "e"]);
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let registry = [entry("en"), entry("zh_Hans")];
        let resolved = resolve(&registry, &[" ZH-hans "]);
        assert_eq!(keys(&resolved), vec!["zh_Hans", "en"]);
    }

    #[test]
    fn base_tag_does_not_match_regional_keys() {
        let registry = [entry("en"), entry("pt_BR"), entry("pt_PT")];
        let resolved = resolve(&registry, &["pt"]);
        assert_eq!(keys(&resolved), vec!["en", "pt_BR", "pt_PT"]);
    }

    #[test]
    fn underscore_preferences_are_cut_for_base_tag() {
        let registry = [entry("en"), entry("fr")];
        let resolved = resolve(&registry, &["fr_BE"]);
        assert_eq!(keys(&resolved), vec!["fr", "en"]);
    }

    #[test]
    fn grouping_preserves_resolved_order() {
        let registry = [
            entry("en"),
            entry("eo").constructed(),
            entry("fr"),
            entry("owo").alternative(),
            entry("tokipona").constructed(),
        ];
        let resolved = resolve(&registry, &["fr"]);
        let groups = group_by_category(&resolved);

        assert_eq!(keys(&groups.primary), vec!["fr", "en"]);
        assert_eq!(keys(&groups.constructed), vec!["eo", "tokipona"]);
        assert_eq!(keys(&groups.alternative), vec!["owo"]);
    }

    #[test]
    fn initial_language_prefers_cli_then_config_then_system() {
        assert_eq!(initial_language(Some("fr"), Some("de"), &["es"]).key, "fr");
        assert_eq!(initial_language(None, Some("de"), &["es"]).key, "de");
        assert_eq!(initial_language(None, None, &["es-MX"]).key, "es");
        assert_eq!(initial_language::<&str>(None, None, &[]).key, DEFAULT_LANGUAGE);
    }

    #[test]
    fn initial_language_skips_unknown_config_key() {
        assert_eq!(initial_language(None, Some("xx"), &["it"]).key, "it");
    }
}
