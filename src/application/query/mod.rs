// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).

pub mod language;

pub use language::{
    best_match, group_by_category, initial_language, resolve, system_preferences, LanguageGroups,
};
