// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Localized UI string lookup.
//!
//! A flat key → string table per language, with `{{name}}` placeholder
//! interpolation. Missing keys are not an error: the key itself is
//! returned as a visible fallback so an untranslated string never takes
//! the application down.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod en;
mod tr;

use roster_domain::Language;

/// Looks up a UI string by key for the given language.
///
/// Missing keys return the key itself as a visible fallback.
#[must_use]
pub fn translate(language: Language, key: &str) -> String {
    lookup(language, key).map_or_else(|| key.to_string(), ToString::to_string)
}

/// Looks up a UI string and replaces `{{name}}` placeholders with the
/// given parameter values.
#[must_use]
pub fn translate_with(language: Language, key: &str, params: &[(&str, &str)]) -> String {
    let mut text: String = translate(language, key);
    for (name, value) in params {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let table: &[(&str, &str)] = match language {
        Language::En => en::TABLE,
        Language::Tr => tr::TABLE,
    };
    table
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, value)| *value)
}
