//! Best-guess detection of the user's language.
//!
//! Detection never fails: when nothing usable is found the canonical language
//! is returned. Whether the detected code is actually supported is for the
//! translator to decide.

use crate::i18n::CANONICAL_LANGUAGE;

/// Environment variables that carry locale information, by priority.
pub const LANGUAGE_VARS: [&str; 4] = ["LANG", "LANGUAGE", "LC_ALL", "LC_MESSAGES"];

/// Detect the system language from the process environment.
///
/// Formats like `en_US.UTF-8`, `de-DE`, `pt_BR:pt:en` and `es` all reduce to
/// their lowercase primary language subtag.
pub fn system_language() -> String {
    language_from_vars(|name| std::env::var(name).ok())
}

/// Detect the language using a custom variable lookup.
pub fn language_from_vars<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    LANGUAGE_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .find_map(|value| primary_subtag(&value))
        .unwrap_or_else(|| CANONICAL_LANGUAGE.to_string())
}

/// Detect the language from a browser's preferences.
///
/// `language` is `navigator.language`, `languages` is `navigator.languages`.
/// The first two characters of the first available preference are used.
pub fn browser_language(language: Option<&str>, languages: &[&str]) -> String {
    language
        .into_iter()
        .chain(languages.first().copied())
        .find_map(|preference| {
            let code: String = preference.chars().take(2).collect();
            (code.chars().count() == 2).then_some(code)
        })
        .unwrap_or_else(|| CANONICAL_LANGUAGE.to_string())
}

/// Strip encoding and region: `en_US.UTF-8` → `en`.
fn primary_subtag(value: &str) -> Option<String> {
    let code = value
        .split('.')
        .next()?
        .split('_')
        .next()?
        .split('-')
        .next()?;

    (!code.is_empty()).then(|| code.to_lowercase())
}
