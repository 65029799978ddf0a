//! Dictionary quality validation.
//!
//! Building a dictionary never fails, so problems in the field table only
//! show up as missing translations at runtime. This module reports them
//! ahead of time.

use crate::i18n::case::snake_case;
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::tags::{parse_tags, tag_pairs};
use crate::i18n::Field;
use std::collections::HashMap;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that change which entries the dictionary contains
    pub errors: Vec<String>,

    /// Problems that only cause fallbacks to the canonical language
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary field tables.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate a field table the way `Dictionary::build` would read it.
    ///
    /// Errors:
    /// - fields with an empty name
    /// - fields whose key collides with an earlier field (they are dropped)
    ///
    /// Warnings:
    /// - fields without a value for a supported language
    /// - tags naming a language the dictionary does not support
    pub fn validate(fields: &[Field<'_>]) -> ValidationReport {
        let mut report = ValidationReport::new();

        let languages = match fields.first() {
            Some(first) => LanguageRegistry::new(tag_pairs(first.tags).map(|(code, _)| code)),
            None => return report,
        };

        let mut seen: HashMap<String, &str> = HashMap::new();

        for field in fields {
            if field.name.is_empty() {
                report.errors.push("Field with an empty name".to_string());
                continue;
            }

            let key = snake_case(field.name);
            if let Some(first) = seen.get(&key) {
                report.errors.push(format!(
                    "Key collision: '{}' and '{}' both map to '{}'",
                    first, field.name, key
                ));
                continue;
            }
            seen.insert(key, field.name);

            let tags = parse_tags(field.tags);

            let missing: Vec<&str> = languages
                .translated()
                .filter(|code| tags.get(*code).map_or(true, |v| v.is_empty()))
                .collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "'{}' has no translation for {:?}",
                    field.name, missing
                ));
            }

            let mut unknown: Vec<&str> = tags
                .keys()
                .map(String::as_str)
                .filter(|code| !languages.contains(code))
                .collect();
            unknown.sort_unstable();
            if !unknown.is_empty() {
                report.warnings.push(format!(
                    "'{}' has tags for unsupported languages {:?}",
                    field.name, unknown
                ));
            }
        }

        report
    }
}
