//! Dictionary construction and lookup.
//!
//! A dictionary is built once from an ordered list of [`Field`]s. Each field
//! contributes one [`Entry`] whose key is the `snake_case` form of the field
//! name and whose canonical value is the same name split into spaced words.
//! Other languages come from the field's annotation tags.

use crate::i18n::case::{snake_case, snake_case_with};
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::strings::{Word, BUILTIN_FIELDS};
use crate::i18n::tags::{parse_tags, tag_pairs};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// A dictionary field declaration: a symbolic name plus its raw annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Declared identifier, e.g. `"NotSupported"`
    pub name: &'a str,

    /// Raw annotation, e.g. `es:"no soportado"`
    pub tags: &'a str,
}

impl<'a> Field<'a> {
    pub const fn new(name: &'a str, tags: &'a str) -> Self {
        Self { name, tags }
    }
}

/// One dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    values: BTreeMap<String, String>,
}

impl Entry {
    /// Canonical `snake_case` key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value recorded for a language, if any.
    pub fn value(&self, language: &str) -> Option<&str> {
        self.values
            .get(language)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value in the canonical language. Always present.
    pub fn canonical_value(&self) -> &str {
        self.value(crate::i18n::CANONICAL_LANGUAGE)
            .unwrap_or(self.key.as_str())
    }

    /// All recorded language → value pairs.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

/// Outcome of resolving a key for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key has a value in the requested language.
    Translated(&'a str),

    /// The key exists but has no value in the requested language; this is
    /// the canonical value.
    Fallback(&'a str),

    /// The key is not in the dictionary; this is the key itself.
    PassThrough(&'a str),
}

impl<'a> Lookup<'a> {
    /// The text to emit.
    pub fn text(self) -> &'a str {
        match self {
            Lookup::Translated(text) | Lookup::Fallback(text) | Lookup::PassThrough(text) => text,
        }
    }
}

/// An immutable multi-language dictionary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    by_key: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    languages: LanguageRegistry,
}

/// Built-in dictionary (built lazily)
static BUILTIN: OnceLock<Arc<Dictionary>> = OnceLock::new();

impl Dictionary {
    /// Build a dictionary from field declarations.
    ///
    /// The supported languages are the tag keys of the first field, in order,
    /// plus the canonical language. Malformed annotations never fail the
    /// build: unparseable fragments are skipped and the affected languages
    /// fall back to the canonical value at lookup time.
    pub fn build(fields: &[Field<'_>]) -> Self {
        let languages = match fields.first() {
            Some(first) => LanguageRegistry::new(tag_pairs(first.tags).map(|(code, _)| code)),
            None => LanguageRegistry::canonical_only(),
        };

        let mut entries = Vec::with_capacity(fields.len());
        let mut by_key = HashMap::with_capacity(fields.len());
        let mut by_name = HashMap::with_capacity(fields.len());

        for field in fields {
            if field.name.is_empty() {
                warn!("Dropping field with an empty name (tags: {:?})", field.tags);
                continue;
            }

            let key = snake_case(field.name);
            if by_key.contains_key(&key) {
                warn!(
                    "Dropping field '{}': key '{}' is already defined",
                    field.name, key
                );
                continue;
            }

            let mut values = BTreeMap::new();
            values.insert(
                languages.canonical().to_string(),
                snake_case_with(field.name, " "),
            );

            let tags = parse_tags(field.tags);
            for code in languages.translated() {
                if let Some(value) = tags.get(code).filter(|v| !v.is_empty()) {
                    values.insert(code.to_string(), value.clone());
                }
            }

            let index = entries.len();
            by_key.insert(key.clone(), index);
            by_name.insert(field.name.to_string(), index);
            entries.push(Entry { key, values });
        }

        debug!(
            "Built dictionary with {} entries in {} languages: {:?}",
            entries.len(),
            languages.len(),
            languages.codes()
        );

        Self {
            entries,
            by_key,
            by_name,
            languages,
        }
    }

    /// The built-in dictionary of common words.
    ///
    /// Built on first call; later calls share the same immutable table.
    pub fn builtin() -> Arc<Dictionary> {
        BUILTIN
            .get_or_init(|| Arc::new(Dictionary::build(BUILTIN_FIELDS)))
            .clone()
    }

    /// Supported languages.
    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry for a canonical key.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.by_key.get(key).and_then(|&i| self.entries.get(i))
    }

    /// Canonical key of a built-in word, if this dictionary declares it.
    pub fn key_of(&self, word: Word) -> Option<&str> {
        self.by_name
            .get(word.name())
            .and_then(|&i| self.entries.get(i))
            .map(Entry::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a key in a language.
    ///
    /// Returns the value for `language` when present and non-empty, else the
    /// canonical value, else (for unknown keys) the key itself.
    pub fn resolve<'a>(&'a self, key: &'a str, language: &str) -> Lookup<'a> {
        match self.entry(key) {
            Some(entry) => match entry.value(language) {
                Some(value) => Lookup::Translated(value),
                None => Lookup::Fallback(entry.canonical_value()),
            },
            None => Lookup::PassThrough(key),
        }
    }

    /// Shorthand for `resolve(key, language).text()`.
    pub fn lookup<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        self.resolve(key, language).text()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::build(&[])
    }
}
