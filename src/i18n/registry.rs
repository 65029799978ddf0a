//! Language registry: the ordered set of language codes a dictionary supports.
//!
//! The canonical language (`"en"`) is always present and always first. Other
//! codes keep the order in which they were discovered, which gives every code
//! a stable positional index.

/// Code of the canonical (default) language.
pub const CANONICAL_LANGUAGE: &str = "en";

/// Ordered set of supported language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    codes: Vec<String>,
}

impl LanguageRegistry {
    /// Create a registry from discovered codes.
    ///
    /// The canonical language is inserted first. Duplicates and empty codes
    /// are dropped, keeping the first occurrence.
    pub fn new<I, S>(discovered: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = vec![CANONICAL_LANGUAGE.to_string()];
        for code in discovered {
            let code = code.as_ref();
            if !code.is_empty() && !codes.iter().any(|c| c == code) {
                codes.push(code.to_string());
            }
        }
        Self { codes }
    }

    /// Registry holding only the canonical language.
    pub fn canonical_only() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    /// The canonical language code.
    pub fn canonical(&self) -> &str {
        CANONICAL_LANGUAGE
    }

    /// Check if a language code is supported.
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Positional index of a language code.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| c == code)
    }

    /// Language code at a positional index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    /// All codes in discovery order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Codes other than the canonical one.
    pub fn translated(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().skip(1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false`: the canonical language is always registered.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::canonical_only()
    }
}
