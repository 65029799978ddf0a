use crate::locale;
use crate::translator::TranslatorOptions;
use anyhow::{ensure, Result};

/// Environment variable selecting the default language.
pub const LANGUAGE_ENV: &str = "TRANSLATOR_LANG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default language requested for the translator
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var(LANGUAGE_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                let value = value.trim().to_lowercase();
                ensure!(
                    value.chars().all(|c| c.is_ascii_alphabetic()),
                    "{} must be a language code like \"en\" or \"es\", got {:?}",
                    LANGUAGE_ENV,
                    value
                );
                value
            }
            // Detect from LANG and friends
            _ => locale::system_language(),
        };

        Ok(Self { default_language })
    }

    /// Translator options for this configuration.
    pub fn translator_options(&self) -> TranslatorOptions {
        TranslatorOptions::new().language(self.default_language.clone())
    }
}
