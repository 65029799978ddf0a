use thiserror::Error;

/// Errors produced by a [`Translator`](crate::Translator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The requested language is not in the dictionary's registry.
    ///
    /// `message` is already translated into the language that was active
    /// when the change was rejected.
    #[error("{message}")]
    UnsupportedLanguage { code: String, message: String },

    /// A translated failure message built with `Translator::err`.
    #[error("{0}")]
    Message(String),
}

impl TranslateError {
    /// The rendered message text.
    pub fn message(&self) -> &str {
        match self {
            TranslateError::UnsupportedLanguage { message, .. } => message,
            TranslateError::Message(message) => message,
        }
    }
}
