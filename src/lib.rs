//! A compact translation helper.
//!
//! Builds a multi-language dictionary from annotated word declarations and
//! formats translated messages from mixed arguments.
//!
//! ```
//! use tiny_translator::{t, Translator, TranslatorOptions, Word};
//!
//! let tr = Translator::new(TranslatorOptions::new());
//! assert_eq!(t!(tr, Word::Language, "test", Word::NotSupported), "language test not supported");
//! assert_eq!(t!(tr, "es", Word::Language, "test", Word::NotSupported), "idioma test no soportado");
//! ```

pub mod arg;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod sync;
pub mod translator;

pub use arg::Arg;
pub use error::TranslateError;
pub use i18n::Word;
pub use translator::{Translator, TranslatorOptions};

/// Translate a list of arguments with a [`Translator`].
///
/// Each argument is converted with [`Arg::from`].
///
/// ```
/// use tiny_translator::{t, Translator, Word};
///
/// let tr = Translator::default();
/// assert_eq!(t!(tr, "es", Word::ZipCode, ':', 28001), "código postal: 28001");
/// ```
#[macro_export]
macro_rules! t {
    ($translator:expr $(, $arg:expr)* $(,)?) => {
        $translator.translate(&[$($crate::Arg::from($arg)),*])
    };
}
