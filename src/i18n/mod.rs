//! Dictionary construction and lookup.
//!
//! This module turns a table of annotated fields into a multi-language
//! dictionary. Everything a [`Translator`](crate::Translator) reads is built
//! here, once.
//!
//! # Architecture
//!
//! - `case`: identifier → `snake_case` key and spaced display value
//! - `tags`: `key:"value"` annotation parsing
//! - `registry`: ordered set of supported language codes
//! - `dictionary`: the builder, entries and the lookup fallback rule
//! - `strings`: the built-in word list
//! - `validator`: ahead-of-time checks of a field table
//! - `metrics`: lookup outcome counters
//!
//! # Example
//!
//! ```rust
//! use tiny_translator::i18n::{Dictionary, Field};
//!
//! let dictionary = Dictionary::build(&[
//!     Field::new("Language", r#"es:"idioma""#),
//!     Field::new("NotSupported", r#"es:"no soportado""#),
//! ]);
//!
//! assert_eq!(dictionary.lookup("not_supported", "es"), "no soportado");
//! assert_eq!(dictionary.lookup("not_supported", "en"), "not supported");
//! assert_eq!(dictionary.lookup("missing", "es"), "missing");
//! ```

mod case;
mod dictionary;
mod metrics;
mod registry;
mod strings;
mod tags;
mod validator;

pub use case::{snake_case, snake_case_with, KEY_SEPARATOR};
pub use dictionary::{Dictionary, Entry, Field, Lookup};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageRegistry, CANONICAL_LANGUAGE};
pub use strings::{Word, BUILTIN_FIELDS};
pub use tags::{parse_tags, tag_pairs};
pub use validator::{DictionaryValidator, ValidationReport};
