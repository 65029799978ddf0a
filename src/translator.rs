//! Translation engine.
//!
//! A [`Translator`] owns a built [`Dictionary`] plus the active default
//! language, and turns a list of [`Arg`]s into one space-separated,
//! translated line of text.
//!
//! # Example
//!
//! ```
//! use tiny_translator::{t, Translator, TranslatorOptions, Word};
//!
//! let tr = Translator::new(TranslatorOptions::new().language("es"));
//! assert_eq!(t!(tr, Word::Language, "test", Word::NotSupported), "idioma test no soportado");
//! assert_eq!(t!(tr, "en", Word::Language, ':', 2021), "language: 2021");
//! ```

use crate::arg::Arg;
use crate::error::TranslateError;
use crate::i18n::{Dictionary, Lookup, LookupMetrics, MetricsReport, Word, CANONICAL_LANGUAGE};
use crate::sync::{Lock, NoLock};
use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Construction options for a [`Translator`]. Every option is independent
/// and optional.
#[derive(Default)]
pub struct TranslatorOptions {
    /// Initial default language. Ignored (with a warning) when the dictionary
    /// does not support it.
    pub default_language: Option<String>,

    /// Lock serializing calls on a shared translator. Defaults to [`NoLock`].
    pub lock: Option<Box<dyn Lock>>,

    /// Destination of [`Translator::print`]. Defaults to discarding output.
    pub sink: Option<Box<dyn Write + Send>>,
}

impl TranslatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial default language
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.default_language = Some(code.into());
        self
    }

    /// Set the lock
    pub fn lock(mut self, lock: impl Lock + 'static) -> Self {
        self.lock = Some(Box::new(lock));
        self
    }

    /// Set the output sink
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }
}

impl fmt::Debug for TranslatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorOptions")
            .field("default_language", &self.default_language)
            .field("lock", &self.lock.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

/// Translates and formats messages against a dictionary.
///
/// The dictionary is fixed at construction. The only mutable state is the
/// default language, which is read and written under the configured lock,
/// so a translator can be shared between threads (e.g. behind an `Arc`).
pub struct Translator {
    dictionary: Arc<Dictionary>,

    /// Registry index of the default language
    default_language: AtomicUsize,

    lock: Box<dyn Lock>,
    sink: Mutex<Box<dyn Write + Send>>,
    metrics: LookupMetrics,
}

impl Translator {
    /// Create a translator over the built-in dictionary.
    pub fn new(options: TranslatorOptions) -> Self {
        Self::with_dictionary(Dictionary::builtin(), options)
    }

    /// Create a translator over any dictionary.
    pub fn with_dictionary(dictionary: impl Into<Arc<Dictionary>>, options: TranslatorOptions) -> Self {
        let dictionary = dictionary.into();
        let languages = dictionary.languages();

        let mut index = languages.position(CANONICAL_LANGUAGE).unwrap_or(0);
        if let Some(code) = options.default_language.as_deref() {
            match languages.position(code) {
                Some(position) => index = position,
                None => warn!(
                    "Language '{}' is not supported, keeping '{}' (supported: {:?})",
                    code,
                    CANONICAL_LANGUAGE,
                    languages.codes()
                ),
            }
        }

        Self {
            default_language: AtomicUsize::new(index),
            lock: options.lock.unwrap_or_else(|| Box::new(NoLock)),
            sink: Mutex::new(options.sink.unwrap_or_else(|| Box::new(std::io::sink()))),
            metrics: LookupMetrics::new(),
            dictionary,
        }
    }

    /// The dictionary this translator reads from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Supported language codes, canonical first.
    pub fn supported_languages(&self) -> &[String] {
        self.dictionary.languages().codes()
    }

    /// The current default language.
    pub fn default_language(&self) -> &str {
        let _held = self.lock.acquire();
        self.current_language()
    }

    /// Change the default language.
    ///
    /// Fails with [`TranslateError::UnsupportedLanguage`] when the code is
    /// not supported, leaving the default language unchanged.
    pub fn set_default_language(&self, code: &str) -> Result<(), TranslateError> {
        let _held = self.lock.acquire();

        match self.dictionary.languages().position(code) {
            Some(index) => {
                self.default_language.store(index, Ordering::Relaxed);
                info!("Default language set to '{}'", code);
                Ok(())
            }
            None => {
                debug!("Rejected unsupported language '{}'", code);
                let message = self.render(
                    self.current_language(),
                    &[Arg::Key(Word::Language), Arg::from(code), Arg::Key(Word::NotSupported)],
                );
                Err(TranslateError::UnsupportedLanguage {
                    code: code.to_string(),
                    message,
                })
            }
        }
    }

    /// Translate and join arguments into one line.
    ///
    /// A leading text argument equal to a supported language code selects the
    /// language for this call only and is not rendered. Tokens are joined by
    /// single spaces; a `':'` character attaches to the previous token.
    pub fn translate(&self, args: &[Arg<'_>]) -> String {
        let _held = self.lock.acquire();

        if args.is_empty() {
            return String::new();
        }

        let (language, rest) = match args.split_first() {
            Some((Arg::Text(code), rest)) if self.dictionary.languages().contains(code) => {
                (&code[..], rest)
            }
            _ => (self.current_language(), args),
        };

        self.render(language, rest)
    }

    /// Translate arguments into a failure value.
    pub fn err(&self, args: &[Arg<'_>]) -> TranslateError {
        TranslateError::Message(self.translate(args))
    }

    /// Translate arguments and write the text to the output sink.
    ///
    /// Output is best effort: the text is written with a single `write` call,
    /// and short writes or sink errors are neither retried nor reported.
    pub fn print(&self, args: &[Arg<'_>]) {
        let text = self.translate(args);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write(text.as_bytes());
        let _ = sink.flush();
    }

    /// Replace the output sink.
    pub fn set_output(&self, sink: impl Write + Send + 'static) {
        let mut current = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Box::new(sink);
    }

    /// Replace the lock.
    pub fn set_lock(&mut self, lock: impl Lock + 'static) {
        self.lock = Box::new(lock);
    }

    /// Snapshot of this translator's lookup counters.
    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    fn current_language(&self) -> &str {
        self.dictionary
            .languages()
            .get(self.default_language.load(Ordering::Relaxed))
            .unwrap_or(CANONICAL_LANGUAGE)
    }

    fn lookup<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        let found = self.dictionary.resolve(key, language);
        self.metrics.record(found);
        found.text()
    }

    fn lookup_word(&self, word: Word, language: &str) -> Cow<'_, str> {
        match self.dictionary.key_of(word) {
            Some(key) => Cow::Borrowed(self.lookup(key, language)),
            None => {
                let key = word.key();
                self.metrics.record(Lookup::PassThrough(&key));
                Cow::Owned(key)
            }
        }
    }

    /// `"<argument>: <index> <unknown>"` in the given language.
    fn diagnostic(&self, index: usize, language: &str) -> String {
        let text = |word: Word| match self.dictionary.key_of(word) {
            Some(key) => self.dictionary.lookup(key, language).to_string(),
            None => word.key(),
        };
        format!("{}: {} {}", text(Word::Argument), index, text(Word::Unknown))
    }

    fn render(&self, language: &str, args: &[Arg<'_>]) -> String {
        let mut line = Line::default();

        for (index, arg) in args.iter().enumerate() {
            match arg {
                Arg::Key(word) => line.push(&self.lookup_word(*word, language)),
                Arg::Text(text) => {
                    if !text.is_empty() {
                        line.push(self.lookup(text, language));
                    }
                }
                Arg::Texts(texts) => {
                    for text in texts.iter().filter(|t| !t.is_empty()) {
                        line.push(self.lookup(text, language));
                    }
                }
                Arg::Char(':') => line.attach(':'),
                Arg::Char(c) => line.push(c.encode_utf8(&mut [0; 4])),
                Arg::Int(n) => line.push(&n.to_string()),
                Arg::Float(x) => line.push(&format_float(*x)),
                Arg::Bool(b) => line.push(if *b { "true" } else { "false" }),
                Arg::Error(message) => line.push(message),
                Arg::Unknown => {
                    self.metrics.record_unknown_arg();
                    line.push(&self.diagnostic(index, language));
                }
            }
        }

        line.out
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslatorOptions::default())
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("default_language", &self.current_language())
            .field("languages", &self.supported_languages())
            .field("entries", &self.dictionary.len())
            .finish_non_exhaustive()
    }
}

/// Shortest decimal form, never exponent notation. Infinities are signed.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "+Inf".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        x.to_string()
    }
}

/// Output line with single-space token separation.
#[derive(Default)]
struct Line {
    out: String,
    spaced: bool,
}

impl Line {
    fn push(&mut self, token: &str) {
        if self.spaced {
            self.out.push(' ');
        }
        self.out.push_str(token);
        self.spaced = true;
    }

    /// Append without a leading space and without affecting spacing.
    fn attach(&mut self, c: char) {
        self.out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Field;
    use crate::t;
    use std::io;

    const FIELDS: &[Field<'static>] = &[
        Field::new("Language", r#"es:"idioma" pt:"idioma""#),
        Field::new("NotSupported", r#"es:"no soportado" pt:"não suportado""#),
        Field::new("ZipCode", r#"es:"código postal""#),
        Field::new("Argument", r#"es:"argumento" pt:"argumento""#),
        Field::new("Unknown", r#"es:"desconocido" pt:"desconhecido""#),
    ];

    fn translator(language: &str) -> Translator {
        Translator::with_dictionary(
            Dictionary::build(FIELDS),
            TranslatorOptions::new().language(language),
        )
    }

    /// Sink that keeps everything written to it.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that accepts at most `limit` bytes per call.
    struct ShortSink {
        limit: usize,
        written: SharedBuffer,
    }

    impl Write for ShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.written.write(&buf[..n])
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_default_language_is_canonical() {
        let tr = Translator::with_dictionary(Dictionary::build(FIELDS), TranslatorOptions::new());
        assert_eq!(tr.default_language(), "en");
    }

    #[test]
    fn test_initial_language_option() {
        assert_eq!(translator("es").default_language(), "es");
    }

    #[test]
    fn test_invalid_initial_language_is_ignored() {
        let tr = translator("fr");
        assert_eq!(tr.default_language(), "en");
        assert_eq!(t!(tr, Word::Language), "language");
    }

    #[test]
    fn test_supported_languages_in_discovery_order() {
        assert_eq!(translator("en").supported_languages(), &["en", "es", "pt"]);
    }

    #[test]
    fn test_builtin_translator() {
        let tr = Translator::default();
        assert_eq!(tr.supported_languages(), &["en", "es"]);
        assert_eq!(t!(tr, "es", Word::ZipCode), "código postal");
    }

    // ==================== Default Language Tests ====================

    #[test]
    fn test_set_default_language() {
        let tr = translator("en");
        tr.set_default_language("es").unwrap();
        assert_eq!(tr.default_language(), "es");
        assert_eq!(t!(tr, Word::Language), "idioma");
    }

    #[test]
    fn test_set_unsupported_language_keeps_current() {
        let tr = translator("es");
        for _ in 0..3 {
            let err = tr.set_default_language("fr").unwrap_err();
            assert!(matches!(
                err,
                TranslateError::UnsupportedLanguage { ref code, .. } if code == "fr"
            ));
            assert_eq!(tr.default_language(), "es");
        }
    }

    #[test]
    fn test_unsupported_language_message_is_translated() {
        let tr = translator("en");
        let err = tr.set_default_language("fr").unwrap_err();
        assert_eq!(err.to_string(), "language fr not supported");

        tr.set_default_language("es").unwrap();
        let err = tr.set_default_language("fr").unwrap_err();
        assert_eq!(err.to_string(), "idioma fr no soportado");
    }

    // ==================== Language Override Tests ====================

    #[test]
    fn test_leading_language_code_overrides() {
        let tr = translator("en");
        assert_eq!(t!(tr, "es", Word::Language, Word::NotSupported), "idioma no soportado");
        assert_eq!(tr.default_language(), "en");
    }

    #[test]
    fn test_only_first_argument_selects_language() {
        let tr = translator("en");
        assert_eq!(t!(tr, Word::Language, "es"), "language es");
    }

    #[test]
    fn test_unknown_leading_code_is_text() {
        let tr = translator("en");
        assert_eq!(t!(tr, "fr", Word::Language), "fr language");
    }

    #[test]
    fn test_language_code_alone_renders_nothing() {
        assert_eq!(t!(translator("en"), "es"), "");
    }

    #[test]
    fn test_owned_text_can_select_language() {
        let tr = translator("en");
        let code = String::from("es");
        assert_eq!(t!(tr, code, Word::Language), "idioma");
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_text_key_lookup() {
        let tr = translator("es");
        assert_eq!(t!(tr, "language", "not_supported"), "idioma no soportado");
    }

    #[test]
    fn test_missing_translation_falls_back_to_canonical() {
        let tr = translator("pt");
        assert_eq!(t!(tr, Word::ZipCode), "zip code");
        assert_eq!(t!(tr, "zip_code"), "zip code");
    }

    #[test]
    fn test_unknown_text_passes_through() {
        let tr = translator("es");
        assert_eq!(t!(tr, "hello"), "hello");
        assert_eq!(t!(tr, "not supported"), "not supported");
    }

    #[test]
    fn test_word_missing_from_dictionary_passes_key_through() {
        let tr = translator("es");
        assert_eq!(t!(tr, Word::BirthDate), "birth_date");
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_empty_args() {
        assert_eq!(translator("en").translate(&[]), "");
    }

    #[test]
    fn test_empty_strings_are_skipped() {
        let tr = translator("en");
        assert_eq!(t!(tr, "", "a", "", "b", ""), "a b");
        assert_eq!(t!(tr, "", ""), "");
    }

    #[test]
    fn test_sequence_emits_one_token_per_element() {
        let tr = translator("es");
        assert_eq!(t!(tr, ["language", "x", "zip_code"]), "idioma x código postal");
        assert_eq!(t!(tr, "a", ["", "b", ""], "c"), "a b c");
    }

    #[test]
    fn test_empty_sequence_does_not_add_space() {
        let tr = translator("en");
        let empty: Vec<&str> = Vec::new();
        assert_eq!(t!(tr, empty, "a"), "a");
    }

    #[test]
    fn test_colon_attaches_to_previous_token() {
        let tr = translator("en");
        assert_eq!(t!(tr, "hello", "world", ':', 2021), "hello world: 2021");
        assert_eq!(t!(tr, Word::Language, ':', "es"), "language: es");
    }

    #[test]
    fn test_leading_colon() {
        assert_eq!(t!(translator("en"), ':', "a"), ":a");
    }

    #[test]
    fn test_other_characters_are_tokens() {
        assert_eq!(t!(translator("en"), "a", '-', "b", 'ñ'), "a - b ñ");
    }

    #[test]
    fn test_numbers() {
        let tr = translator("en");
        assert_eq!(t!(tr, 42, -7i64, 0u8), "42 -7 0");
        assert_eq!(t!(tr, 1.5, 0.1, 2.0, 1e21), "1.5 0.1 2 1000000000000000000000");
        assert_eq!(t!(tr, 100.25), "100.25");
    }

    #[test]
    fn test_special_floats() {
        let tr = translator("en");
        assert_eq!(
            t!(tr, f64::INFINITY, f64::NEG_INFINITY, f64::NAN),
            "+Inf -Inf NaN"
        );
        assert_eq!(t!(tr, -0.0, 1e-7), "-0 0.0000001");
    }

    #[test]
    fn test_single_precision_floats() {
        let tr = translator("en");
        assert_eq!(t!(tr, 1.5f32, -0.25f32), "1.5 -0.25");
        assert_eq!(t!(tr, f32::INFINITY), "+Inf");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(t!(translator("en"), true, false), "true false");
    }

    #[test]
    fn test_error_values_render_message() {
        let tr = translator("en");
        let io = io::Error::new(io::ErrorKind::NotFound, "file missing");
        assert_eq!(t!(tr, Word::Language, Arg::error(&io)), "language file missing");

        let err = tr.err(&[Arg::from("boom")]);
        assert_eq!(t!(tr, "x", err), "x boom");
    }

    #[test]
    fn test_unknown_argument_diagnostic() {
        let tr = translator("en");
        assert_eq!(t!(tr, "a", (), "b"), "a argument: 1 unknown b");
    }

    #[test]
    fn test_unknown_argument_diagnostic_is_translated() {
        let tr = translator("es");
        assert_eq!(t!(tr, ()), "argumento: 0 desconocido");
    }

    #[test]
    fn test_unknown_argument_index_skips_language_override() {
        let tr = translator("en");
        assert_eq!(t!(tr, "pt", "x", ()), "x argumento: 1 desconhecido");
    }

    #[test]
    fn test_unknown_argument_without_dictionary_words() {
        let tr = Translator::with_dictionary(Dictionary::default(), TranslatorOptions::new());
        assert_eq!(t!(tr, ()), "argument: 0 unknown");
    }

    // ==================== Err Tests ====================

    #[test]
    fn test_err_wraps_translation() {
        let tr = translator("es");
        let err = tr.err(&[Word::ZipCode.into(), Word::NotSupported.into()]);
        assert_eq!(err, TranslateError::Message("código postal no soportado".to_string()));
        assert_eq!(err.to_string(), "código postal no soportado");
    }

    // ==================== Print Tests ====================

    #[test]
    fn test_print_writes_translation() {
        let buffer = SharedBuffer::default();
        let tr = Translator::with_dictionary(
            Dictionary::build(FIELDS),
            TranslatorOptions::new().language("es").sink(buffer.clone()),
        );
        tr.print(&[Word::Language.into(), "x".into()]);
        assert_eq!(buffer.contents(), "idioma x");
    }

    #[test]
    fn test_print_without_sink_is_noop() {
        translator("en").print(&[Word::Language.into()]);
    }

    #[test]
    fn test_print_short_write_is_not_retried() {
        let written = SharedBuffer::default();
        let tr = translator("en");
        tr.set_output(ShortSink {
            limit: 4,
            written: written.clone(),
        });
        tr.print(&[Word::NotSupported.into()]);
        assert_eq!(written.contents(), "not ");
    }

    #[test]
    fn test_print_failure_is_swallowed() {
        let tr = translator("en");
        tr.set_output(FailingSink);
        tr.print(&[Word::Language.into()]);
    }

    #[test]
    fn test_set_output_rebinds_sink() {
        let first = SharedBuffer::default();
        let second = SharedBuffer::default();
        let tr = Translator::with_dictionary(
            Dictionary::build(FIELDS),
            TranslatorOptions::new().sink(first.clone()),
        );
        tr.print(&["one".into()]);
        tr.set_output(second.clone());
        tr.print(&["two".into()]);
        assert_eq!(first.contents(), "one");
        assert_eq!(second.contents(), "two");
    }

    // ==================== Lock Tests ====================

    #[test]
    fn test_translator_with_mutex_lock() {
        let tr = Translator::with_dictionary(
            Dictionary::build(FIELDS),
            TranslatorOptions::new().lock(Mutex::new(())),
        );
        tr.set_default_language("es").unwrap();
        assert_eq!(t!(tr, Word::Language), "idioma");
        assert!(tr.set_default_language("fr").is_err());
        assert_eq!(tr.default_language(), "es");
    }

    #[test]
    fn test_lock_is_released_after_each_call() {
        let lock = Arc::new(Mutex::new(()));
        let tr = Translator::with_dictionary(
            Dictionary::build(FIELDS),
            TranslatorOptions::new().lock(Arc::clone(&lock)),
        );
        let _ = t!(tr, Word::Language);
        assert!(lock.try_lock().is_ok());
        let _ = tr.set_default_language("xx");
        assert!(lock.try_lock().is_ok());
    }

    #[test]
    fn test_set_lock() {
        let mut tr = translator("en");
        tr.set_lock(Mutex::new(()));
        assert_eq!(t!(tr, "es", Word::Language), "idioma");
    }

    // ==================== Metrics Tests ====================

    #[test]
    fn test_metrics_count_lookups() {
        let tr = translator("pt");
        let _ = t!(tr, Word::Language, Word::ZipCode, "hello", (), 5);

        let report = tr.metrics();
        assert_eq!(report.translated, 1);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.pass_throughs, 1);
        assert_eq!(report.unknown_args, 1);
    }

    #[test]
    fn test_translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", translator("es"));
        assert!(debug.contains("Translator"));
        assert!(debug.contains("\"es\""));
    }
}
