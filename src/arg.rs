//! Arguments accepted by [`Translator::translate`](crate::Translator::translate).
//!
//! Every supported argument shape is a variant of [`Arg`]; `From` conversions
//! cover the usual Rust types so call sites can write
//! `t!(tr, Word::Field, "name", ':', 3)`.

use crate::error::TranslateError;
use crate::i18n::Word;
use std::borrow::Cow;

/// One argument of a translation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    /// A built-in dictionary word.
    Key(Word),

    /// Text looked up as a dictionary key, passed through when unknown. As
    /// the first argument it may instead select the language.
    Text(Cow<'a, str>),

    /// Several texts, each emitted as its own token.
    Texts(Vec<Cow<'a, str>>),

    /// A single character. `':'` attaches to the previous token.
    Char(char),

    Int(i128),

    /// Rendered in its shortest round-trip form.
    Float(f64),

    Bool(bool),

    /// Message text of a failure value.
    Error(String),

    /// A value with no rendering rule; rendered as a positional diagnostic.
    Unknown,
}

impl Arg<'_> {
    /// Wrap any error as a failure argument.
    pub fn error(err: &dyn std::error::Error) -> Arg<'static> {
        Arg::Error(err.to_string())
    }
}

impl From<Word> for Arg<'_> {
    fn from(word: Word) -> Self {
        Arg::Key(word)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Arg::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(text: &'a String) -> Self {
        Arg::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Arg::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Arg::Text(text)
    }
}

impl<'a> From<&'a [&'a str]> for Arg<'a> {
    fn from(texts: &'a [&'a str]) -> Self {
        Arg::Texts(texts.iter().map(|t| Cow::Borrowed(*t)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Arg<'a> {
    fn from(texts: [&'a str; N]) -> Self {
        Arg::Texts(texts.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Arg<'a> {
    fn from(texts: Vec<&'a str>) -> Self {
        Arg::Texts(texts.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for Arg<'_> {
    fn from(texts: Vec<String>) -> Self {
        Arg::Texts(texts.into_iter().map(Cow::Owned).collect())
    }
}

impl<'a> From<&'a [String]> for Arg<'a> {
    fn from(texts: &'a [String]) -> Self {
        Arg::Texts(texts.iter().map(|t| Cow::Borrowed(t.as_str())).collect())
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

macro_rules! int_args {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(value: $t) -> Self {
                    Arg::Int(i128::from(value))
                }
            }
        )*
    };
}

int_args!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Arg::Int(value as i128)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::Int(value as i128)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<TranslateError> for Arg<'_> {
    fn from(err: TranslateError) -> Self {
        Arg::Error(err.to_string())
    }
}

impl From<&TranslateError> for Arg<'_> {
    fn from(err: &TranslateError) -> Self {
        Arg::Error(err.to_string())
    }
}

impl From<()> for Arg<'_> {
    fn from(_: ()) -> Self {
        Arg::Unknown
    }
}
