//! Identifier case conversion.
//!
//! Turns `PascalCase`/`camelCase` identifiers into lowercase words joined by a
//! separator. Dictionary keys use `_`, display values use a single space.

/// Separator used for canonical dictionary keys.
pub const KEY_SEPARATOR: &str = "_";

/// Convert an identifier to `snake_case`.
///
/// # Example
/// ```
/// use tiny_translator::i18n::snake_case;
///
/// assert_eq!(snake_case("NotSupported"), "not_supported");
/// ```
pub fn snake_case(ident: &str) -> String {
    snake_case_with(ident, KEY_SEPARATOR)
}

/// Convert an identifier to lowercase words joined by `separator`.
///
/// A separator is inserted before an ASCII uppercase letter only when the
/// previous character is an ASCII lowercase letter or digit, so acronyms
/// collapse into one word (`"APIResponse"` becomes `"apiresponse"`).
/// Every other character is copied unchanged.
pub fn snake_case_with(ident: &str, separator: &str) -> String {
    let mut out = String::with_capacity(ident.len() + separator.len() * 4);
    let mut prev: Option<char> = None;

    for c in ident.chars() {
        if c.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push_str(separator);
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}
