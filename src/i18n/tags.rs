//! Annotation tag parsing.
//!
//! Dictionary fields carry their translations as a raw annotation string made
//! of `key:"value"` pairs, e.g. `es:"idioma" pt:"idioma"`. Anything that is
//! not a well-formed pair is skipped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

// Regex pattern for key:"value" pairs (cached for performance).
// Keys are whole ASCII word tokens; any other character separates them.
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r#"([A-Za-z0-9_]+):"([^"]*)""#).unwrap())
}

/// Iterate over the well-formed `key:"value"` pairs of an annotation in
/// source order.
///
/// Duplicate keys are yielded as many times as they appear.
pub fn tag_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    tag_regex().captures_iter(raw).filter_map(|cap| {
        let key = cap.get(1)?.as_str();
        if key.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let value = cap.get(2)?.as_str();
        Some((key, value))
    })
}

/// Parse an annotation into a key → value map.
///
/// Never fails: empty or malformed input yields an empty map. When a key
/// appears more than once the last occurrence wins.
///
/// # Example
/// ```
/// use tiny_translator::i18n::parse_tags;
///
/// let tags = parse_tags(r#"json:"name" xml:"name""#);
/// assert_eq!(tags.get("json").map(String::as_str), Some("name"));
/// ```
pub fn parse_tags(raw: &str) -> HashMap<String, String> {
    tag_pairs(raw)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
