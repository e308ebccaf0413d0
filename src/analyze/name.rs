//! Component name extraction and slug normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Name used when the request carries no usable quoted name.
pub const FALLBACK_NAME: &str = "unnamed-component";

// An opening quote must not follow a word character, so apostrophes in
// contractions ("don't") never open a name.
static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[^\w])(?:"([^"]+)"|'([^']+)')"#).expect("quoted name regex")
});

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex"));

/// First quoted substring of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuotedName<'a> {
    /// Text between the quotes.
    pub(crate) text: &'a str,
    /// Byte range including both quote characters.
    pub(crate) span: Range<usize>,
}

pub(crate) fn find_quoted(input: &str) -> Option<QuotedName<'_>> {
    let caps = QUOTED.captures(input)?;
    let inner = caps.get(1).or_else(|| caps.get(2))?;
    Some(QuotedName {
        text: inner.as_str(),
        // Quote characters are single-byte ASCII.
        span: inner.start() - 1..inner.end() + 1,
    })
}

/// Lowercase `value` and collapse every run of non `[a-z0-9]` characters
/// into one hyphen. Returns `None` when nothing alphanumeric remains.
pub fn slugify(value: &str) -> Option<String> {
    let lower = value.to_lowercase();
    let slug = NON_SLUG.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Slug of the first quoted substring, or [`FALLBACK_NAME`].
pub fn extract_name(input: &str) -> String {
    let Some(quoted) = find_quoted(input) else {
        return FALLBACK_NAME.to_string();
    };
    match slugify(quoted.text) {
        Some(slug) => slug,
        None => {
            tracing::debug!(quoted = quoted.text, "quoted name has no slug characters");
            FALLBACK_NAME.to_string()
        }
    }
}

/// `input` with the quoted name (quotes included) replaced by a space.
pub(crate) fn without_quoted_name(input: &str) -> String {
    match find_quoted(input) {
        Some(quoted) => {
            let mut masked = String::with_capacity(input.len());
            masked.push_str(&input[..quoted.span.start]);
            masked.push(' ');
            masked.push_str(&input[quoted.span.end..]);
            masked
        }
        None => input.to_string(),
    }
}
