//! Helpers for reconstruction documents: file-name slugs, listing lookup,
//! and confidence formatting.
//!
//! Reconstruction files are named `<slug>_<timestamp>.yml`, where the slug
//! is the lowercased work title with every non-alphanumeric character
//! replaced by `_`.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("static regex"));

/// File-name slug for a work title.
pub fn slug(title: &str) -> String {
    NON_ALNUM.replace_all(&title.to_lowercase(), "_").into_owned()
}

/// First entry of `listing` named `<slug>_*.yml` for `title`.
pub fn find_document<'a, S: AsRef<str>>(title: &str, listing: &'a [S]) -> Option<&'a str> {
    let pattern = format!(r"^{}_.*\.yml$", regex::escape(&slug(title)));
    let re = Regex::new(&pattern).ok()?;
    listing
        .iter()
        .map(AsRef::as_ref)
        .find(|name| re.is_match(name))
}

/// Confidence in `[0, 1]` as a percentage with one decimal, e.g. `99.6%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
