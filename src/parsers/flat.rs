//! Line-oriented parser for flat structured text.
//!
//! Each line is classified on its own; the only state carried between lines
//! is the "current list target", the key that the next `- item` lines append
//! to. Malformed lines are skipped, so `parse` is total.

use tracing::{debug, trace};

use crate::syntax::Document;

// ─── Line classification ────────────────────────────────────────────────────

/// One classified input line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank line or `#` comment.
    Skip,
    /// `key: value`; `value` is empty for a bare `key:` header.
    Entry { key: &'a str, value: &'a str },
    /// `- item`
    Item(&'a str),
    /// Anything else.
    Unrecognized,
}

/// Classify a single line.
///
/// The key/value check runs before the list check, so `- a: b` is an entry
/// with key `- a`. A `:` in the first column does not start an entry.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }
    if let Some(colon) = line.find(':').filter(|&i| i > 0) {
        return Line::Entry {
            key: line[..colon].trim(),
            value: line[colon + 1..].trim(),
        };
    }
    if let Some(rest) = line.strip_prefix('-') {
        return Line::Item(rest.trim());
    }
    Line::Unrecognized
}

// ─── Parser ─────────────────────────────────────────────────────────────────

/// Parse flat structured text into a [`Document`].
///
/// Later entries overwrite earlier ones for the same key. A list item
/// appends to the list under the most recent key, replacing a scalar that
/// was bound there. List items before any key are dropped.
pub fn parse(src: &str) -> Document {
    let mut doc = Document::new();
    let mut target: Option<&str> = None;

    for (lineno, raw) in src.lines().enumerate() {
        match classify(raw) {
            Line::Skip => {}
            Line::Entry { key, value } => {
                if !value.is_empty() {
                    doc.set_scalar(key, value);
                }
                target = Some(key);
            }
            Line::Item(item) => match target {
                Some(key) => doc.push_item(key, item),
                None => trace!(line = lineno + 1, "list item without a key, ignored"),
            },
            Line::Unrecognized => trace!(line = lineno + 1, "unrecognized line, ignored"),
        }
    }

    debug!(keys = doc.len(), "parsed structured text");
    doc
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_flat.rs"]
mod tests;
