//! Fragment records and the read-only index used to search them.
//!
//! The index is built once per load and never mutated afterwards; a refresh
//! builds a new index and replaces the old one.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coerce::{kind_of, lenient};
use crate::error::LoadError;
use crate::parsers::parse;
use crate::syntax::Document;

/// Key under which a document carries its fragment list.
pub const FRAGMENTS_KEY: &str = "fragments";

const UNKNOWN: &str = "Unknown";
const NO_TEXT: &str = "No text available";

// ─── Fragment ────────────────────────────────────────────────────────────────

/// A short textual excerpt with provenance metadata.
///
/// Every field is optional at the source. Absent fields stay `None`; the
/// `display_*` helpers supply placeholder text for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Fragment {
    /// A fragment carrying only its text, as produced from a document list item.
    pub fn from_item(item: &str) -> Self {
        Self {
            text: Some(item.to_string()),
            ..Self::default()
        }
    }

    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or(NO_TEXT)
    }

    pub fn display_collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_date_range(&self) -> &str {
        self.date_range.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or(UNKNOWN)
    }

    fn matches(&self, needle: &str) -> bool {
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
        };
        hit(&self.text) || hit(&self.id)
    }

    /// Empty `collection` matches everything.
    fn in_collection(&self, collection: &str) -> bool {
        collection.is_empty() || self.collection.as_deref() == Some(collection)
    }
}

// ─── FragmentIndex ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentIndex {
    fragments: Vec<Fragment>,
}

impl FragmentIndex {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Build an index from the `fragments` list of a parsed document.
    ///
    /// A missing key, or a scalar bound to it, yields an empty index.
    pub fn from_document(doc: &Document) -> Self {
        let fragments: Vec<Fragment> = doc
            .list(FRAGMENTS_KEY)
            .unwrap_or_default()
            .iter()
            .map(|item| Fragment::from_item(item))
            .collect();
        debug!(count = fragments.len(), "indexed fragments from document");
        Self::new(fragments)
    }

    /// Build an index from JSON: either an array of fragment objects or an
    /// object with a `fragments` array. Non-object entries are skipped.
    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        let root: serde_json::Value = serde_json::from_str(src)?;
        let entries = match root {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut map) => match map.remove(FRAGMENTS_KEY) {
                Some(serde_json::Value::Array(items)) => items,
                None | Some(serde_json::Value::Null) => Vec::new(),
                Some(other) => {
                    return Err(LoadError::shape(
                        "fragments",
                        format!("`fragments` is {}, expected an array", kind_of(&other)),
                    ));
                }
            },
            other => {
                return Err(LoadError::shape(
                    "fragments",
                    format!("top level is {}, expected an array or object", kind_of(&other)),
                ));
            }
        };

        let mut fragments = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                warn!(index = i, "skipping non-object fragment entry");
                continue;
            }
            fragments.push(serde_json::from_value(entry)?);
        }
        debug!(count = fragments.len(), "indexed fragments from JSON");
        Ok(Self::new(fragments))
    }

    /// Build an index from either input form.
    ///
    /// Text starting with `[` or `{` is tried as JSON first; when that fails,
    /// or for any other text, it goes through the structured-text parser.
    pub fn from_text(src: &str) -> Self {
        let head = src.trim_start();
        if head.starts_with('[') || head.starts_with('{') {
            match Self::from_json(src) {
                Ok(index) => return index,
                Err(e) => warn!(error = %e, "fragment JSON unusable, parsing as structured text"),
            }
        }
        Self::from_document(&parse(src))
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// First fragment with the given id.
    pub fn get(&self, id: &str) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.id.as_deref() == Some(id))
    }

    /// Case-insensitive substring search over `text` and `id`.
    ///
    /// An empty query returns every fragment. Source order is preserved.
    pub fn search(&self, query: &str) -> Vec<&Fragment> {
        if query.is_empty() {
            return self.fragments.iter().collect();
        }
        let needle = query.to_lowercase();
        self.fragments.iter().filter(|f| f.matches(&needle)).collect()
    }

    /// Exact, case-sensitive match on `collection`. An empty filter returns
    /// every fragment; fragments without a collection never match otherwise.
    pub fn filter_by_collection(&self, collection: &str) -> Vec<&Fragment> {
        self.fragments
            .iter()
            .filter(|f| f.in_collection(collection))
            .collect()
    }

    /// `search` and `filter_by_collection` applied together in one pass.
    pub fn query(&self, query: &str, collection: &str) -> Vec<&Fragment> {
        let needle = query.to_lowercase();
        self.fragments
            .iter()
            .filter(|f| needle.is_empty() || f.matches(&needle))
            .filter(|f| f.in_collection(collection))
            .collect()
    }

    /// Distinct collection names, in order of first appearance.
    pub fn collections(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.fragments.iter().filter_map(|f| f.collection.as_deref()) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a FragmentIndex {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_fragments.rs"]
mod tests;
