//! Errors raised at the ingestion boundary.
//!
//! Parsing, searching, layout and rendering are total; only decoding
//! externally supplied JSON (and reading files, for the CLI) can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected {what} shape: {detail}")]
    Shape { what: &'static str, detail: String },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn shape(what: &'static str, detail: impl Into<String>) -> Self {
        Self::Shape {
            what,
            detail: detail.into(),
        }
    }
}
