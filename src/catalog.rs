//! Catalog — the store holding one fragment index and one citation graph.
//!
//! A catalog is an ordinary value. Loading builds a complete new catalog
//! from raw inputs and refreshing swaps it in whole, so readers never see a
//! half-updated store. Unavailable or undecodable inputs become empty
//! collections.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::SourcePaths;
use crate::error::LoadError;
use crate::fragments::FragmentIndex;
use crate::network::CitationGraph;
use crate::parsers::parse;
use crate::reconstruction::find_document;
use crate::syntax::Document;

// ─── TextSource ──────────────────────────────────────────────────────────────

/// Fetch primitive supplied by the caller.
pub trait TextSource {
    /// Text stored at `path`, or `None` when it cannot be retrieved.
    fn fetch(&self, path: &str) -> Option<String>;

    /// Entry names under directory `dir`; empty when unknown.
    fn list(&self, _dir: &str) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory source keyed by path.
impl TextSource for HashMap<String, String> {
    fn fetch(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }

    fn list(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut names: Vec<String> = self
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// Files under a local data root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a file under the root, keeping the I/O error.
    pub fn read(&self, path: &str) -> Result<String, LoadError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| LoadError::Io { path: full, source })
    }
}

impl TextSource for DirSource {
    fn fetch(&self, path: &str) -> Option<String> {
        match self.read(path) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "source unavailable");
                None
            }
        }
    }

    fn list(&self, dir: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.root.join(dir)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    fragments: FragmentIndex,
    network: CitationGraph,
}

impl Catalog {
    pub fn new(fragments: FragmentIndex, network: CitationGraph) -> Self {
        Self { fragments, network }
    }

    /// Build a catalog from raw inputs; `None` means no data is available.
    pub fn from_sources(fragments_text: Option<&str>, network_json: Option<&str>) -> Self {
        let fragments = fragments_text
            .map(FragmentIndex::from_text)
            .unwrap_or_default();
        let network = network_json
            .map(|src| {
                CitationGraph::from_json(src).unwrap_or_else(|e| {
                    warn!(error = %e, "network data unusable, treating as empty");
                    CitationGraph::default()
                })
            })
            .unwrap_or_default();

        debug!(
            fragments = fragments.len(),
            nodes = network.node_count(),
            edges = network.edge_count(),
            "catalog loaded"
        );
        Self::new(fragments, network)
    }

    /// Fetch both inputs through `source` and build a catalog.
    pub fn load<S: TextSource + ?Sized>(source: &S, paths: &SourcePaths) -> Self {
        let fragments = source.fetch(&paths.fragments);
        let network = source.fetch(&paths.network);
        Self::from_sources(fragments.as_deref(), network.as_deref())
    }

    /// Reload from `source`, replacing the whole catalog.
    pub fn refresh<S: TextSource + ?Sized>(&mut self, source: &S, paths: &SourcePaths) {
        *self = Self::load(source, paths);
    }

    pub fn fragments(&self) -> &FragmentIndex {
        &self.fragments
    }

    pub fn network(&self) -> &CitationGraph {
        &self.network
    }

    /// Fetch and parse the reconstruction document for `title`.
    pub fn reconstruction<S: TextSource + ?Sized>(
        source: &S,
        paths: &SourcePaths,
        title: &str,
    ) -> Option<Document> {
        let listing = source.list(&paths.reconstructions);
        let name = find_document(title, &listing)?;
        let text = source.fetch(&format!("{}/{name}", paths.reconstructions))?;
        Some(parse(&text))
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_catalog.rs"]
mod tests;
