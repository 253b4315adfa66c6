//! pinakes — fragment catalog and citation-network viewer core.
//!
//! Public API: `render_network()` for the one-shot path, plus the typed
//! building blocks it wires together.
//!
//! Pipeline:
//!   parsers::parse        // flat `key: value` / `- item` text → Document
//!   FragmentIndex         // searchable fragment records
//!   CitationGraph         // typed nodes/edges over petgraph, stats, degree
//!   layout::circular      // node id → Point on a circle
//!   renderers             // Scene of draw commands → SVG or text surface
//!   Catalog               // fragments + graph, rebuilt wholesale on refresh

pub mod catalog;
mod coerce;
pub mod config;
pub mod error;
pub mod fragments;
pub mod layout;
pub mod network;
pub mod parsers;
pub mod reconstruction;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, DirSource, TextSource};
pub use config::{RenderConfig, SourcePaths};
pub use error::LoadError;
pub use fragments::{Fragment, FragmentIndex};
pub use network::{CitationGraph, GraphStats, NetworkEdge, NetworkNode, NodeType};
pub use renderers::{GraphRenderer, Scene, Surface, SvgSurface, TextSurface};

/// Output format for [`render_network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Text,
}

/// Decode a citation-network JSON document, lay it out on a circle, and
/// draw it with the surface for `format`.
pub fn render_network(
    network_json: &str,
    config: &RenderConfig,
    format: Format,
) -> Result<String, LoadError> {
    let graph = CitationGraph::from_json(network_json)?;
    let positions = graph.layout(config.width, config.height);
    let scene = GraphRenderer::new(config.clone()).render(&graph, &positions);
    Ok(match format {
        Format::Svg => SvgSurface::new(config).draw(scene.commands()),
        Format::Text => TextSurface::new(config).draw(scene.commands()),
    })
}
