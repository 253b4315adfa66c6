//! WASM bindings for the browser front end.
//!
//! Inputs are raw text; structured results come back as JSON strings.

use wasm_bindgen::prelude::*;

use crate::{CitationGraph, Format, FragmentIndex, GraphRenderer, RenderConfig};

fn to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Parse flat structured text into a JSON object.
#[wasm_bindgen(js_name = "parseDocument")]
pub fn parse_document(src: &str) -> Result<String, JsError> {
    serde_json::to_string(&crate::parsers::parse(src)).map_err(to_js)
}

/// Search fragments (structured text or JSON) and return the matches.
///
/// - `query`: substring over text and id, empty for all
/// - `collection`: exact collection name, empty for all
#[wasm_bindgen(js_name = "searchFragments")]
pub fn search_fragments(src: &str, query: &str, collection: &str) -> Result<String, JsError> {
    let index = FragmentIndex::from_text(src);
    serde_json::to_string(&index.query(query, collection)).map_err(to_js)
}

/// Node and edge totals with per-type counts.
#[wasm_bindgen(js_name = "networkStats")]
pub fn network_stats(network_json: &str) -> Result<String, JsError> {
    let graph = CitationGraph::from_json(network_json).map_err(to_js)?;
    serde_json::to_string(&graph.stats()).map_err(to_js)
}

/// Draw a network as an SVG document.
#[wasm_bindgen(js_name = "renderNetworkSvg")]
pub fn render_network_svg(network_json: &str, width: f64, height: f64) -> Result<String, JsError> {
    let config = RenderConfig::default().with_size(width, height);
    crate::render_network(network_json, &config, Format::Svg).map_err(to_js)
}

/// Tooltip for the node under `(x, y)` as JSON, or `null`.
#[wasm_bindgen(js_name = "tooltipAt")]
pub fn tooltip_at(
    network_json: &str,
    width: f64,
    height: f64,
    x: f64,
    y: f64,
) -> Result<String, JsError> {
    let config = RenderConfig::default().with_size(width, height);
    let graph = CitationGraph::from_json(network_json).map_err(to_js)?;
    let positions = graph.layout(width, height);
    let scene = GraphRenderer::new(config).render(&graph, &positions);
    serde_json::to_string(&scene.tooltip(x, y)).map_err(to_js)
}
