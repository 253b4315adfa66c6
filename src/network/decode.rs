//! Decoding of graph-interchange JSON into a [`CitationGraph`].
//!
//! Accepted shapes:
//!
//! ```text
//! { "nodes": [{"data": {...}}], "edges": [{"data": {...}}] }
//! { "elements": { "nodes": [...], "edges": [...] }, ... }   // Cytoscape export
//! ```

use serde::Deserialize;
use tracing::warn;

use super::graph::CitationGraph;
use super::types::{NetworkEdge, NetworkNode, NodeType};
use crate::coerce::{kind_of, lenient};
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct Element<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    label: Option<String>,
    /// Cytoscape exports carry the label as `name`.
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    #[serde(default, deserialize_with = "lenient")]
    source: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    target: Option<String>,
}

impl CitationGraph {
    /// Decode a graph from JSON text.
    ///
    /// Malformed elements and non-array element lists are skipped with a
    /// warning; only invalid JSON or a non-object top level is an error.
    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        let root: serde_json::Value = serde_json::from_str(src)?;
        Self::from_value(root)
    }

    /// Decode a graph from an already-parsed JSON value.
    pub fn from_value(root: serde_json::Value) -> Result<Self, LoadError> {
        let mut map = match root {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(LoadError::shape(
                    "network",
                    format!("top level is {}, expected an object", kind_of(&other)),
                ));
            }
        };
        let mut body = match map.remove("elements") {
            Some(serde_json::Value::Object(inner)) => inner,
            None | Some(serde_json::Value::Null) => map,
            Some(other) => {
                warn!(kind = kind_of(&other), "`elements` is not an object, treating as empty");
                serde_json::Map::new()
            }
        };

        let nodes = element_list("nodes", body.remove("nodes"))
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| decode_node(i, v))
            .collect();
        let edges = element_list("edges", body.remove("edges"))
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| decode_edge(i, v))
            .collect();

        Ok(Self::new(nodes, edges))
    }
}

/// The array under `key`; null or missing is empty, any other kind is
/// dropped with a warning.
fn element_list(key: &'static str, value: Option<serde_json::Value>) -> Vec<serde_json::Value> {
    match value {
        Some(serde_json::Value::Array(items)) => items,
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(other) => {
            warn!(key, kind = kind_of(&other), "element list is not an array, treating as empty");
            Vec::new()
        }
    }
}

fn decode_node(index: usize, value: serde_json::Value) -> Option<NetworkNode> {
    let raw = match serde_json::from_value::<Element<RawNode>>(value) {
        Ok(el) => el.data,
        Err(e) => {
            warn!(index, error = %e, "skipping malformed node element");
            return None;
        }
    };
    let Some(id) = raw.id else {
        warn!(index, "skipping node without an id");
        return None;
    };
    Some(NetworkNode {
        id,
        label: raw.label.or(raw.name),
        node_type: NodeType::from_tag(raw.kind.as_deref()),
    })
}

fn decode_edge(index: usize, value: serde_json::Value) -> Option<NetworkEdge> {
    let raw = match serde_json::from_value::<Element<RawEdge>>(value) {
        Ok(el) => el.data,
        Err(e) => {
            warn!(index, error = %e, "skipping malformed edge element");
            return None;
        }
    };
    match (raw.source, raw.target) {
        (Some(source), Some(target)) => Some(NetworkEdge { source, target }),
        _ => {
            warn!(index, "skipping edge without both endpoints");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_network_decode.rs"]
mod tests;
