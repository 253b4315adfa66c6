/// Citation network records: node classification, nodes and edges.
///
/// Nodes are identified by `id`; edges refer to nodes by id only and may
/// name ids that no node carries.
use std::fmt;

use serde::Serialize;

// ─── NodeType ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    LostWork,
    CitationSource,
    KeyTransmitter,
    #[default]
    Other,
}

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::LostWork,
        NodeType::CitationSource,
        NodeType::KeyTransmitter,
        NodeType::Other,
    ];

    /// Classify a raw `type` tag. Unknown or missing tags are `Other`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("lost_work") => NodeType::LostWork,
            Some("citation_source") => NodeType::CitationSource,
            Some("key_transmitter") => NodeType::KeyTransmitter,
            _ => NodeType::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::LostWork => "lost_work",
            NodeType::CitationSource => "citation_source",
            NodeType::KeyTransmitter => "key_transmitter",
            NodeType::Other => "other",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── NetworkNode ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkNode {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl NetworkNode {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: None,
            node_type,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label, or the id when the label is absent or empty.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }
}

// ─── NetworkEdge ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
}

impl NetworkEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}
