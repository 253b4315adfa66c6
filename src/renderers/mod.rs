//! Rendering: draw commands, the scene builder, and output surfaces.
//!
//! `GraphRenderer` turns a graph plus positions into a [`Scene`], a flat
//! list of [`DrawCommand`]s with hit-test data. A [`Surface`] serializes the
//! commands for one output medium.

pub mod canvas;
pub mod scene;
pub mod svg;
pub mod text;

pub use scene::{GraphRenderer, Scene, Tooltip};
pub use svg::SvgSurface;
pub use text::TextSurface;

use serde::Serialize;

use crate::network::NodeType;

// ─── Fill ────────────────────────────────────────────────────────────────────

/// Node fill, one per node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Red,
    Blue,
    Gold,
    Gray,
}

impl Fill {
    pub fn for_type(node_type: NodeType) -> Self {
        match node_type {
            NodeType::LostWork => Fill::Red,
            NodeType::CitationSource => Fill::Blue,
            NodeType::KeyTransmitter => Fill::Gold,
            NodeType::Other => Fill::Gray,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Fill::Red => "#e74c3c",
            Fill::Blue => "#3498db",
            Fill::Gold => "#f39c12",
            Fill::Gray => "#95a5a6",
        }
    }
}

// ─── DrawCommand ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x: f64, y: f64, radius: f64, fill: Fill },
    Label { x: f64, y: f64, text: String },
}

// ─── Surface ─────────────────────────────────────────────────────────────────

/// An output medium for draw commands.
pub trait Surface {
    /// Serialize `commands`, in order, to this surface's text format.
    fn draw(&self, commands: &[DrawCommand]) -> String;
}
