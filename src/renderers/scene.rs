//! Scene construction and hit-testing.
//!
//! Edges are emitted first so nodes paint over them; each node contributes
//! a circle followed by its label. Edges naming an unknown or unpositioned
//! node are dropped without error.

use serde::Serialize;
use tracing::debug;

use super::{DrawCommand, Fill};
use crate::config::RenderConfig;
use crate::layout::{Point, Positions};
use crate::network::{CitationGraph, NetworkNode};

// ─── Tooltip ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// Draw commands for one graph plus the node positions used to draw them.
#[derive(Debug, Clone)]
pub struct Scene<'g> {
    commands: Vec<DrawCommand>,
    targets: Vec<(&'g NetworkNode, Point)>,
    node_radius: f64,
    tooltip_offset: f64,
}

impl<'g> Scene<'g> {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of edges that made it into the scene.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// The node whose circle contains `(x, y)`, boundary included.
    ///
    /// When circles overlap the topmost (last drawn) node wins.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&'g NetworkNode> {
        self.target_at(x, y).map(|(node, _)| node)
    }

    /// Tooltip for the node under `(x, y)`, anchored above the node.
    pub fn tooltip(&self, x: f64, y: f64) -> Option<Tooltip> {
        self.target_at(x, y).map(|(node, center)| Tooltip {
            x: center.x,
            y: center.y - self.tooltip_offset,
            text: format!("{} ({})", node.display_label(), node.node_type),
        })
    }

    fn target_at(&self, x: f64, y: f64) -> Option<(&'g NetworkNode, Point)> {
        let probe = Point::new(x, y);
        self.targets
            .iter()
            .rev()
            .find(|(_, center)| center.distance_to(probe) <= self.node_radius)
            .copied()
    }
}

// ─── GraphRenderer ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct GraphRenderer {
    config: RenderConfig,
}

impl GraphRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render<'g>(&self, graph: &'g CitationGraph, positions: &Positions) -> Scene<'g> {
        let mut commands = Vec::new();

        for edge in graph.edges() {
            let (Some(source), Some(target)) = (
                anchor(graph, positions, &edge.source),
                anchor(graph, positions, &edge.target),
            ) else {
                continue;
            };
            commands.push(DrawCommand::Line {
                x1: source.x,
                y1: source.y,
                x2: target.x,
                y2: target.y,
            });
        }

        let mut targets = Vec::with_capacity(graph.node_count());
        for node in graph.nodes() {
            let Some(center) = positions.get(&node.id) else {
                continue;
            };
            commands.push(DrawCommand::Circle {
                x: center.x,
                y: center.y,
                radius: self.config.node_radius,
                fill: Fill::for_type(node.node_type),
            });
            commands.push(DrawCommand::Label {
                x: center.x,
                y: center.y + self.config.label_offset,
                text: node.display_label().to_string(),
            });
            targets.push((node, center));
        }

        debug!(
            commands = commands.len(),
            nodes = targets.len(),
            "rendered citation graph"
        );

        Scene {
            commands,
            targets,
            node_radius: self.config.node_radius,
            tooltip_offset: self.config.tooltip_offset,
        }
    }
}

/// Position of a known node, or `None` for dangling or unplaced ids.
fn anchor(graph: &CitationGraph, positions: &Positions, id: &str) -> Option<Point> {
    if !graph.contains(id) {
        return None;
    }
    positions.get(id)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_scene.rs"]
mod tests;
