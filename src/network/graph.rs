//! CitationGraph — node and edge sets of the citation network.
//!
//! Nodes live in a petgraph `DiGraph` (insertion order = index order) with
//! an id → `NodeIndex` map for lookup. Every input edge is kept, but only
//! edges whose endpoints both resolve are mirrored into the `DiGraph`.

use std::collections::{BTreeMap, HashMap};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::{debug, warn};

use super::types::{NetworkEdge, NetworkNode, NodeType};
use crate::layout::{Positions, circular_layout};

/// Degree above which a citation source counts as a key transmitter.
pub const TRANSMITTER_DEGREE: usize = 3;

// ─── GraphStats ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Only categories that occur are present.
    pub count_by_type: BTreeMap<NodeType, usize>,
}

impl GraphStats {
    pub fn count(&self, node_type: NodeType) -> usize {
        self.count_by_type.get(&node_type).copied().unwrap_or(0)
    }
}

// ─── CitationGraph ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    digraph: DiGraph<NetworkNode, ()>,
    node_index: HashMap<String, NodeIndex>,
    edges: Vec<NetworkEdge>,
}

impl CitationGraph {
    /// Build a graph from decoded nodes and edges.
    ///
    /// A node whose id was already seen is dropped; the first one wins.
    pub fn new(nodes: Vec<NetworkNode>, edges: Vec<NetworkEdge>) -> Self {
        let mut digraph: DiGraph<NetworkNode, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for node in nodes {
            if node_index.contains_key(&node.id) {
                warn!(id = %node.id, "duplicate node id, keeping the first");
                continue;
            }
            let id = node.id.clone();
            let idx = digraph.add_node(node);
            node_index.insert(id, idx);
        }

        let mut dangling = 0usize;
        for edge in &edges {
            match (node_index.get(&edge.source), node_index.get(&edge.target)) {
                (Some(&a), Some(&b)) => {
                    digraph.add_edge(a, b, ());
                }
                _ => dangling += 1,
            }
        }

        debug!(
            nodes = digraph.node_count(),
            edges = edges.len(),
            dangling,
            "built citation graph"
        );

        Self {
            digraph,
            node_index,
            edges,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0 && self.edges.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NetworkNode> {
        self.digraph.node_indices().map(|idx| &self.digraph[idx])
    }

    /// Every input edge, including ones naming unknown ids.
    pub fn edges(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.edges.iter()
    }

    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Both endpoints of `edge`, or `None` if either id is unknown.
    pub fn resolve(&self, edge: &NetworkEdge) -> Option<(&NetworkNode, &NetworkNode)> {
        Some((self.node(&edge.source)?, self.node(&edge.target)?))
    }

    pub fn dangling_edges(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.edges.iter().filter(|e| self.resolve(e).is_none())
    }

    /// Totals plus a per-type node count; unknown types count as `other`.
    pub fn stats(&self) -> GraphStats {
        let mut count_by_type: BTreeMap<NodeType, usize> = BTreeMap::new();
        for node in self.nodes() {
            *count_by_type.entry(node.node_type).or_insert(0) += 1;
        }
        GraphStats {
            total_nodes: self.node_count(),
            total_edges: self.edge_count(),
            count_by_type,
        }
    }

    /// Number of edge endpoints naming `id`, counted over every input edge.
    ///
    /// A self-loop contributes two.
    pub fn degree(&self, id: &str) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.source == id) + usize::from(e.target == id))
            .sum()
    }

    /// Sorted ids of resolved outgoing neighbours.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Outgoing)
    }

    /// Sorted ids of resolved incoming neighbours.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Incoming)
    }

    fn neighbours(&self, id: &str, dir: Direction) -> Vec<&str> {
        match self.node_index.get(id) {
            None => vec![],
            Some(&idx) => {
                let mut result: Vec<&str> = self
                    .digraph
                    .neighbors_directed(idx, dir)
                    .map(|n| self.digraph[n].id.as_str())
                    .collect();
                result.sort_unstable();
                result
            }
        }
    }

    /// Up to `limit` nodes ranked by degree, highest first; ties keep
    /// insertion order.
    pub fn most_connected(&self, limit: usize) -> Vec<(&NetworkNode, usize)> {
        let mut ranked: Vec<(&NetworkNode, usize)> =
            self.nodes().map(|n| (n, self.degree(&n.id))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Citation sources cited often enough to act as transmission hubs.
    pub fn transmitter_candidates(&self) -> Vec<&NetworkNode> {
        self.nodes()
            .filter(|n| n.node_type == NodeType::CitationSource)
            .filter(|n| self.degree(&n.id) > TRANSMITTER_DEGREE)
            .collect()
    }

    /// Place every node on a circle inside a `width` × `height` area.
    pub fn layout(&self, width: f64, height: f64) -> Positions {
        circular_layout(self.nodes(), width, height)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_network_graph.rs"]
mod tests;
