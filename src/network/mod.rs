//! Citation network: typed records, the graph itself, and JSON decoding.

mod decode;
pub mod graph;
pub mod types;

pub use graph::{CitationGraph, GraphStats, TRANSMITTER_DEGREE};
pub use types::{NetworkEdge, NetworkNode, NodeType};
