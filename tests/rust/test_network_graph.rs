use super::*;

fn node(id: &str, t: NodeType) -> NetworkNode {
    NetworkNode::new(id, t)
}

fn edge(from: &str, to: &str) -> NetworkEdge {
    NetworkEdge::new(from, to)
}

fn example_graph() -> CitationGraph {
    CitationGraph::new(
        vec![node("a", NodeType::LostWork), node("b", NodeType::CitationSource)],
        vec![edge("a", "b"), edge("a", "z")],
    )
}

// ── Construction ──────────────────────────────────────────────────────────

#[test]
fn test_empty_graph() {
    let g = CitationGraph::default();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.stats(), GraphStats::default());
}

#[test]
fn test_insertion_order_preserved() {
    let g = CitationGraph::new(
        vec![
            node("c", NodeType::Other),
            node("a", NodeType::Other),
            node("b", NodeType::Other),
        ],
        vec![],
    );
    let ids: Vec<&str> = g.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_duplicate_ids_keep_first() {
    let g = CitationGraph::new(
        vec![
            node("a", NodeType::LostWork).with_label("first"),
            node("a", NodeType::Other).with_label("second"),
        ],
        vec![],
    );
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.node("a").unwrap().display_label(), "first");
}

// ── Stats ─────────────────────────────────────────────────────────────────

#[test]
fn test_stats_example() {
    let stats = example_graph().stats();
    assert_eq!(stats.total_nodes, 2);
    assert_eq!(stats.total_edges, 2);
    assert_eq!(stats.count(NodeType::LostWork), 1);
    assert_eq!(stats.count(NodeType::CitationSource), 1);
    assert_eq!(stats.count(NodeType::KeyTransmitter), 0);
    assert_eq!(stats.count_by_type.len(), 2);
}

#[test]
fn test_stats_counts_sum_to_total() {
    let g = CitationGraph::new(
        vec![
            node("a", NodeType::LostWork),
            node("b", NodeType::Other),
            node("c", NodeType::KeyTransmitter),
            node("d", NodeType::Other),
            node("e", NodeType::CitationSource),
        ],
        vec![edge("a", "b")],
    );
    let stats = g.stats();
    let sum: usize = stats.count_by_type.values().sum();
    assert_eq!(sum, stats.total_nodes);
    assert_eq!(stats.count(NodeType::Other), 2);
}

#[test]
fn test_stats_serialize_camel_case() {
    let json = serde_json::to_value(example_graph().stats()).unwrap();
    assert_eq!(json["totalNodes"], 2);
    assert_eq!(json["totalEdges"], 2);
    assert_eq!(json["countByType"]["lost_work"], 1);
    assert_eq!(json["countByType"]["citation_source"], 1);
}

// ── Resolution ────────────────────────────────────────────────────────────

#[test]
fn test_resolve_and_dangling() {
    let g = example_graph();
    let edges: Vec<&NetworkEdge> = g.edges().collect();
    let (s, t) = g.resolve(edges[0]).unwrap();
    assert_eq!((s.id.as_str(), t.id.as_str()), ("a", "b"));
    assert!(g.resolve(edges[1]).is_none());
    let dangling: Vec<&NetworkEdge> = g.dangling_edges().collect();
    assert_eq!(dangling, vec![&edge("a", "z")]);
}

// ── Degree metrics ────────────────────────────────────────────────────────

#[test]
fn test_degree_counts_all_edges() {
    let g = example_graph();
    assert_eq!(g.degree("a"), 2);
    assert_eq!(g.degree("b"), 1);
    assert_eq!(g.degree("z"), 1);
    assert_eq!(g.degree("missing"), 0);
}

#[test]
fn test_degree_self_loop_counts_twice() {
    let g = CitationGraph::new(vec![node("a", NodeType::Other)], vec![edge("a", "a")]);
    assert_eq!(g.degree("a"), 2);
}

#[test]
fn test_successors_and_predecessors() {
    let g = CitationGraph::new(
        vec![
            node("a", NodeType::Other),
            node("c", NodeType::Other),
            node("b", NodeType::Other),
        ],
        vec![edge("a", "c"), edge("a", "b"), edge("b", "c"), edge("a", "ghost")],
    );
    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.predecessors("c"), vec!["a", "b"]);
    assert!(g.predecessors("a").is_empty());
    assert!(g.successors("ghost").is_empty());
}

#[test]
fn test_most_connected() {
    let g = CitationGraph::new(
        vec![
            node("x", NodeType::Other),
            node("hub", NodeType::Other),
            node("y", NodeType::Other),
        ],
        vec![edge("hub", "x"), edge("hub", "y"), edge("x", "y")],
    );
    let ranked: Vec<(&str, usize)> = g
        .most_connected(2)
        .into_iter()
        .map(|(n, d)| (n.id.as_str(), d))
        .collect();
    assert_eq!(ranked, vec![("x", 2), ("hub", 2)]);
}

#[test]
fn test_transmitter_candidates() {
    let nodes = vec![
        node("strabo", NodeType::CitationSource),
        node("ptolemy", NodeType::CitationSource),
        node("w1", NodeType::LostWork),
        node("w2", NodeType::LostWork),
        node("w3", NodeType::LostWork),
        node("w4", NodeType::LostWork),
    ];
    let edges = vec![
        edge("w1", "strabo"),
        edge("w2", "strabo"),
        edge("w3", "strabo"),
        edge("w4", "strabo"),
        edge("w1", "ptolemy"),
    ];
    let g = CitationGraph::new(nodes, edges);
    let ids: Vec<&str> = g
        .transmitter_candidates()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["strabo"]);
}

// ── Layout ────────────────────────────────────────────────────────────────

#[test]
fn test_layout_covers_every_node() {
    let g = example_graph();
    let pos = g.layout(800.0, 500.0);
    assert_eq!(pos.len(), 2);
    assert!(pos.get("a").is_some());
    assert!(pos.get("z").is_none());
}
