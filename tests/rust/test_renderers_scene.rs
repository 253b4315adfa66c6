use super::*;
use crate::network::{NetworkEdge, NodeType};

fn example_graph() -> CitationGraph {
    CitationGraph::new(
        vec![
            NetworkNode::new("a", NodeType::LostWork).with_label("Geographika"),
            NetworkNode::new("b", NodeType::CitationSource),
        ],
        vec![NetworkEdge::new("a", "b"), NetworkEdge::new("a", "z")],
    )
}

fn fixed_positions() -> Positions {
    let mut pos = Positions::new();
    pos.insert("a", Point::new(100.0, 100.0));
    pos.insert("b", Point::new(300.0, 100.0));
    pos
}

// ── Commands ──────────────────────────────────────────────────────────────

#[test]
fn test_dangling_edge_dropped() {
    let g = example_graph();
    let scene = GraphRenderer::default().render(&g, &g.layout(800.0, 500.0));
    assert_eq!(scene.line_count(), 1);
}

#[test]
fn test_command_order_and_values() {
    let g = example_graph();
    let scene = GraphRenderer::default().render(&g, &fixed_positions());
    assert_eq!(
        scene.commands(),
        &[
            DrawCommand::Line {
                x1: 100.0,
                y1: 100.0,
                x2: 300.0,
                y2: 100.0
            },
            DrawCommand::Circle {
                x: 100.0,
                y: 100.0,
                radius: 20.0,
                fill: Fill::Red
            },
            DrawCommand::Label {
                x: 100.0,
                y: 135.0,
                text: "Geographika".to_string()
            },
            DrawCommand::Circle {
                x: 300.0,
                y: 100.0,
                radius: 20.0,
                fill: Fill::Blue
            },
            DrawCommand::Label {
                x: 300.0,
                y: 135.0,
                text: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_fill_per_type() {
    let g = CitationGraph::new(
        vec![
            NetworkNode::new("k", NodeType::KeyTransmitter),
            NetworkNode::new("o", NodeType::Other),
        ],
        vec![],
    );
    let scene = GraphRenderer::default().render(&g, &g.layout(400.0, 400.0));
    let fills: Vec<Fill> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![Fill::Gold, Fill::Gray]);
}

#[test]
fn test_unpositioned_node_skipped() {
    let g = example_graph();
    let mut pos = Positions::new();
    pos.insert("a", Point::new(10.0, 10.0));
    let scene = GraphRenderer::default().render(&g, &pos);
    assert_eq!(scene.line_count(), 0);
    assert_eq!(scene.commands().len(), 2);
    assert!(scene.hit_test(300.0, 100.0).is_none());
}

#[test]
fn test_position_for_unknown_id_is_not_drawn() {
    let g = example_graph();
    let mut pos = fixed_positions();
    pos.insert("z", Point::new(500.0, 500.0));
    let scene = GraphRenderer::default().render(&g, &pos);
    assert_eq!(scene.line_count(), 1);
}

#[test]
fn test_empty_graph_renders_nothing() {
    let g = CitationGraph::default();
    let scene = GraphRenderer::default().render(&g, &g.layout(800.0, 500.0));
    assert!(scene.commands().is_empty());
    assert!(scene.hit_test(400.0, 250.0).is_none());
}

#[test]
fn test_custom_radius_and_offset() {
    let config = RenderConfig {
        node_radius: 5.0,
        label_offset: 10.0,
        ..RenderConfig::default()
    };
    let g = example_graph();
    let scene = GraphRenderer::new(config).render(&g, &fixed_positions());
    assert!(scene.commands().contains(&DrawCommand::Label {
        x: 100.0,
        y: 110.0,
        text: "Geographika".to_string()
    }));
    assert!(scene.hit_test(110.0, 100.0).is_none());
}

// ── Hit-testing ───────────────────────────────────────────────────────────

#[test]
fn test_hit_test_inside_and_boundary() {
    let g = example_graph();
    let scene = GraphRenderer::default().render(&g, &fixed_positions());
    assert_eq!(scene.hit_test(100.0, 100.0).map(|n| n.id.as_str()), Some("a"));
    assert_eq!(scene.hit_test(120.0, 100.0).map(|n| n.id.as_str()), Some("a"));
    assert_eq!(scene.hit_test(295.0, 110.0).map(|n| n.id.as_str()), Some("b"));
    assert!(scene.hit_test(121.0, 100.0).is_none());
    assert!(scene.hit_test(200.0, 100.0).is_none());
}

#[test]
fn test_hit_test_overlap_returns_topmost() {
    let g = CitationGraph::new(
        vec![
            NetworkNode::new("under", NodeType::Other),
            NetworkNode::new("over", NodeType::Other),
        ],
        vec![],
    );
    let mut pos = Positions::new();
    pos.insert("under", Point::new(50.0, 50.0));
    pos.insert("over", Point::new(60.0, 50.0));
    let scene = GraphRenderer::default().render(&g, &pos);
    assert_eq!(scene.hit_test(55.0, 50.0).map(|n| n.id.as_str()), Some("over"));
    assert_eq!(scene.hit_test(35.0, 50.0).map(|n| n.id.as_str()), Some("under"));
}

#[test]
fn test_tooltip() {
    let g = example_graph();
    let scene = GraphRenderer::default().render(&g, &fixed_positions());
    assert_eq!(
        scene.tooltip(105.0, 95.0),
        Some(Tooltip {
            x: 100.0,
            y: 60.0,
            text: "Geographika (lost_work)".to_string()
        })
    );
    assert_eq!(
        scene.tooltip(300.0, 100.0).map(|t| t.text),
        Some("b (citation_source)".to_string())
    );
    assert!(scene.tooltip(0.0, 0.0).is_none());
}

#[test]
fn test_empty_label_falls_back_to_id() {
    let g = CitationGraph::new(
        vec![NetworkNode::new("strabo", NodeType::CitationSource).with_label("")],
        vec![],
    );
    let mut pos = Positions::new();
    pos.insert("strabo", Point::new(100.0, 100.0));
    let scene = GraphRenderer::default().render(&g, &pos);

    let label = scene.commands().iter().find_map(|c| match c {
        DrawCommand::Label { text, .. } => Some(text.as_str()),
        _ => None,
    });
    assert_eq!(label, Some("strabo"));
    assert_eq!(
        scene.tooltip(100.0, 100.0).map(|t| t.text),
        Some("strabo (citation_source)".to_string())
    );
}
