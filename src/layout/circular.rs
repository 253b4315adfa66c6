//! Circular placement of citation-network nodes.
//!
//! Node `i` of `n` sits at angle `2π·i/n` on a circle of radius
//! `0.3 · min(width, height)` around the center of the drawing area.

use std::f64::consts::TAU;

use tracing::debug;

use super::types::{Point, Positions};
use crate::network::NetworkNode;

/// Circle radius as a fraction of the shorter side of the drawing area.
pub const RADIUS_FACTOR: f64 = 0.3;

/// Compute positions for `nodes` in iteration order.
///
/// An empty node sequence yields empty positions.
pub fn circular_layout<'a, I>(nodes: I, width: f64, height: f64) -> Positions
where
    I: IntoIterator<Item = &'a NetworkNode>,
{
    let nodes: Vec<&NetworkNode> = nodes.into_iter().collect();
    let n = nodes.len();
    if n == 0 {
        return Positions::new();
    }

    let center = Point::new(width / 2.0, height / 2.0);
    let radius = width.min(height) * RADIUS_FACTOR;

    let positions: Positions = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let angle = (i as f64 / n as f64) * TAU;
            let p = center.offset(radius * angle.cos(), radius * angle.sin());
            (node.id.clone(), p)
        })
        .collect();

    debug!(nodes = n, radius, "circular layout");
    positions
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_circular.rs"]
mod tests;
