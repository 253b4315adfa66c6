//! Layout engine — assigns 2D positions to citation-network nodes.

pub mod circular;
pub mod types;

pub use circular::{RADIUS_FACTOR, circular_layout};
pub use types::{Point, Positions};
