//! Layout types: Point and Positions.

use std::collections::HashMap;

use serde::Serialize;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

// ─── Positions ───────────────────────────────────────────────────────────────

/// Node id → position, as computed by a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Positions {
    by_id: HashMap<String, Point>,
}

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, point: Point) {
        self.by_id.insert(id.into(), point);
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.by_id.iter().map(|(k, &p)| (k.as_str(), p))
    }
}

impl FromIterator<(String, Point)> for Positions {
    fn from_iter<I: IntoIterator<Item = (String, Point)>>(iter: I) -> Self {
        Self {
            by_id: iter.into_iter().collect(),
        }
    }
}
