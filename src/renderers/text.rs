//! Text surface — rasterizes draw commands onto a character grid for a
//! terminal preview.
//!
//! Pixel coordinates are scaled down by the configured cell size. Edges are
//! painted with a slope-dependent stroke, nodes with a glyph per fill, and
//! labels centered under their node.

use super::canvas::{Canvas, Cell};
use super::{DrawCommand, Fill, Surface};
use crate::config::RenderConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    width: f64,
    height: f64,
    cell_width: f64,
    cell_height: f64,
}

impl TextSurface {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cell_width: config.cell_width.max(1.0),
            cell_height: config.cell_height.max(1.0),
        }
    }

    fn cell(&self, x: f64, y: f64) -> Cell {
        Cell::new(
            (x / self.cell_width).round() as i64,
            (y / self.cell_height).round() as i64,
        )
    }

    fn grid_size(&self) -> (usize, usize) {
        let cols = (self.width / self.cell_width).ceil().max(0.0) as usize;
        let rows = (self.height / self.cell_height).ceil().max(0.0) as usize;
        (cols + 1, rows + 1)
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Glyph painted at a node center.
pub fn glyph(fill: Fill) -> char {
    match fill {
        Fill::Red => '@',
        Fill::Blue => 'O',
        Fill::Gold => '*',
        Fill::Gray => 'o',
    }
}

/// Stroke character for a segment spanning `dc` columns and `dr` rows.
fn stroke(dc: i64, dr: i64) -> char {
    let (ac, ar) = (dc.abs(), dr.abs());
    if ar * 2 <= ac {
        '-'
    } else if ac * 2 <= ar {
        '|'
    } else if (dc > 0) == (dr > 0) {
        '\\'
    } else {
        '/'
    }
}

impl Surface for TextSurface {
    fn draw(&self, commands: &[DrawCommand]) -> String {
        let (cols, rows) = self.grid_size();
        let mut canvas = Canvas::new(cols, rows);

        for cmd in commands {
            match cmd {
                DrawCommand::Line { x1, y1, x2, y2 } => {
                    let from = self.cell(*x1, *y1);
                    let to = self.cell(*x2, *y2);
                    let ch = stroke(to.col - from.col, to.row - from.row);
                    canvas.line(from, to, ch);
                }
                DrawCommand::Circle { x, y, fill, .. } => {
                    canvas.set(self.cell(*x, *y), glyph(*fill));
                }
                DrawCommand::Label { x, y, text } => {
                    canvas.write_centered(self.cell(*x, *y), text);
                }
            }
        }

        canvas.render_to_string()
    }
}
