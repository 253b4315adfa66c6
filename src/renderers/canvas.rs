//! Canvas — 2D character grid for the text preview.
//!
//! Coordinates are signed so callers can plot shapes that run off the grid;
//! out-of-bounds cells are silently clipped.

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A position in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    pub fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn index(&self, cell: Cell) -> Option<(usize, usize)> {
        let col = usize::try_from(cell.col).ok()?;
        let row = usize::try_from(cell.row).ok()?;
        (col < self.width && row < self.height).then_some((col, row))
    }

    pub fn get(&self, cell: Cell) -> char {
        self.index(cell).map_or(' ', |(c, r)| self.cells[r][c])
    }

    pub fn set(&mut self, cell: Cell, ch: char) {
        if let Some((c, r)) = self.index(cell) {
            self.cells[r][c] = ch;
        }
    }

    /// Draw a straight segment between two cells (Bresenham), endpoints
    /// included.
    pub fn line(&mut self, from: Cell, to: Cell, ch: char) {
        let dx = (to.col - from.col).abs();
        let dy = -(to.row - from.row).abs();
        let sx = if from.col < to.col { 1 } else { -1 };
        let sy = if from.row < to.row { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cur = from;
        loop {
            self.set(cur, ch);
            if cur == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cur.col += sx;
            }
            if e2 <= dx {
                err += dx;
                cur.row += sy;
            }
        }
    }

    /// Write a string starting at `cell`, clipping at the grid edges.
    pub fn write_str(&mut self, cell: Cell, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let Ok(offset) = i64::try_from(i) else { break };
            self.set(Cell::new(cell.col + offset, cell.row), ch);
        }
    }

    /// Write a string horizontally centered on `cell`.
    pub fn write_centered(&mut self, cell: Cell, s: &str) {
        let half = i64::try_from(s.chars().count() / 2).unwrap_or(0);
        self.write_str(Cell::new(cell.col - half, cell.row), s);
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        // Trim trailing empty lines
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
