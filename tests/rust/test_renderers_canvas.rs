use super::*;

#[test]
fn test_canvas_set_get() {
    let mut c = Canvas::new(5, 5);
    c.set(Cell::new(2, 3), 'X');
    assert_eq!(c.get(Cell::new(2, 3)), 'X');
    assert_eq!(c.get(Cell::new(0, 0)), ' ');
}

#[test]
fn test_canvas_set_out_of_bounds() {
    let mut c = Canvas::new(3, 3);
    // Should not panic
    c.set(Cell::new(10, 10), 'X');
    c.set(Cell::new(-1, 0), 'X');
    assert_eq!(c.get(Cell::new(10, 10)), ' ');
    assert_eq!(c.get(Cell::new(-1, 0)), ' ');
}

#[test]
fn test_canvas_horizontal_line() {
    let mut c = Canvas::new(10, 5);
    c.line(Cell::new(5, 2), Cell::new(1, 2), '-');
    for col in 1..=5 {
        assert_eq!(c.get(Cell::new(col, 2)), '-');
    }
    assert_eq!(c.get(Cell::new(0, 2)), ' ');
    assert_eq!(c.get(Cell::new(6, 2)), ' ');
}

#[test]
fn test_canvas_vertical_line() {
    let mut c = Canvas::new(5, 10);
    c.line(Cell::new(3, 1), Cell::new(3, 4), '|');
    for row in 1..=4 {
        assert_eq!(c.get(Cell::new(3, row)), '|');
    }
}

#[test]
fn test_canvas_diagonal_line() {
    let mut c = Canvas::new(5, 5);
    c.line(Cell::new(0, 0), Cell::new(3, 3), '\\');
    for i in 0..=3 {
        assert_eq!(c.get(Cell::new(i, i)), '\\');
    }
    assert_eq!(c.get(Cell::new(1, 0)), ' ');
}

#[test]
fn test_canvas_line_clipped() {
    let mut c = Canvas::new(3, 1);
    c.line(Cell::new(-5, 0), Cell::new(5, 0), '-');
    assert_eq!(c.render_to_string(), "---\n");
}

#[test]
fn test_canvas_write_str_clips() {
    let mut c = Canvas::new(4, 1);
    c.write_str(Cell::new(1, 0), "abcdef");
    assert_eq!(c.render_to_string(), " abc\n");
}

#[test]
fn test_canvas_write_centered() {
    let mut c = Canvas::new(9, 1);
    c.write_centered(Cell::new(4, 0), "abc");
    assert_eq!(c.render_to_string(), "   abc\n");
}

#[test]
fn test_canvas_render_trims() {
    let mut c = Canvas::new(6, 4);
    c.set(Cell::new(0, 0), 'a');
    c.set(Cell::new(2, 1), 'b');
    assert_eq!(c.render_to_string(), "a\n  b\n");
    assert_eq!(c.to_string(), "a\n  b\n");
}
