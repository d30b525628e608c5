//! Text renderers for the bitmask grid
//!
//! `render` produces the classic `+---+` lattice; `render_thick` produces a
//! block-character view with wide cell bodies, shaded glyph cells, and
//! entry/exit markers.

use crate::maze::grid::{Direction, WallGrid};
use crate::maze::pattern::GlyphPattern;

const BLOCK: char = '█';
const SHADE: char = '▒';
const ENTRY_MARKER: &str = "  ●  ";
const EXIT_MARKER: &str = "  ◉  ";
/// Interior width of one cell in the thick rendering
const BODY_WIDTH: usize = 5;

/// Render the grid as a `+---+` / `|   |` ASCII lattice
pub fn render(grid: &WallGrid) -> String {
    let width = grid.width();
    let height = grid.height();
    let mut lines = Vec::with_capacity(2 * height + 1);

    for y in 0..height {
        let mut roof = String::new();
        let mut body = String::new();

        for x in 0..width {
            roof.push('+');
            roof.push_str(if grid.has_wall(x, y, Direction::North) {
                "---"
            } else {
                "   "
            });

            body.push(if grid.has_wall(x, y, Direction::West) {
                '|'
            } else {
                ' '
            });
            body.push_str("   ");
        }

        roof.push('+');
        body.push(if grid.has_wall(width - 1, y, Direction::East) {
            '|'
        } else {
            ' '
        });

        lines.push(roof);
        lines.push(body);
    }

    let mut bottom = String::new();
    for x in 0..width {
        bottom.push('+');
        bottom.push_str(if grid.has_wall(x, height - 1, Direction::South) {
            "---"
        } else {
            "   "
        });
    }
    bottom.push('+');
    lines.push(bottom);

    lines.join("\n")
}

/// Render the grid with block characters, shading glyph cells and marking
/// the entry (●) and exit (◉) cells
pub fn render_thick(
    grid: &WallGrid,
    pattern: &GlyphPattern,
    entry: Option<(usize, usize)>,
    exit: Option<(usize, usize)>,
) -> String {
    let width = grid.width();
    let height = grid.height();
    let mut lines = Vec::with_capacity(2 * height + 1);

    for y in 0..height {
        let mut top = String::new();
        let mut bottom = String::new();

        for x in 0..width {
            let shaded = pattern.contains(x, y);
            let brush = if shaded { SHADE } else { BLOCK };

            // Corner, then the north edge of the cell
            top.push(brush);
            if shaded {
                push_repeated(&mut top, brush, BODY_WIDTH);
            } else if grid.has_wall(x, y, Direction::North) {
                push_repeated(&mut top, BLOCK, BODY_WIDTH);
            } else {
                push_repeated(&mut top, ' ', BODY_WIDTH);
            }

            // West edge, then the cell body
            if shaded {
                bottom.push(brush);
                push_repeated(&mut bottom, brush, BODY_WIDTH);
            } else {
                bottom.push(if grid.has_wall(x, y, Direction::West) {
                    BLOCK
                } else {
                    ' '
                });
                if entry == Some((x, y)) {
                    bottom.push_str(ENTRY_MARKER);
                } else if exit == Some((x, y)) {
                    bottom.push_str(EXIT_MARKER);
                } else {
                    push_repeated(&mut bottom, ' ', BODY_WIDTH);
                }
            }
        }

        top.push(BLOCK);
        if pattern.contains(width - 1, y) {
            bottom.push(SHADE);
        } else {
            bottom.push(if grid.has_wall(width - 1, y, Direction::East) {
                BLOCK
            } else {
                ' '
            });
        }

        lines.push(top);
        lines.push(bottom);
    }

    let mut closure = String::new();
    for x in 0..width {
        closure.push(BLOCK);
        if pattern.contains(x, height - 1) {
            push_repeated(&mut closure, SHADE, BODY_WIDTH);
        } else if grid.has_wall(x, height - 1, Direction::South) {
            push_repeated(&mut closure, BLOCK, BODY_WIDTH);
        } else {
            push_repeated(&mut closure, ' ', BODY_WIDTH);
        }
    }
    closure.push(BLOCK);
    lines.push(closure);

    lines.join("\n")
}

fn push_repeated(target: &mut String, c: char, count: usize) {
    for _ in 0..count {
        target.push(c);
    }
}
