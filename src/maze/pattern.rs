//! Centered "42" glyph reservation
//!
//! The glyph is defined as two digit shapes in a 7x5 bounding box. Cells it
//! covers are handed to the carver as pre-visited, so they stay fully walled
//! and read as solid pixels in the finished maze.

use std::collections::HashSet;

/// Relative cells of the compact digit '4' (3 wide, 5 high)
const DIGIT_FOUR: [(usize, usize); 9] = [
    (0, 0),
    (2, 0),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 3),
    (2, 4),
];

/// Relative cells of the compact digit '2' (3 wide, 5 high)
const DIGIT_TWO: [(usize, usize); 11] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (0, 3),
    (0, 4),
    (1, 4),
    (2, 4),
];

/// Horizontal offset of the second digit: 3 cells of digit plus a 1-cell gap
const SECOND_DIGIT_SHIFT: usize = 4;
/// Glyph bounding box width (two digits and the gap between them)
pub const GLYPH_WIDTH: usize = 7;
/// Glyph bounding box height
pub const GLYPH_HEIGHT: usize = 5;
/// Required clearance between the glyph and every grid edge
pub const GLYPH_MARGIN: usize = 1;

/// Placement result for the embedded glyph
///
/// Placement depends only on the grid dimensions, never on the random
/// source, so identical dimensions always reserve identical cells.
#[derive(Debug, Clone, Default)]
pub struct GlyphPattern {
    cells: HashSet<(usize, usize)>,
    failed: bool,
}

impl GlyphPattern {
    /// Reserve cells for the glyph centered in a width x height grid
    ///
    /// When the grid cannot hold the glyph plus its margin the returned
    /// pattern is empty with the failure flag set; generation continues
    /// without the glyph.
    pub fn embed(width: usize, height: usize) -> Self {
        if width < GLYPH_WIDTH + 2 * GLYPH_MARGIN || height < GLYPH_HEIGHT + 2 * GLYPH_MARGIN {
            return Self {
                cells: HashSet::new(),
                failed: true,
            };
        }

        let offset_x = (width - GLYPH_WIDTH) / 2;
        let offset_y = (height - GLYPH_HEIGHT) / 2;

        let mut cells = HashSet::with_capacity(DIGIT_FOUR.len() + DIGIT_TWO.len());
        for (dx, dy) in DIGIT_FOUR {
            cells.insert((offset_x + dx, offset_y + dy));
        }
        for (dx, dy) in DIGIT_TWO {
            cells.insert((offset_x + dx + SECOND_DIGIT_SHIFT, offset_y + dy));
        }

        Self {
            cells,
            failed: false,
        }
    }

    /// Whether the cell at (x, y) belongs to the glyph
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }

    /// All absolute cells reserved for the glyph
    pub const fn cells(&self) -> &HashSet<(usize, usize)> {
        &self.cells
    }

    /// Whether the glyph did not fit the grid dimensions
    pub const fn failed(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::{GLYPH_HEIGHT, GLYPH_MARGIN, GLYPH_WIDTH, GlyphPattern};

    #[test]
    fn test_embed_is_deterministic_for_fixed_dimensions() {
        let a = GlyphPattern::embed(15, 11);
        let b = GlyphPattern::embed(15, 11);

        assert!(!a.failed());
        assert!(!a.cells().is_empty());
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_embed_stays_clear_of_every_edge() {
        let pattern = GlyphPattern::embed(9, 7);

        assert!(!pattern.failed());
        for &(x, y) in pattern.cells() {
            assert!(x >= GLYPH_MARGIN && x < 9 - GLYPH_MARGIN);
            assert!(y >= GLYPH_MARGIN && y < 7 - GLYPH_MARGIN);
        }
    }

    #[test]
    fn test_embed_fails_below_minimum_fit() {
        let narrow = GlyphPattern::embed(GLYPH_WIDTH + 2 * GLYPH_MARGIN - 1, 20);
        let short = GlyphPattern::embed(20, GLYPH_HEIGHT + 2 * GLYPH_MARGIN - 1);

        assert!(narrow.failed());
        assert!(narrow.cells().is_empty());
        assert!(short.failed());
        assert!(short.cells().is_empty());
    }
}
