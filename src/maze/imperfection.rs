//! Loop-punching pass for imperfect mazes
//!
//! Removes a handful of extra walls from a finished perfect maze so the
//! result contains cycles. Glyph cells are never touched, on either side of
//! a removed wall.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::configuration::{LOOP_ATTEMPT_BUDGET, LOOP_RATIO};
use crate::maze::grid::{Direction, WallGrid};
use crate::maze::pattern::GlyphPattern;

/// Candidate directions considered for each randomly drawn cell
const WALL_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Number of walls the pass tries to remove for the given dimensions
pub fn loop_target(width: usize, height: usize) -> usize {
    let scaled = ((width * height) as f64 * LOOP_RATIO).floor() as usize;
    scaled.max(1)
}

/// Punch loops into a carved grid by removing extra walls at random
///
/// Draws random cells until the target count is reached or the attempt
/// budget runs out; falling short of the target is accepted. Every removal
/// is appended to the grid's history like any carving step.
pub fn punch_loops(grid: &mut WallGrid, pattern: &GlyphPattern, rng: &mut StdRng) {
    let target = loop_target(grid.width(), grid.height());
    let mut removed = 0;
    let mut attempts = 0;

    while removed < target && attempts < LOOP_ATTEMPT_BUDGET {
        attempts += 1;

        let x = rng.random_range(0..grid.width());
        let y = rng.random_range(0..grid.height());

        if pattern.contains(x, y) {
            continue;
        }

        let candidates = standing_walls(grid, x, y);
        if candidates.is_empty() {
            continue;
        }

        let pick = rng.random_range(0..candidates.len());
        let Some(&direction) = candidates.get(pick) else {
            continue;
        };
        let Some((nx, ny)) = grid.neighbor(x, y, direction) else {
            continue;
        };
        if pattern.contains(nx, ny) {
            continue;
        }

        grid.remove_wall(x, y, direction);
        removed += 1;
    }
}

/// Directions in which (x, y) still has a wall towards an in-bounds neighbor
fn standing_walls(grid: &WallGrid, x: usize, y: usize) -> Vec<Direction> {
    WALL_ORDER
        .into_iter()
        .filter(|&direction| {
            grid.neighbor(x, y, direction).is_some() && grid.has_wall(x, y, direction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::loop_target;

    #[test]
    fn test_loop_target_floors_at_one() {
        assert_eq!(loop_target(3, 3), 1);
        assert_eq!(loop_target(5, 5), 1);
    }

    #[test]
    fn test_loop_target_scales_with_area() {
        assert_eq!(loop_target(10, 10), 3);
        assert_eq!(loop_target(20, 20), 12);
        assert_eq!(loop_target(25, 40), 30);
    }
}
