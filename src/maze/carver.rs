//! Randomized depth-first maze carving session
//!
//! A [`MazeGenerator`] owns the wall grid, the glyph reservation, and a
//! seeded random source. Every `generate` call resets all of them and carves
//! a fresh spanning tree with an explicit-stack backtracker; glyph cells are
//! pre-marked visited so the traversal never enters them.

use bitvec::vec::BitVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::error::{MazeError, Result};
use crate::maze::boundary::validate_endpoints;
use crate::maze::grid::{Direction, WallGrid};
use crate::maze::imperfection::punch_loops;
use crate::maze::pattern::GlyphPattern;

/// Smallest grid dimension the generator accepts
pub const MIN_DIMENSION: usize = 3;

/// Candidate directions in the order neighbors are enumerated
const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Maze generation session over an exclusively owned grid
///
/// The session is single-threaded and synchronous; re-running `generate`
/// fully resets grid, history, and pattern state, so the same seed and
/// dimensions always reproduce the same maze.
#[derive(Debug)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
    grid: WallGrid,
    pattern: GlyphPattern,
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a session for a width x height maze with a fixed seed
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::DimensionsTooSmall`] when either dimension is
    /// below [`MIN_DIMENSION`].
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(MazeError::DimensionsTooSmall { width, height });
        }

        Ok(Self {
            width,
            height,
            grid: WallGrid::new(width, height),
            pattern: GlyphPattern::default(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Carve a new maze, replacing any previous grid, history, and pattern
    ///
    /// Carving starts from (0, 0) and produces a spanning tree over every
    /// reachable non-glyph cell. With `perfect` set to false the
    /// loop-punching pass runs afterwards, recording its removals in the
    /// same history.
    pub fn generate(&mut self, perfect: bool) {
        self.grid.reset();
        self.pattern = GlyphPattern::embed(self.width, self.height);

        let mut visited: BitVec = BitVec::repeat(false, self.width * self.height);
        let mut stack = vec![(0_usize, 0_usize)];
        self.mark_visited(&mut visited, 0, 0);

        for &(x, y) in self.pattern.cells() {
            self.mark_visited(&mut visited, x, y);
        }

        while let Some(&(x, y)) = stack.last() {
            let candidates = self.unvisited_neighbors(x, y, &visited);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let pick = self.rng.random_range(0..candidates.len());
            let Some(&(nx, ny, direction)) = candidates.get(pick) else {
                break;
            };

            self.grid.remove_wall(x, y, direction);
            self.mark_visited(&mut visited, nx, ny);
            stack.push((nx, ny));
        }

        if !perfect {
            punch_loops(&mut self.grid, &self.pattern, &mut self.rng);
        }
    }

    /// Re-validate entry and exit against this maze's dimensions
    ///
    /// The configuration loader already checks these rules; the core checks
    /// them again as its own contract with the caller.
    ///
    /// # Errors
    ///
    /// Returns the boundary violation described in
    /// [`validate_endpoints`](crate::maze::boundary::validate_endpoints).
    pub fn set_entry_exit(&self, entry: (usize, usize), exit: (usize, usize)) -> Result<()> {
        validate_endpoints(entry, exit, self.width, self.height)
    }

    /// Maze width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Maze height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the carved grid and its history
    pub const fn grid(&self) -> &WallGrid {
        &self.grid
    }

    /// Glyph placement produced by the most recent `generate` call
    pub const fn pattern(&self) -> &GlyphPattern {
        &self.pattern
    }

    fn mark_visited(&self, visited: &mut BitVec, x: usize, y: usize) {
        visited.set(y * self.width + x, true);
    }

    fn is_visited(&self, visited: &BitVec, x: usize, y: usize) -> bool {
        visited
            .get(y * self.width + x)
            .is_some_and(|cell| *cell)
    }

    /// Unvisited in-bounds neighbors of (x, y), in fixed enumeration order
    ///
    /// The fixed order plus the single uniform index draw in `generate` is
    /// what makes runs reproducible for a given seed.
    fn unvisited_neighbors(
        &self,
        x: usize,
        y: usize,
        visited: &BitVec,
    ) -> Vec<(usize, usize, Direction)> {
        let mut neighbors = Vec::with_capacity(4);
        for direction in NEIGHBOR_ORDER {
            if let Some((nx, ny)) = self.grid.neighbor(x, y, direction) {
                if !self.is_visited(visited, nx, ny) {
                    neighbors.push((nx, ny, direction));
                }
            }
        }
        neighbors
    }
}
