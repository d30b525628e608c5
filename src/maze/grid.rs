//! Wall bitmask grid with an append-only carve history
//!
//! Each cell holds a 4-bit wall mask. Walls are always removed in matched
//! pairs (a direction bit on one cell, the opposite bit on its neighbor), and
//! every removal is recorded as one history step so the generation run can be
//! replayed later.

use ndarray::Array2;

/// Wall bit for the north edge of a cell
pub const NORTH: u8 = 1;
/// Wall bit for the east edge of a cell
pub const EAST: u8 = 2;
/// Wall bit for the south edge of a cell
pub const SOUTH: u8 = 4;
/// Wall bit for the west edge of a cell
pub const WEST: u8 = 8;
/// Mask of a fully walled cell
pub const ALL_WALLS: u8 = 15;

/// Compass direction from a cell towards one of its four grid neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards decreasing y
    North,
    /// Towards increasing x
    East,
    /// Towards increasing y
    South,
    /// Towards decreasing x
    West,
}

impl Direction {
    /// Wall bit this direction corresponds to
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => NORTH,
            Self::East => EAST,
            Self::South => SOUTH,
            Self::West => WEST,
        }
    }

    /// Direction seen from the neighboring cell looking back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Coordinate delta (dx, dy) for a single step in this direction
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

/// Post-removal wall mask for one cell, as recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    /// Cell x coordinate
    pub x: usize,
    /// Cell y coordinate
    pub y: usize,
    /// Wall mask of the cell after the removal
    pub walls: u8,
}

/// One atomic wall removal: the two cell updates on either side of the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveStep {
    /// Update for the cell the wall was removed from
    pub first: CellUpdate,
    /// Update for the neighbor on the far side of the wall
    pub second: CellUpdate,
}

/// Rectangular grid of wall bitmasks plus the ordered carve history
///
/// The grid is stored row-major as `[y, x]` and starts fully walled. It is
/// mutated only through [`WallGrid::remove_wall`], which keeps the paired-bit
/// invariant and the history in sync.
#[derive(Debug, Clone)]
pub struct WallGrid {
    cells: Array2<u8>,
    width: usize,
    height: usize,
    history: Vec<CarveStep>,
}

impl WallGrid {
    /// Create a fully walled grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), ALL_WALLS),
            width,
            height,
            history: Vec::new(),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Wall mask of the cell at (x, y), or `ALL_WALLS` when out of bounds
    pub fn walls(&self, x: usize, y: usize) -> u8 {
        self.cells.get([y, x]).copied().unwrap_or(ALL_WALLS)
    }

    /// Whether the cell at (x, y) currently has a wall in `direction`
    pub fn has_wall(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.walls(x, y) & direction.bit() != 0
    }

    /// Coordinates of the neighbor one step in `direction`, if inside the grid
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.delta();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        (nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height)
            .then_some((nx as usize, ny as usize))
    }

    /// Remove the wall between (x, y) and its neighbor in `direction`
    ///
    /// Clears the direction bit on (x, y) and the opposite bit on the
    /// neighbor, then appends one history step carrying both post-removal
    /// masks. The caller guarantees the neighbor exists; a step over the grid
    /// edge is ignored.
    pub fn remove_wall(&mut self, x: usize, y: usize, direction: Direction) {
        let Some((nx, ny)) = self.neighbor(x, y, direction) else {
            return;
        };

        if let Some(cell) = self.cells.get_mut([y, x]) {
            *cell &= !direction.bit();
        }
        if let Some(cell) = self.cells.get_mut([ny, nx]) {
            *cell &= !direction.opposite().bit();
        }

        let step = CarveStep {
            first: CellUpdate {
                x,
                y,
                walls: self.walls(x, y),
            },
            second: CellUpdate {
                x: nx,
                y: ny,
                walls: self.walls(nx, ny),
            },
        };
        self.history.push(step);
    }

    /// Overwrite both cells named by a history step with their recorded masks
    ///
    /// Used by replay consumers to rebuild the grid one step at a time on a
    /// fresh all-walled grid; updates naming out-of-bounds cells are ignored.
    pub fn apply_step(&mut self, step: &CarveStep) {
        for update in [step.first, step.second] {
            if let Some(cell) = self.cells.get_mut([update.y, update.x]) {
                *cell = update.walls;
            }
        }
    }

    /// Refill every cell with `ALL_WALLS` and clear the history
    pub fn reset(&mut self) {
        self.cells.fill(ALL_WALLS);
        self.history.clear();
    }

    /// Ordered carve history, one step per removed wall
    pub fn history(&self) -> &[CarveStep] {
        &self.history
    }
}
