//! Entry and exit point validation
//!
//! Entry and exit must sit on the outer perimeter of the grid and must not
//! coincide. These rules are checked independently of the randomized carve,
//! and the generation core re-checks them even when the configuration loader
//! already did.

use crate::io::error::{MazeError, Result};

/// Check that `point` lies inside the grid and on its outer perimeter
///
/// `name` identifies the point (for example "ENTRY") in error reports.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`] when the point lies outside
/// `[0, width) x [0, height)`, and [`MazeError::NotOnBorder`] when it is
/// inside the grid but not on the perimeter.
pub fn validate_border_point(
    point: (usize, usize),
    name: &'static str,
    width: usize,
    height: usize,
) -> Result<()> {
    let (x, y) = point;
    if x >= width || y >= height {
        return Err(MazeError::OutOfBounds {
            name,
            point,
            width,
            height,
        });
    }

    let on_border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
    if !on_border {
        return Err(MazeError::NotOnBorder { name, point });
    }

    Ok(())
}

/// Validate an entry/exit pair against the grid dimensions
///
/// # Errors
///
/// Returns the first failing border-point error, or
/// [`MazeError::EqualEndpoints`] when entry and exit coincide.
pub fn validate_endpoints(
    entry: (usize, usize),
    exit: (usize, usize),
    width: usize,
    height: usize,
) -> Result<()> {
    validate_border_point(entry, "ENTRY", width, height)?;
    validate_border_point(exit, "EXIT", width, height)?;

    if entry == exit {
        return Err(MazeError::EqualEndpoints { point: entry });
    }

    Ok(())
}
