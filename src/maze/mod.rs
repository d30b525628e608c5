//! Maze generation core
//!
//! This module contains the algorithmic heart of the crate:
//! - Bitmask wall grid and the append-only carve history
//! - The embedded "42" glyph reservation
//! - Randomized depth-first carving and the loop-punching pass
//! - Entry/exit boundary validation

/// Entry and exit point validation against grid bounds and borders
pub mod boundary;
/// Randomized depth-first backtracker driving the generation session
pub mod carver;
/// Wall bitmask grid and carve history storage
pub mod grid;
/// Loop-punching pass that turns a perfect maze into an imperfect one
pub mod imperfection;
/// Centered "42" glyph reservation over the grid
pub mod pattern;

pub use carver::MazeGenerator;
pub use grid::{Direction, WallGrid};
pub use pattern::GlyphPattern;
