//! Randomized depth-first maze generation with a replayable carve history
//!
//! The generator carves a spanning tree into a fully-walled bitmask grid,
//! reserves cells for an embedded "42" glyph, optionally punches extra loops
//! into the result, and records every wall removal so the whole run can be
//! replayed step by step as an animation.

#![forbid(unsafe_code)]

/// Input/output operations, configuration loading, and error handling
pub mod io;
/// Core maze generation: grid model, glyph embedding, carving, and validation
pub mod maze;
/// ASCII and animated GIF rendering of generated mazes
pub mod render;

pub use io::error::{MazeError, Result};
