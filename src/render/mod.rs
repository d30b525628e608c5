//! Rendering of generated mazes
//!
//! Two consumers of the core's read-only snapshot: text renderers for the
//! terminal and the output file, and a GIF exporter that replays the carve
//! history frame by frame.

/// Animated GIF export replaying the carve history
pub mod animation;
/// Plain and block-character text renderers
pub mod ascii;
