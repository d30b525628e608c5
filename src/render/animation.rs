//! Animated GIF export replaying the carve history
//!
//! The exporter rebuilds the maze on a fresh all-walled grid by applying the
//! recorded carve steps in order, rendering one frame per step. Frames are
//! drawn on a lattice of (2·width+1) x (2·height+1) units: odd coordinates
//! are cell interiors, even coordinates are walls and corners.

use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{ANIMATION_SCALE, GIF_FRAME_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result};
use crate::io::progress::ReplayProgress;
use crate::maze::grid::{Direction, WallGrid};
use crate::maze::pattern::GlyphPattern;

const WALL_COLOR: Rgba<u8> = Rgba([24, 24, 24, 255]);
const PASSAGE_COLOR: Rgba<u8> = Rgba([232, 232, 232, 255]);
const PATTERN_COLOR: Rgba<u8> = Rgba([255, 215, 0, 255]);
const ENTRY_COLOR: Rgba<u8> = Rgba([0, 191, 255, 255]);
const EXIT_COLOR: Rgba<u8> = Rgba([255, 69, 0, 255]);

/// Marker cells overlaid on every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Endpoints {
    /// Entry cell, drawn in blue
    pub entry: Option<(usize, usize)>,
    /// Exit cell, drawn in red
    pub exit: Option<(usize, usize)>,
}

/// Export the carve history of `grid` as an animated GIF
///
/// Skips frames when the configured delay is below what viewers reliably
/// support, so the apparent speed is preserved; the final frame is held
/// longer for visibility.
///
/// # Errors
///
/// Returns an error if the grid has no recorded carve steps, if the parent
/// directory cannot be created, or if GIF encoding fails.
pub fn export_replay_gif(
    grid: &WallGrid,
    pattern: &GlyphPattern,
    endpoints: Endpoints,
    output_path: &Path,
    quiet: bool,
) -> Result<()> {
    if grid.history().is_empty() {
        return Err(MazeError::EmptyHistory);
    }

    let effective_delay_ms = GIF_FRAME_DELAY_MS.max(VIEWER_MIN_FRAME_DELAY_MS);
    let skip_factor = frame_skip_factor(GIF_FRAME_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS) as usize;

    let progress = ReplayProgress::new(grid.history().len(), quiet);
    let frames = replay_frames(grid, pattern, endpoints, effective_delay_ms, skip_factor, &progress);
    progress.finish();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| MazeError::AnimationExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// How many carve steps advance between kept frames
pub const fn frame_skip_factor(frame_delay_ms: u32, viewer_min_delay_ms: u32) -> u32 {
    if frame_delay_ms < viewer_min_delay_ms {
        viewer_min_delay_ms.div_ceil(frame_delay_ms)
    } else {
        1
    }
}

fn replay_frames(
    grid: &WallGrid,
    pattern: &GlyphPattern,
    endpoints: Endpoints,
    delay_ms: u32,
    skip_factor: usize,
    progress: &ReplayProgress,
) -> Vec<Frame> {
    let mut replay = WallGrid::new(grid.width(), grid.height());
    let mut frames = Vec::new();

    frames.push(render_frame(&replay, pattern, endpoints, delay_ms));

    let mut step_count = 0;
    for step in grid.history() {
        replay.apply_step(step);
        step_count += 1;
        progress.tick();

        if step_count % skip_factor == 0 {
            frames.push(render_frame(&replay, pattern, endpoints, delay_ms));
        }
    }

    if step_count % skip_factor != 0 {
        frames.push(render_frame(&replay, pattern, endpoints, delay_ms));
    }

    // Final frame displays longer for better visibility
    if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
        frames.push(Frame::from_parts(
            last,
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms * 25, 1),
        ));
    }

    frames
}

fn render_frame(
    grid: &WallGrid,
    pattern: &GlyphPattern,
    endpoints: Endpoints,
    delay_ms: u32,
) -> Frame {
    let lattice_width = (2 * grid.width() + 1) as u32;
    let lattice_height = (2 * grid.height() + 1) as u32;
    let mut img = RgbaImage::from_pixel(
        lattice_width * ANIMATION_SCALE,
        lattice_height * ANIMATION_SCALE,
        WALL_COLOR,
    );

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let interior = if endpoints.entry == Some((x, y)) {
                ENTRY_COLOR
            } else if endpoints.exit == Some((x, y)) {
                EXIT_COLOR
            } else if pattern.contains(x, y) {
                PATTERN_COLOR
            } else {
                PASSAGE_COLOR
            };
            fill_lattice_unit(&mut img, 2 * x + 1, 2 * y + 1, interior);

            // Open edges become passage-colored lattice units
            if !pattern.contains(x, y) {
                if !grid.has_wall(x, y, Direction::North) {
                    fill_lattice_unit(&mut img, 2 * x + 1, 2 * y, PASSAGE_COLOR);
                }
                if !grid.has_wall(x, y, Direction::West) {
                    fill_lattice_unit(&mut img, 2 * x, 2 * y + 1, PASSAGE_COLOR);
                }
            }
        }
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}

/// Paint one lattice unit as an `ANIMATION_SCALE`-sided square
fn fill_lattice_unit(img: &mut RgbaImage, lattice_x: usize, lattice_y: usize, color: Rgba<u8>) {
    let base_x = lattice_x as u32 * ANIMATION_SCALE;
    let base_y = lattice_y as u32 * ANIMATION_SCALE;
    for dy in 0..ANIMATION_SCALE {
        for dx in 0..ANIMATION_SCALE {
            img.put_pixel(base_x + dx, base_y + dy, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Endpoints, export_replay_gif, frame_skip_factor};
    use crate::maze::grid::WallGrid;
    use crate::maze::pattern::GlyphPattern;

    #[test]
    fn test_frame_skip_factor_matches_viewer_floor() {
        assert_eq!(frame_skip_factor(5, 50), 10);
        assert_eq!(frame_skip_factor(20, 50), 3);
        assert_eq!(frame_skip_factor(50, 50), 1);
        assert_eq!(frame_skip_factor(80, 50), 1);
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let grid = WallGrid::new(3, 3);
        let pattern = GlyphPattern::embed(3, 3);
        let result = export_replay_gif(
            &grid,
            &pattern,
            Endpoints::default(),
            std::path::Path::new("unused.gif"),
            true,
        );
        assert!(result.is_err());
    }
}
