//! Command-line interface driving generation, rendering, and export

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::io::configuration::{ANIMATION_SUFFIX, DEFAULT_SEED};
use crate::io::error::{MazeError, Result};
use crate::io::loader::{MazeConfig, load_config};
use crate::maze::MazeGenerator;
use crate::render::animation::{Endpoints, export_replay_gif};
use crate::render::ascii;

#[derive(Parser)]
#[command(name = "amazeing")]
#[command(
    author,
    version,
    about = "Generate mazes with an embedded '42' glyph and a replayable carve animation"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Configuration file with WIDTH, HEIGHT, ENTRY, EXIT, PERFECT, OUTPUT_FILE
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Export the carve history as an animated GIF next to the output file
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress terminal rendering and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates one generation run from a configuration file
pub struct MazeRunner {
    cli: Cli,
}

impl MazeRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the configuration, generate the maze, and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid, when the entry or
    /// exit points violate the boundary rules, or when writing an output
    /// file fails.
    // Allow print for user feedback on the finished maze and warnings
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let config = load_config(&self.cli.config)?;

        let mut generator = MazeGenerator::new(config.width, config.height, self.cli.seed)?;
        generator.generate(config.perfect);
        generator.set_entry_exit(config.entry, config.exit)?;

        if generator.pattern().failed() && !self.cli.quiet {
            eprintln!("Warning: maze too small for the '42' glyph, generating without it");
        }

        Self::write_output(&generator, &config)?;

        if !self.cli.quiet {
            println!(
                "{}",
                ascii::render_thick(
                    generator.grid(),
                    generator.pattern(),
                    Some(config.entry),
                    Some(config.exit),
                )
            );
        }

        if self.cli.animate {
            let gif_path = Self::animation_path(&config.output_file);
            export_replay_gif(
                generator.grid(),
                generator.pattern(),
                Endpoints {
                    entry: Some(config.entry),
                    exit: Some(config.exit),
                },
                &gif_path,
                self.cli.quiet,
            )?;
        }

        Ok(())
    }

    fn write_output(generator: &MazeGenerator, config: &MazeConfig) -> Result<()> {
        let rendered = ascii::render(generator.grid());
        std::fs::write(&config.output_file, rendered).map_err(|e| MazeError::FileSystem {
            path: config.output_file.clone(),
            operation: "write output file",
            source: e,
        })
    }

    fn animation_path(output_file: &Path) -> PathBuf {
        let stem = output_file.file_stem().unwrap_or_default();
        let gif_name = format!("{}{}.gif", stem.to_string_lossy(), ANIMATION_SUFFIX);

        output_file
            .parent()
            .map_or_else(|| PathBuf::from(&gif_name), |parent| parent.join(&gif_name))
    }
}

#[cfg(test)]
mod tests {
    use super::MazeRunner;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_animation_path_sits_next_to_output() {
        assert_eq!(
            MazeRunner::animation_path(Path::new("out/maze.txt")),
            PathBuf::from("out/maze_carve.gif")
        );
        assert_eq!(
            MazeRunner::animation_path(Path::new("maze.txt")),
            PathBuf::from("maze_carve.gif")
        );
    }
}
