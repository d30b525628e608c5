//! CLI entry point for the animated maze generator

use amazeing::io::cli::{Cli, MazeRunner};
use clap::Parser;

fn main() -> amazeing::Result<()> {
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    runner.run()
}
