//! Progress reporting for the animation export

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static REPLAY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Rendering frames [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the carve steps rendered into animation frames
///
/// Hidden entirely in quiet mode so the exporter can tick it
/// unconditionally.
pub struct ReplayProgress {
    bar: ProgressBar,
}

impl ReplayProgress {
    /// Create a bar for `steps` carve steps, hidden when `quiet` is set
    pub fn new(steps: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(steps as u64);
            bar.set_style(REPLAY_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Record one rendered step
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
