//! Algorithm constants and runtime configuration defaults

/// Fraction of the cell count the imperfection pass tries to open as loops
pub const LOOP_RATIO: f64 = 0.03;

// Safety break so the pass terminates when candidates become scarce
/// Maximum random draws the imperfection pass makes before giving up
pub const LOOP_ATTEMPT_BUDGET: usize = 500;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Side length in pixels of one lattice unit in exported animation frames
pub const ANIMATION_SCALE: u32 = 8;
/// Suffix appended to the output file stem for the replay GIF
pub const ANIMATION_SUFFIX: &str = "_carve";
