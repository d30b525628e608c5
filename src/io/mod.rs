//! Input/output operations and error handling
//!
//! Everything that touches the outside world lives here: the configuration
//! file loader, the CLI front end, progress display, runtime constants, and
//! the crate-wide error type. The generation core in [`crate::maze`] never
//! prints or reads files itself.

/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// KEY=VALUE configuration file parsing and validation
pub mod loader;
/// Progress display for the animation export
pub mod progress;
