//! Error types for maze generation and its surrounding I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Requested grid dimensions are below the 3x3 minimum
    DimensionsTooSmall {
        /// Requested maze width
        width: usize,
        /// Requested maze height
        height: usize,
    },

    /// Entry or exit point lies outside the grid
    OutOfBounds {
        /// Which point failed ("ENTRY" or "EXIT")
        name: &'static str,
        /// The offending coordinate
        point: (usize, usize),
        /// Grid width the point was checked against
        width: usize,
        /// Grid height the point was checked against
        height: usize,
    },

    /// Entry or exit point is inside the grid but not on its perimeter
    NotOnBorder {
        /// Which point failed ("ENTRY" or "EXIT")
        name: &'static str,
        /// The offending coordinate
        point: (usize, usize),
    },

    /// Entry and exit name the same coordinate
    EqualEndpoints {
        /// The coordinate both points share
        point: (usize, usize),
    },

    /// Failed to read the configuration file
    ConfigRead {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A configuration line is not of the form KEY=VALUE
    ConfigSyntax {
        /// Path to the configuration file
        path: PathBuf,
        /// One-based line number of the bad line
        line: usize,
        /// The bad line with comments and whitespace stripped
        content: String,
    },

    /// Mandatory configuration keys are absent
    MissingKeys {
        /// The missing key names, sorted
        keys: Vec<String>,
    },

    /// A configuration value failed type conversion or validation
    InvalidValue {
        /// The configuration key
        key: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Animation export was requested with no recorded carve steps
    EmptyHistory,

    /// Failed to encode or write the replay GIF
    AnimationExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionsTooSmall { width, height } => {
                write!(
                    f,
                    "Maze dimensions must be at least 3x3 (got {width}x{height})"
                )
            }
            Self::OutOfBounds {
                name,
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "{name} ({},{}) is outside the {width}x{height} maze bounds",
                    point.0, point.1
                )
            }
            Self::NotOnBorder { name, point } => {
                write!(
                    f,
                    "{name} ({},{}) must be on the maze border",
                    point.0, point.1
                )
            }
            Self::EqualEndpoints { point } => {
                write!(
                    f,
                    "Entry and exit cannot both be ({},{})",
                    point.0, point.1
                )
            }
            Self::ConfigRead { path, source } => {
                write!(
                    f,
                    "Failed to read configuration '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigSyntax {
                path,
                line,
                content,
            } => {
                write!(
                    f,
                    "Syntax error on line {line} of '{}': expected KEY=VALUE, found '{content}'",
                    path.display()
                )
            }
            Self::MissingKeys { keys } => {
                write!(
                    f,
                    "Missing mandatory configuration keys: {}",
                    keys.join(", ")
                )
            }
            Self::InvalidValue { key, value, reason } => {
                write!(f, "Invalid value for {key} = '{value}': {reason}")
            }
            Self::EmptyHistory => {
                write!(f, "No carve steps recorded; generate a maze first")
            }
            Self::AnimationExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::AnimationExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid-value error for a configuration key
pub fn invalid_value(
    key: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
