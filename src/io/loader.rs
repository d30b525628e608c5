//! Configuration file parsing and validation
//!
//! The configuration is a plain KEY=VALUE text file with `#` comments.
//! Parsing produces a fully validated [`MazeConfig`]; every constraint
//! violation surfaces as a typed error rather than a process exit.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io::error::{MazeError, Result, invalid_value};
use crate::maze::boundary::validate_endpoints;
use crate::maze::carver::MIN_DIMENSION;

/// Keys that must be present in every configuration file
const MANDATORY_KEYS: [&str; 6] = ["WIDTH", "HEIGHT", "ENTRY", "EXIT", "PERFECT", "OUTPUT_FILE"];

/// Validated maze generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Maze width in cells, at least 3
    pub width: usize,
    /// Maze height in cells, at least 3
    pub height: usize,
    /// Entry point on the maze border
    pub entry: (usize, usize),
    /// Exit point on the maze border, distinct from the entry
    pub exit: (usize, usize),
    /// Whether the maze stays a perfect spanning tree (no loop punching)
    pub perfect: bool,
    /// Path the ASCII rendering is written to
    pub output_file: PathBuf,
}

/// Parse and validate a configuration file
///
/// # Errors
///
/// Returns [`MazeError::ConfigRead`] when the file cannot be read,
/// [`MazeError::ConfigSyntax`] for malformed lines,
/// [`MazeError::MissingKeys`] when mandatory keys are absent, and
/// [`MazeError::InvalidValue`] or a boundary violation when a value fails
/// validation.
pub fn load_config(path: &Path) -> Result<MazeConfig> {
    let raw = read_raw_pairs(path)?;
    validate_and_convert(&raw)
}

/// Read the file and extract raw KEY=VALUE pairs, ignoring comments
fn read_raw_pairs(path: &Path) -> Result<HashMap<String, String>> {
    let text = std::fs::read_to_string(path).map_err(|e| MazeError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut raw = HashMap::new();
    for (index, line) in text.lines().enumerate() {
        let clean = line.split('#').next().unwrap_or_default().trim();
        if clean.is_empty() {
            continue;
        }

        // Split on the first '=' so values may themselves contain one
        let Some((key, value)) = clean.split_once('=') else {
            return Err(MazeError::ConfigSyntax {
                path: path.to_path_buf(),
                line: index + 1,
                content: clean.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(MazeError::ConfigSyntax {
                path: path.to_path_buf(),
                line: index + 1,
                content: clean.to_string(),
            });
        }

        raw.insert(key.to_string(), value.trim().to_string());
    }

    Ok(raw)
}

/// Convert raw strings to typed values and enforce maze constraints
fn validate_and_convert(raw: &HashMap<String, String>) -> Result<MazeConfig> {
    let mut missing: Vec<String> = MANDATORY_KEYS
        .iter()
        .filter(|key| !raw.contains_key(**key))
        .map(|key| (*key).to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(MazeError::MissingKeys { keys: missing });
    }

    let width = parse_dimension(raw, "WIDTH")?;
    let height = parse_dimension(raw, "HEIGHT")?;
    let perfect = parse_bool(raw.get("PERFECT").map_or("", String::as_str))?;

    let output_file = raw.get("OUTPUT_FILE").map_or("", String::as_str);
    if output_file.is_empty() {
        return Err(invalid_value(
            "OUTPUT_FILE",
            &output_file,
            &"must not be empty",
        ));
    }

    let entry = parse_coord(raw.get("ENTRY").map_or("", String::as_str), "ENTRY")?;
    let exit = parse_coord(raw.get("EXIT").map_or("", String::as_str), "EXIT")?;
    validate_endpoints(entry, exit, width, height)?;

    Ok(MazeConfig {
        width,
        height,
        entry,
        exit,
        perfect,
        output_file: PathBuf::from(output_file),
    })
}

fn parse_dimension(raw: &HashMap<String, String>, key: &'static str) -> Result<usize> {
    let value = raw.get(key).map_or("", String::as_str);
    let parsed: usize = value
        .parse()
        .map_err(|_| invalid_value(key, &value, &"must be a non-negative integer"))?;

    if parsed < MIN_DIMENSION {
        return Err(invalid_value(key, &value, &"must be at least 3"));
    }

    Ok(parsed)
}

/// Robust boolean parsing: true/false, 1/0, yes/no, on/off, case-insensitive
fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_value(
            "PERFECT",
            &value,
            &"expected true, false, 1, 0, yes, or no",
        )),
    }
}

/// Parse an "x,y" coordinate pair
fn parse_coord(value: &str, key: &'static str) -> Result<(usize, usize)> {
    let Some((x, y)) = value.split_once(',') else {
        return Err(invalid_value(key, &value, &"expected format 'x,y'"));
    };

    let x: usize = x
        .trim()
        .parse()
        .map_err(|_| invalid_value(key, &value, &"expected format 'x,y'"))?;
    let y: usize = y
        .trim()
        .parse()
        .map_err(|_| invalid_value(key, &value, &"expected format 'x,y'"))?;

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, parse_coord};
    use crate::io::error::MazeError;

    #[test]
    fn test_parse_bool_accepted_spellings() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert!(matches!(parse_bool(value), Ok(true)), "{value}");
        }
        for value in ["false", "0", "No", "off"] {
            assert!(matches!(parse_bool(value), Ok(false)), "{value}");
        }
        assert!(matches!(
            parse_bool("maybe"),
            Err(MazeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_coord_rejects_malformed_pairs() {
        assert!(matches!(parse_coord("3,4", "ENTRY"), Ok((3, 4))));
        assert!(matches!(parse_coord(" 3 , 4 ", "ENTRY"), Ok((3, 4))));
        assert!(parse_coord("34", "ENTRY").is_err());
        assert!(parse_coord("3,four", "ENTRY").is_err());
        assert!(parse_coord("-1,0", "ENTRY").is_err());
    }
}
