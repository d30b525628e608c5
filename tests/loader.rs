//! Configuration file parsing and validation against real files

use amazeing::MazeError;
use amazeing::io::loader::{MazeConfig, load_config};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let Ok(mut file) = NamedTempFile::new() else {
        unreachable!("temp file creation");
    };
    let Ok(()) = file.write_all(contents.as_bytes()) else {
        unreachable!("temp file write");
    };
    file
}

const VALID: &str = "\
# maze settings
WIDTH = 10
HEIGHT = 8   # trailing comment
ENTRY = 0,0
EXIT = 9,7
PERFECT = yes
OUTPUT_FILE = maze.txt
";

#[test]
fn test_valid_file_round_trips() {
    let file = config_file(VALID);
    let config = load_config(file.path());

    assert!(matches!(
        config,
        Ok(MazeConfig {
            width: 10,
            height: 8,
            entry: (0, 0),
            exit: (9, 7),
            perfect: true,
            ..
        })
    ));
    if let Ok(config) = load_config(file.path()) {
        assert_eq!(config.output_file, PathBuf::from("maze.txt"));
    }
}

#[test]
fn test_missing_file_is_a_read_error() {
    let result = load_config(std::path::Path::new("no/such/config.txt"));
    assert!(matches!(result, Err(MazeError::ConfigRead { .. })));
}

#[test]
fn test_missing_keys_are_collected_and_sorted() {
    let file = config_file("WIDTH = 10\nHEIGHT = 8\n");
    let result = load_config(file.path());

    let Err(MazeError::MissingKeys { keys }) = result else {
        unreachable!("expected MissingKeys, got {result:?}");
    };
    assert_eq!(keys, vec!["ENTRY", "EXIT", "OUTPUT_FILE", "PERFECT"]);
}

#[test]
fn test_line_without_equals_is_a_syntax_error() {
    let file = config_file("WIDTH = 10\nHEIGHT 8\n");
    let result = load_config(file.path());

    assert!(matches!(
        result,
        Err(MazeError::ConfigSyntax { line: 2, .. })
    ));
}

#[test]
fn test_dimension_below_minimum_is_rejected() {
    let file = config_file(&VALID.replace("WIDTH = 10", "WIDTH = 2"));
    assert!(matches!(
        load_config(file.path()),
        Err(MazeError::InvalidValue { key: "WIDTH", .. })
    ));
}

#[test]
fn test_invalid_bool_is_rejected() {
    let file = config_file(&VALID.replace("PERFECT = yes", "PERFECT = maybe"));
    assert!(matches!(
        load_config(file.path()),
        Err(MazeError::InvalidValue { key: "PERFECT", .. })
    ));
}

#[test]
fn test_interior_entry_fails_border_validation() {
    let file = config_file(&VALID.replace("ENTRY = 0,0", "ENTRY = 4,4"));
    assert!(matches!(
        load_config(file.path()),
        Err(MazeError::NotOnBorder { name: "ENTRY", .. })
    ));
}

#[test]
fn test_equal_entry_and_exit_fail() {
    let file = config_file(&VALID.replace("EXIT = 9,7", "EXIT = 0,0"));
    assert!(matches!(
        load_config(file.path()),
        Err(MazeError::EqualEndpoints { point: (0, 0) })
    ));
}
