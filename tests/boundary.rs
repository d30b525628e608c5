//! Entry/exit validation as exposed through the generation session

use amazeing::MazeError;
use amazeing::maze::MazeGenerator;

fn session() -> MazeGenerator {
    let Ok(generator) = MazeGenerator::new(5, 5, 0) else {
        unreachable!("5x5 is a valid size");
    };
    generator
}

#[test]
fn test_opposite_corners_pass() {
    assert!(session().set_entry_exit((0, 0), (4, 4)).is_ok());
}

#[test]
fn test_border_edges_pass() {
    assert!(session().set_entry_exit((2, 0), (4, 3)).is_ok());
}

#[test]
fn test_interior_entry_fails_with_not_on_border() {
    let result = session().set_entry_exit((2, 2), (4, 4));
    assert!(matches!(
        result,
        Err(MazeError::NotOnBorder { name: "ENTRY", point: (2, 2) })
    ));
}

#[test]
fn test_out_of_bounds_exit_is_reported_with_dimensions() {
    let result = session().set_entry_exit((0, 0), (9, 0));
    assert!(matches!(
        result,
        Err(MazeError::OutOfBounds {
            name: "EXIT",
            point: (9, 0),
            width: 5,
            height: 5,
        })
    ));
}

#[test]
fn test_equal_entry_and_exit_fail() {
    let result = session().set_entry_exit((0, 3), (0, 3));
    assert!(matches!(
        result,
        Err(MazeError::EqualEndpoints { point: (0, 3) })
    ));
}
