//! Glyph reservation behavior across full generation runs

use amazeing::maze::grid::ALL_WALLS;
use amazeing::maze::pattern::GlyphPattern;
use amazeing::maze::MazeGenerator;

fn generated(width: usize, height: usize, seed: u64, perfect: bool) -> MazeGenerator {
    let Ok(mut generator) = MazeGenerator::new(width, height, seed) else {
        unreachable!("test dimensions are valid");
    };
    generator.generate(perfect);
    generator
}

#[test]
fn test_placement_depends_only_on_dimensions() {
    let a = generated(15, 11, 1, true);
    let b = generated(15, 11, 77, false);
    let standalone = GlyphPattern::embed(15, 11);

    assert_eq!(a.pattern().cells(), b.pattern().cells());
    assert_eq!(a.pattern().cells(), standalone.cells());
    assert!(!a.pattern().failed());
}

#[test]
fn test_glyph_cells_stay_fully_walled_after_carving() {
    let generator = generated(19, 13, 5, true);

    assert!(!generator.pattern().cells().is_empty());
    for &(x, y) in generator.pattern().cells() {
        assert_eq!(generator.grid().walls(x, y), ALL_WALLS, "cell ({x},{y})");
    }
}

#[test]
fn test_too_small_grid_sets_failure_flag_and_still_generates() {
    let generator = generated(5, 5, 9, true);

    assert!(generator.pattern().failed());
    assert!(generator.pattern().cells().is_empty());
    // A 5x5 spanning tree over all 25 cells
    assert_eq!(generator.grid().history().len(), 24);
}

#[test]
fn test_regenerating_rebuilds_the_same_placement() {
    let Ok(mut generator) = MazeGenerator::new(15, 11, 4) else {
        unreachable!("test dimensions are valid");
    };
    generator.generate(true);
    let first: Vec<_> = {
        let mut cells: Vec<_> = generator.pattern().cells().iter().copied().collect();
        cells.sort_unstable();
        cells
    };

    generator.generate(false);
    let mut second: Vec<_> = generator.pattern().cells().iter().copied().collect();
    second.sort_unstable();

    assert_eq!(first, second);
}
