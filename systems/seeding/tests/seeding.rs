use colony_life_core::{GridError, MAX_AGE};
use colony_life_system_seeding::{parse_seed, random_colony, SeedError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GLIDER_SEED: &str = "\
# A glider drifting toward the lower right.
# Comments may appear anywhere above the payload.
4
4
-X--
--X-
XXX-
----
";

#[test]
fn parses_a_commented_seed_file() {
    let grid = parse_seed(GLIDER_SEED).expect("seed parses");
    assert_eq!((grid.rows(), grid.cols()), (4, 4));
    assert_eq!(grid.age(0, 1), Ok(1));
    assert_eq!(grid.age(1, 2), Ok(1));
    assert_eq!(grid.age(2, 0), Ok(1));
    assert_eq!(grid.age(0, 0), Ok(0));
    let living = grid.cells().iter().filter(|&&age| age != 0).count();
    assert_eq!(living, 5);
}

#[test]
fn trailing_glyphs_beyond_the_column_count_are_ignored() {
    let grid = parse_seed("1\n2\nX-???\n").expect("seed parses");
    assert_eq!(grid.cells(), &[1, 0]);
}

#[test]
fn missing_header_lines_are_reported() {
    assert_eq!(parse_seed("# only a comment\n"), Err(SeedError::MissingRowCount));
    assert_eq!(parse_seed("3\n"), Err(SeedError::MissingColumnCount));
}

#[test]
fn malformed_dimensions_are_reported() {
    assert_eq!(
        parse_seed("three\n3\n"),
        Err(SeedError::InvalidDimension {
            value: "three".to_owned(),
        })
    );
}

#[test]
fn zero_dimensions_are_rejected_through_the_grid_invariant() {
    assert_eq!(
        parse_seed("0\n3\n"),
        Err(SeedError::Grid(GridError::InvalidDimensions {
            rows: 0,
            cols: 3,
        }))
    );
}

#[test]
fn truncated_payloads_are_reported() {
    assert_eq!(
        parse_seed("2\n2\nX-\n"),
        Err(SeedError::MissingRows {
            expected: 2,
            actual: 1,
        })
    );
    assert_eq!(
        parse_seed("2\n3\nX-\n---\n"),
        Err(SeedError::ShortRow {
            row: 0,
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn unknown_glyphs_are_reported_with_their_position() {
    assert_eq!(
        parse_seed("1\n3\n-O-\n"),
        Err(SeedError::UnknownGlyph {
            glyph: 'O',
            row: 0,
            col: 1,
        })
    );
}

#[test]
fn random_colonies_stay_within_the_documented_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..8 {
        let grid = random_colony(&mut rng);
        assert!((40..=60).contains(&grid.rows()));
        assert!((40..=60).contains(&grid.cols()));
        assert!(grid.cells().iter().all(|&age| (0..=MAX_AGE).contains(&age)));
    }
}

#[test]
fn random_colonies_are_reproducible_from_the_seed() {
    let mut first = ChaCha8Rng::seed_from_u64(42);
    let mut second = ChaCha8Rng::seed_from_u64(42);
    assert_eq!(random_colony(&mut first), random_colony(&mut second));
}

#[test]
fn random_colonies_mix_living_and_dead_cells() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let grid = random_colony(&mut rng);
    let living = grid.cells().iter().filter(|&&age| age != 0).count();
    assert!(living > 0, "coin flips should populate some cells");
    assert!(living < grid.cells().len(), "and leave some dead");
}
