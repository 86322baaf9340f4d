#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure transition engine that advances a colony by one generation.
//!
//! Every next-generation age is computed from a read-only view of the
//! pre-advance grid and materialized into a fresh grid, so no cell ever
//! observes a neighbour that was already updated within the same pass.
//! Neighbour lookup is toroidal: grid edges wrap to the opposite edge, and
//! with a degenerate extent of one a cell counts itself through wraparound.

use colony_life_core::Grid;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Computes the next generation of the colony without mutating the input.
#[must_use]
pub fn next_generation(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut next = Vec::with_capacity(grid.cells().len());
    for (row, col, age) in grid.iter() {
        let neighbors = living_neighbors(grid, row, col);
        next.push(next_age(age, neighbors));
    }
    Grid::from_cells(rows, cols, next).expect("transition preserves grid dimensions")
}

/// Applies the aging rule to a single cell.
///
/// `n <= 1` dies of isolation, `n == 2` survives and ages but never births,
/// `n == 3` ages or spontaneously births at age 1, `n >= 4` dies of
/// overcrowding. The asymmetry at two neighbours (no birth) is deliberate.
const fn next_age(age: i32, neighbors: u8) -> i32 {
    match neighbors {
        0 | 1 => 0,
        2 => {
            if age > 0 {
                age.saturating_add(1)
            } else {
                0
            }
        }
        3 => {
            if age > 0 {
                age.saturating_add(1)
            } else {
                1
            }
        }
        _ => 0,
    }
}

fn living_neighbors(grid: &Grid, row: u32, col: u32) -> u8 {
    let rows = i64::from(grid.rows());
    let cols = i64::from(grid.cols());
    let mut count = 0;
    for (d_row, d_col) in NEIGHBOR_OFFSETS {
        let neighbor_row = (i64::from(row) + d_row).rem_euclid(rows) as usize;
        let neighbor_col = (i64::from(col) + d_col).rem_euclid(cols) as usize;
        if grid.cells()[neighbor_row * cols as usize + neighbor_col] != 0 {
            count += 1;
        }
    }
    count
}
