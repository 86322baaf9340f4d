#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Initial-configuration provider for Colony Life.
//!
//! Produces a fully populated starting [`Grid`] either by parsing a plaintext
//! seed file or by generating a random colony. The seed-file format: lines
//! beginning with `#` are comments; the first two payload lines carry the row
//! and column counts; each following line holds one glyph per cell, `X` for a
//! living cell at age 1 and `-` for a dead one.

use colony_life_core::{Grid, GridError, MAX_AGE};
use rand::Rng;
use thiserror::Error;

const MIN_RANDOM_EXTENT: u32 = 40;
const MAX_RANDOM_EXTENT: u32 = 60;

/// Failures surfaced while parsing a plaintext seed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    /// The seed ended before the row count line.
    #[error("seed is missing the row count line")]
    MissingRowCount,
    /// The seed ended before the column count line.
    #[error("seed is missing the column count line")]
    MissingColumnCount,
    /// A dimension line did not parse as an unsigned integer.
    #[error("invalid dimension value {value:?}")]
    InvalidDimension {
        /// Offending line content, trimmed.
        value: String,
    },
    /// The seed ended before all colony rows were read.
    #[error("expected {expected} colony rows, found only {actual}")]
    MissingRows {
        /// Row count announced by the header.
        expected: u32,
        /// Rows actually present.
        actual: u32,
    },
    /// A colony row held fewer glyphs than the announced column count.
    #[error("row {row} holds {actual} cells, expected {expected}")]
    ShortRow {
        /// Zero-based index of the offending row.
        row: u32,
        /// Column count announced by the header.
        expected: u32,
        /// Glyphs actually present.
        actual: u32,
    },
    /// A colony row held a glyph other than `X` or `-`.
    #[error("unrecognised glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// Offending character.
        glyph: char,
        /// Zero-based row of the glyph.
        row: u32,
        /// Zero-based column of the glyph.
        col: u32,
    },
    /// The parsed header described an impossible grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses a plaintext seed into a starting grid.
pub fn parse_seed(text: &str) -> Result<Grid, SeedError> {
    let mut lines = text.lines().filter(|line| !line.starts_with('#'));
    let rows = parse_extent(lines.next().ok_or(SeedError::MissingRowCount)?)?;
    let cols = parse_extent(lines.next().ok_or(SeedError::MissingColumnCount)?)?;

    let mut cells = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        let line = lines.next().ok_or(SeedError::MissingRows {
            expected: rows,
            actual: row,
        })?;
        let mut glyphs = line.chars();
        for col in 0..cols {
            match glyphs.next() {
                Some('X') => cells.push(1),
                Some('-') => cells.push(0),
                Some(glyph) => return Err(SeedError::UnknownGlyph { glyph, row, col }),
                None => {
                    return Err(SeedError::ShortRow {
                        row,
                        expected: cols,
                        actual: col,
                    })
                }
            }
        }
    }
    Ok(Grid::from_cells(rows, cols, cells)?)
}

/// Generates a random colony with the caller-supplied RNG.
///
/// Dimensions are uniform in `[40, 60]` per axis; each cell is alive with
/// probability one half, and living cells receive a uniform age in
/// `[1, MAX_AGE]`.
pub fn random_colony<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let rows = rng.gen_range(MIN_RANDOM_EXTENT..=MAX_RANDOM_EXTENT);
    let cols = rng.gen_range(MIN_RANDOM_EXTENT..=MAX_RANDOM_EXTENT);
    let mut cells = Vec::with_capacity(rows as usize * cols as usize);
    for _ in 0..rows as usize * cols as usize {
        if rng.gen_bool(0.5) {
            cells.push(rng.gen_range(1..=MAX_AGE));
        } else {
            cells.push(0);
        }
    }
    Grid::from_cells(rows, cols, cells).expect("random colony matches its own dimensions")
}

fn parse_extent(line: &str) -> Result<u32, SeedError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| SeedError::InvalidDimension {
        value: trimmed.to_owned(),
    })
}
