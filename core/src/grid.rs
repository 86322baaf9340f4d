//! Rectangular field of per-cell ages shared across the engine.

use crate::GridError;

/// Toroidal field of cell ages indexed by `(row, col)`.
///
/// A value of `0` marks a dead cell; a positive value is the number of
/// consecutive generations the cell has remained alive. Storage is a single
/// row-major buffer, so cloning a grid yields an independent deep copy with
/// no aliasing between snapshots and the live colony.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<i32>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell dead.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        let capacity = cell_capacity(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; capacity],
        })
    }

    /// Creates a grid from row-major cell storage.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<i32>) -> Result<Self, GridError> {
        validate(rows, cols, &cells)?;
        Ok(Self { rows, cols, cells })
    }

    /// Atomically resets the grid's dimensions and cell storage.
    ///
    /// Validation happens before any mutation, so a rejected replacement
    /// leaves the previous contents fully intact.
    pub fn replace_contents(
        &mut self,
        rows: u32,
        cols: u32,
        cells: Vec<i32>,
    ) -> Result<(), GridError> {
        validate(rows, cols, &cells)?;
        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
        Ok(())
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Reads the age stored at the given cell.
    pub fn age(&self, row: u32, col: u32) -> Result<i32, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    /// Writes the age stored at the given cell.
    ///
    /// Negative ages are rejected before any storage is touched.
    pub fn set_age(&mut self, row: u32, col: u32, age: i32) -> Result<(), GridError> {
        if age < 0 {
            return Err(GridError::NegativeAge { age });
        }
        let index = self.index(row, col)?;
        self.cells[index] = age;
        Ok(())
    }

    /// Row-major view of the underlying cell storage.
    #[must_use]
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Iterates over every cell as `(row, col, age)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, i32)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(index, &age)| {
            let row = (index / cols as usize) as u32;
            let col = (index % cols as usize) as u32;
            (row, col, age)
        })
    }

    fn index(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }
}

fn cell_capacity(rows: u32, cols: u32) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(rows as usize * cols as usize)
}

fn validate(rows: u32, cols: u32, cells: &[i32]) -> Result<(), GridError> {
    let expected = cell_capacity(rows, cols)?;
    if cells.len() != expected {
        return Err(GridError::DimensionMismatch {
            expected,
            actual: cells.len(),
        });
    }
    if let Some(&age) = cells.iter().find(|&&age| age < 0) {
        return Err(GridError::NegativeAge { age });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridError};

    #[test]
    fn new_grid_starts_fully_dead() {
        let grid = Grid::new(3, 4).expect("grid");
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.cells().iter().all(|&age| age == 0));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn from_cells_checks_storage_length() {
        assert_eq!(
            Grid::from_cells(2, 2, vec![0, 1, 2]),
            Err(GridError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn from_cells_rejects_negative_ages() {
        assert_eq!(
            Grid::from_cells(2, 2, vec![0, 1, -3, 2]),
            Err(GridError::NegativeAge { age: -3 })
        );
    }

    #[test]
    fn accesses_outside_dimensions_are_rejected() {
        let mut grid = Grid::new(2, 3).expect("grid");
        assert_eq!(
            grid.age(2, 0),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert_eq!(
            grid.set_age(0, 3, 1),
            Err(GridError::OutOfBounds {
                row: 0,
                col: 3,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn negative_writes_leave_storage_untouched() {
        let mut grid = Grid::new(2, 2).expect("grid");
        grid.set_age(0, 0, 5).expect("write");
        assert_eq!(grid.set_age(0, 0, -1), Err(GridError::NegativeAge { age: -1 }));
        assert_eq!(grid.age(0, 0), Ok(5));
    }

    #[test]
    fn clones_own_independent_storage() {
        let mut original = Grid::new(2, 2).expect("grid");
        original.set_age(1, 1, 3).expect("write");
        let copy = original.clone();
        original.set_age(1, 1, 7).expect("write");
        assert_eq!(copy.age(1, 1), Ok(3));
        assert_eq!(original.age(1, 1), Ok(7));
    }

    #[test]
    fn rejected_replacement_preserves_previous_contents() {
        let mut grid = Grid::from_cells(2, 2, vec![1, 2, 3, 4]).expect("grid");
        assert_eq!(
            grid.replace_contents(3, 3, vec![0; 4]),
            Err(GridError::DimensionMismatch {
                expected: 9,
                actual: 4
            })
        );
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cells(), &[1, 2, 3, 4]);
    }

    #[test]
    fn replacement_swaps_dimensions_and_storage() {
        let mut grid = Grid::new(2, 2).expect("grid");
        grid.replace_contents(1, 3, vec![4, 0, 9]).expect("replace");
        assert_eq!((grid.rows(), grid.cols()), (1, 3));
        assert_eq!(grid.age(0, 2), Ok(9));
    }

    #[test]
    fn iter_visits_cells_in_row_major_order() {
        let grid = Grid::from_cells(2, 2, vec![1, 0, 0, 4]).expect("grid");
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![(0, 0, 1), (0, 1, 0), (1, 0, 0), (1, 1, 4)]
        );
    }
}
