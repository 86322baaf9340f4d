#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Colony Life engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values that adapters and
//! systems observe deterministically. The shared [`Grid`] data model lives
//! here so that pure systems can consume and produce generations without
//! depending on the world crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod grid;

pub use grid::Grid;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str =
    "Welcome to the game of Life, a simulation of the lifecycle of a bacteria colony.";

/// Oldest age distinguished by presentation layers.
///
/// The data model itself never clamps; shading and random seeding saturate
/// here so that long-lived cells stay visually distinct from fresh ones.
pub const MAX_AGE: i32 = 12;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Installs a fresh starting configuration as the current colony.
    InstallGrid {
        /// Fully populated grid supplied by a seeding collaborator.
        grid: Grid,
    },
    /// Advances the colony by one generation, retaining an undo snapshot.
    Advance,
    /// Restores the most recently retained snapshot as the current colony.
    Undo,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a starting configuration was installed.
    GridInstalled {
        /// Number of rows in the installed grid.
        rows: u32,
        /// Number of columns in the installed grid.
        cols: u32,
    },
    /// Confirms that the colony advanced by one generation.
    GenerationAdvanced {
        /// Index of the generation that became current.
        generation: u64,
    },
    /// Confirms that an undo snapshot was restored as the current colony.
    GenerationRestored {
        /// Index of the generation that became current after the restore.
        generation: u64,
        /// Number of snapshots still retained for further undos.
        undo_remaining: usize,
    },
    /// Reports that an undo request was rejected by the world.
    UndoRejected {
        /// Specific reason the undo failed.
        reason: HistoryError,
    },
}

/// Failures surfaced by the [`Grid`] data model.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridError {
    /// Grid construction was requested with a zero dimension.
    #[error("grid dimensions must both be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: u32,
        /// Requested number of columns.
        cols: u32,
    },
    /// The supplied cell storage does not match the requested dimensions.
    #[error("expected {expected} cells for the requested dimensions, got {actual}")]
    DimensionMismatch {
        /// Cell count implied by the requested dimensions.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// A cell access fell outside the grid's current dimensions.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Row index requested by the caller.
        row: u32,
        /// Column index requested by the caller.
        col: u32,
        /// Number of rows in the grid at the time of the access.
        rows: u32,
        /// Number of columns in the grid at the time of the access.
        cols: u32,
    },
    /// A write attempted to store a negative cell age.
    #[error("cell ages must be non-negative, got {age}")]
    NegativeAge {
        /// Age value rejected by the grid.
        age: i32,
    },
}

/// Failures surfaced by the bounded undo history.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryError {
    /// A pop was requested while the history held zero snapshots.
    #[error("history stack is empty")]
    Empty,
}

/// Enumerated auto-advance cadences selectable by input collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    /// Leisurely cadence suited to watching individual cells age.
    Slow,
    /// Default cadence.
    Medium,
    /// Rapid cadence for skipping ahead many generations.
    Fast,
}

impl Speed {
    /// Delay between automatic generation advances at this speed.
    #[must_use]
    pub const fn tick_delay(&self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(750),
            Speed::Medium => Duration::from_millis(400),
            Speed::Fast => Duration::from_millis(150),
        }
    }
}

/// Describes how the controller schedules generation advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepMode {
    /// Each generation advances only on an explicit user action.
    Manual,
    /// Generations advance on a timer at the selected speed.
    Auto {
        /// Cadence driving the timer.
        speed: Speed,
    },
}

#[cfg(test)]
mod tests {
    use super::{GridError, HistoryError, Speed, StepMode};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn grid_error_round_trips_through_bincode() {
        assert_round_trip(&GridError::OutOfBounds {
            row: 7,
            col: 3,
            rows: 5,
            cols: 5,
        });
        assert_round_trip(&GridError::NegativeAge { age: -4 });
    }

    #[test]
    fn history_error_round_trips_through_bincode() {
        assert_round_trip(&HistoryError::Empty);
    }

    #[test]
    fn step_mode_round_trips_through_bincode() {
        assert_round_trip(&StepMode::Manual);
        assert_round_trip(&StepMode::Auto { speed: Speed::Fast });
    }

    #[test]
    fn speeds_are_ordered_from_slow_to_fast() {
        assert!(Speed::Slow.tick_delay() > Speed::Medium.tick_delay());
        assert!(Speed::Medium.tick_delay() > Speed::Fast.tick_delay());
    }
}
