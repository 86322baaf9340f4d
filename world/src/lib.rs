#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative colony state management for Colony Life.
//!
//! The world owns the single current [`Grid`], the bounded undo history, and
//! the generation counter. Adapters mutate it exclusively through [`apply`],
//! which executes each command as one non-interruptible unit: an advance
//! pushes a defensive snapshot and installs the next generation together, an
//! undo pops and restores together. Read access goes through [`query`].

mod history;

pub use history::{GridStack, DEFAULT_CAPACITY};

use colony_life_core::{Command, Event, Grid, WELCOME_BANNER};
use colony_life_system_generation::next_generation;

const DEFAULT_ROWS: u32 = 10;
const DEFAULT_COLS: u32 = 10;

/// Represents the authoritative Colony Life world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    current: Grid,
    history: GridStack<Grid>,
    generation: u64,
}

impl World {
    /// Creates a new world holding an all-dead default colony.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            current: Grid::new(DEFAULT_ROWS, DEFAULT_COLS)
                .expect("default grid dimensions are positive"),
            history: GridStack::new(),
            generation: 0,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::InstallGrid { grid } => {
            let rows = grid.rows();
            let cols = grid.cols();
            world.current = grid;
            world.history.clear();
            world.generation = 0;
            out_events.push(Event::GridInstalled { rows, cols });
        }
        Command::Advance => {
            let snapshot = world.current.clone();
            world.history.push(snapshot);
            world.current = next_generation(&world.current);
            world.generation = world.generation.saturating_add(1);
            out_events.push(Event::GenerationAdvanced {
                generation: world.generation,
            });
        }
        Command::Undo => match world.history.pop() {
            Ok(snapshot) => {
                world.current = snapshot;
                world.generation = world.generation.saturating_sub(1);
                out_events.push(Event::GenerationRestored {
                    generation: world.generation,
                    undo_remaining: world.history.len(),
                });
            }
            Err(reason) => out_events.push(Event::UndoRejected { reason }),
        },
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use colony_life_core::Grid;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the current colony grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.current
    }

    /// Dimensions of the current colony as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(world: &World) -> (u32, u32) {
        (world.current.rows(), world.current.cols())
    }

    /// Index of the current generation, starting at zero for a fresh colony.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Number of undo snapshots currently retained.
    #[must_use]
    pub fn history_depth(world: &World) -> usize {
        world.history.len()
    }

    /// Reports whether an undo affordance should currently be enabled.
    #[must_use]
    pub fn undo_available(world: &World) -> bool {
        !world.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, query, World, DEFAULT_CAPACITY};
    use colony_life_core::{Command, Event, Grid, HistoryError};

    fn install(world: &mut World, grid: Grid) {
        let mut events = Vec::new();
        apply(world, Command::InstallGrid { grid }, &mut events);
    }

    fn blinker() -> Grid {
        let mut grid = Grid::new(5, 5).expect("grid");
        for col in 1..=3 {
            grid.set_age(1, col, 1).expect("seed");
        }
        grid
    }

    #[test]
    fn install_replaces_colony_and_clears_history() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::Advance, &mut events);
        assert_eq!(query::history_depth(&world), 1);

        events.clear();
        apply(
            &mut world,
            Command::InstallGrid {
                grid: blinker(),
            },
            &mut events,
        );
        assert_eq!(events, vec![Event::GridInstalled { rows: 5, cols: 5 }]);
        assert_eq!(query::dimensions(&world), (5, 5));
        assert_eq!(query::generation(&world), 0);
        assert_eq!(query::history_depth(&world), 0);
        assert!(!query::undo_available(&world));
    }

    #[test]
    fn advance_retains_the_pre_advance_colony() {
        let mut world = World::new();
        install(&mut world, blinker());
        let before = query::grid(&world).clone();

        let mut events = Vec::new();
        apply(&mut world, Command::Advance, &mut events);
        assert_eq!(events, vec![Event::GenerationAdvanced { generation: 1 }]);
        assert_ne!(query::grid(&world), &before, "blinker must change");

        events.clear();
        apply(&mut world, Command::Undo, &mut events);
        assert_eq!(
            events,
            vec![Event::GenerationRestored {
                generation: 0,
                undo_remaining: 0,
            }]
        );
        assert_eq!(query::grid(&world), &before);
    }

    #[test]
    fn undo_restores_generations_in_reverse_order() {
        let mut world = World::new();
        install(&mut world, blinker());

        let mut snapshots = Vec::new();
        let mut events = Vec::new();
        for _ in 0..4 {
            snapshots.push(query::grid(&world).clone());
            apply(&mut world, Command::Advance, &mut events);
        }

        for expected in snapshots.iter().rev() {
            events.clear();
            apply(&mut world, Command::Undo, &mut events);
            assert_eq!(query::grid(&world), expected);
        }
        assert!(!query::undo_available(&world));
    }

    #[test]
    fn rejected_undo_leaves_the_colony_untouched() {
        let mut world = World::new();
        install(&mut world, blinker());
        let before = query::grid(&world).clone();

        let mut events = Vec::new();
        apply(&mut world, Command::Undo, &mut events);
        assert_eq!(
            events,
            vec![Event::UndoRejected {
                reason: HistoryError::Empty,
            }]
        );
        assert_eq!(query::grid(&world), &before);
        assert_eq!(query::history_depth(&world), 0);
    }

    #[test]
    fn history_depth_saturates_at_the_stack_capacity() {
        let mut world = World::new();
        install(&mut world, blinker());

        let mut events = Vec::new();
        for _ in 0..DEFAULT_CAPACITY + 3 {
            apply(&mut world, Command::Advance, &mut events);
        }
        assert_eq!(query::history_depth(&world), DEFAULT_CAPACITY);

        let mut undos = 0;
        loop {
            events.clear();
            apply(&mut world, Command::Undo, &mut events);
            match events.as_slice() {
                [Event::GenerationRestored { .. }] => undos += 1,
                [Event::UndoRejected { .. }] => break,
                other => panic!("unexpected events: {other:?}"),
            }
        }
        assert_eq!(undos, DEFAULT_CAPACITY);
    }
}
