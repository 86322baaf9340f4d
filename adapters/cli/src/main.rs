#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Colony Life simulation.
//!
//! Installs a starting colony (seed file, transfer snapshot, or random),
//! advances the requested number of generations either on a timer or on
//! explicit key presses, and can walk back through the bounded undo history
//! before printing an optional transfer snapshot of the final state.

mod grid_transfer;

use std::{fs, io, thread};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colony_life_core::{Command, Event, Grid, Speed, StepMode};
use colony_life_rendering::{GridScene, ScenePresenter, TextPresenter};
use colony_life_system_seeding as seeding;
use colony_life_world::{self as world, query, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use grid_transfer::ColonySnapshot;

const RULES: &str = "\
Cells live and die by the following rules:

\tA cell with 1 or fewer neighbors dies of loneliness
\tLocations with 2 neighbors remain stable
\tLocations with 3 neighbors will spontaneously create life
\tLocations with 4 or more neighbors die of overcrowding

In the animation, new cells are dark and fade to gray as they age.";

#[derive(Parser, Debug)]
#[command(name = "colony-life", about = "Toroidal game of life with aging cells")]
struct Args {
    /// Seed file path, or a `colony:` transfer snapshot string.
    #[arg(long, conflicts_with = "random")]
    config: Option<String>,

    /// Generate a random starting colony instead of reading a seed.
    #[arg(long)]
    random: bool,

    /// RNG seed for reproducible random colonies.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to advance.
    #[arg(long, default_value_t = 10)]
    generations: u32,

    /// Cadence of automatic generation advances.
    #[arg(long, value_enum, default_value = "medium")]
    speed: SpeedArg,

    /// Wait for an enter press before each generation instead of a timer.
    #[arg(long)]
    manual: bool,

    /// Number of undo steps to take after the final generation.
    #[arg(long, default_value_t = 0)]
    undo: u32,

    /// Print the final colony as a single-line transfer snapshot.
    #[arg(long)]
    export: bool,
}

/// Auto-advance cadence selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpeedArg {
    /// Leisurely cadence.
    Slow,
    /// Default cadence.
    Medium,
    /// Rapid cadence.
    Fast,
}

impl From<SpeedArg> for Speed {
    fn from(value: SpeedArg) -> Self {
        match value {
            SpeedArg::Slow => Speed::Slow,
            SpeedArg::Medium => Speed::Medium,
            SpeedArg::Fast => Speed::Fast,
        }
    }
}

/// Explicit controller state threaded through the run loop.
#[derive(Clone, Copy, Debug)]
struct Session {
    mode: StepMode,
    generations: u32,
    undos: u32,
}

/// Entry point for the Colony Life command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let session = Session {
        mode: if args.manual {
            StepMode::Manual
        } else {
            StepMode::Auto {
                speed: args.speed.into(),
            }
        },
        generations: args.generations,
        undos: args.undo,
    };

    let grid = load_starting_grid(&args)?;
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::InstallGrid { grid }, &mut events);

    println!("{}", query::welcome_banner(&world));
    println!("{RULES}");
    report(&events);

    let mut presenter = TextPresenter::new(io::stdout().lock());
    present(&world, &mut presenter)?;

    for _ in 0..session.generations {
        wait_for_tick(session.mode)?;
        events.clear();
        world::apply(&mut world, Command::Advance, &mut events);
        report(&events);
        present(&world, &mut presenter)?;
    }

    for _ in 0..session.undos {
        if !query::undo_available(&world) {
            println!("undo unavailable: history is empty");
            break;
        }
        events.clear();
        world::apply(&mut world, Command::Undo, &mut events);
        report(&events);
        present(&world, &mut presenter)?;
    }

    if args.export {
        println!("{}", ColonySnapshot::from_grid(query::grid(&world)).encode());
    }
    Ok(())
}

fn load_starting_grid(args: &Args) -> Result<Grid> {
    if args.random || args.config.is_none() {
        let mut rng = match args.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        return Ok(seeding::random_colony(&mut rng));
    }
    let config = args
        .config
        .as_deref()
        .context("a seed source is required unless --random is set")?;

    if config.starts_with(grid_transfer::SNAPSHOT_HEADER) {
        let snapshot = ColonySnapshot::decode(config).context("invalid transfer snapshot")?;
        return snapshot.into_grid().context("invalid transfer snapshot");
    }

    let text = fs::read_to_string(config)
        .with_context(|| format!("failed to read seed file {config}"))?;
    seeding::parse_seed(&text).with_context(|| format!("failed to parse seed file {config}"))
}

fn wait_for_tick(mode: StepMode) -> Result<()> {
    match mode {
        StepMode::Auto { speed } => thread::sleep(speed.tick_delay()),
        StepMode::Manual => {
            println!("Hit [enter] to advance....");
            let mut line = String::new();
            let _ = io::stdin()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
        }
    }
    Ok(())
}

fn report(events: &[Event]) {
    for event in events {
        match event {
            Event::GridInstalled { rows, cols } => {
                println!("installed a {rows}x{cols} colony");
            }
            Event::GenerationAdvanced { generation } => {
                println!("generation {generation}");
            }
            Event::GenerationRestored {
                generation,
                undo_remaining,
            } => {
                println!("restored generation {generation} ({undo_remaining} undos left)");
            }
            Event::UndoRejected { reason } => {
                println!("undo rejected: {reason}");
            }
        }
    }
}

fn present<P: ScenePresenter>(world: &World, presenter: &mut P) -> Result<()> {
    presenter.present(&GridScene::from_grid(query::grid(world)))
}
