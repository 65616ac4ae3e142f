use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridwalk::longest::Trail;
use gridwalk::puzzles::{self, contraption, dish, garden, hike, lagoon, lava, pipes, pulses, springs, Answer};
use gridwalk::reach::ReachConfig;
use gridwalk::shortest::RunLength;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "solver")]
#[command(about = "Advent of Code 2023 grid and graph puzzles")]
struct Cmd {
    /// Log search progress
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Answer one part of one day's puzzle
    Solve {
        /// Day of December
        day: u8,
        /// Puzzle input file
        input: PathBuf,
        #[arg(long, default_value_t = 1)]
        part: u8,
    },
    /// Route a crucible across a heat-loss map with custom run lengths
    Crucible {
        input: PathBuf,
        #[arg(long, default_value_t = 1)]
        min_run: usize,
        #[arg(long, default_value_t = 3)]
        max_run: usize,
        /// Print the map with the route marked
        #[arg(long)]
        show: bool,
    },
    /// Count garden plots reachable in an exact number of steps
    Reach {
        input: PathBuf,
        #[arg(long, default_value_t = 64)]
        steps: usize,
        /// Let the map tile the plane
        #[arg(long)]
        wrap: bool,
    },
    /// Find the longest hike through a forest map
    Hike {
        input: PathBuf,
        /// Treat slopes as ordinary path
        #[arg(long)]
        dry: bool,
        /// Print the map with the hike marked
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default().with_target(false).with_max_level(level).init();

    match cmd.action {
        Action::Solve { day, input, part } => solve(day, part, read(&input)?),
        Action::Crucible { input, min_run, max_run, show } => crucible(read(&input)?, RunLength::new(min_run, max_run), show),
        Action::Reach { input, steps, wrap } => {
            let answer = garden::reachable_plots(&read(&input)?, ReachConfig::steps(steps).with_wrap(wrap))?;
            println!("{answer}");
            Ok(())
        }
        Action::Hike { input, dry, show } => walk(read(&input)?, if dry { Trail::Dry } else { Trail::Slippery }, show),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn solve(day: u8, part: u8, input: String) -> Result<()> {
    let run: fn(&str) -> Answer = match (day, part) {
        (_, part) if part != 1 && part != 2 => bail!("part must be 1 or 2, not {part}"),
        (10, 1) => pipes::part_one,
        (10, _) => pipes::part_two,
        (12, 1) => springs::part_one,
        (12, _) => springs::part_two,
        (14, 1) => dish::part_one,
        (14, _) => dish::part_two,
        (16, 1) => contraption::part_one,
        (16, _) => contraption::part_two,
        (17, 1) => lava::part_one,
        (17, _) => lava::part_two,
        (18, 1) => lagoon::part_one,
        (18, _) => lagoon::part_two,
        (20, 1) => pulses::part_one,
        (20, _) => pulses::part_two,
        (21, 1) => garden::part_one,
        (21, _) => garden::part_two,
        (23, 1) => hike::part_one,
        (23, _) => hike::part_two,
        _ => bail!("day {day} is not solved here"),
    };

    let started = Instant::now();
    let answer = run(&input).with_context(|| format!("solving day {day} part {part}"))?;
    tracing::info!(day, part, elapsed = ?started.elapsed(), "solved");
    println!("{answer}");
    Ok(())
}

fn crucible(input: String, run: RunLength, show: bool) -> Result<()> {
    let grid = gridwalk::Grid::parse(&input)?;
    let route = lava::best_route(&grid, run)?;
    tracing::info!(min = run.min, max = run.max, turns = route.waypoints.len().saturating_sub(2), "routed");

    if show {
        print!("{}", grid.with_cells(route.cells(), '#'));
    }
    println!("{}", route.cost);
    Ok(())
}

fn walk(input: String, trail: Trail, show: bool) -> Result<()> {
    let map = hike::Hike::parse(&input)?;
    let path = map.longest_walk(trail).ok_or(puzzles::PuzzleError::Missing("hike to the exit"))?;

    if show {
        print!("{}", map.grid.with_cells(path.cells.iter().copied(), 'O'));
    }
    println!("{}", path.steps());
    Ok(())
}
