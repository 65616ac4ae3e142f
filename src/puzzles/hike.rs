//! Day 23: the longest scenic hike through snow island's forest.

use crate::compress::{compress, CompressedGraph, Perimeter};
use crate::grid::Grid;
use crate::location::Position;
use crate::longest::{longest_graph_path_with_perimeter, longest_path, GridPath, Trail};
use crate::puzzles::{Answer, PuzzleError};

/// A forest map with its entrance in the top row and exit in the bottom row.
pub struct Hike {
    /// The map itself.
    pub grid: Grid,
    /// The only path tile in the top row.
    pub start: Position,
    /// The only path tile in the bottom row.
    pub goal: Position,
}

impl Hike {
    /// Parse a map, locating the entrance and exit.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let grid = Grid::parse(input)?;

        let path_in_row = |row: usize| {
            grid.row(row)
                .find('.')
                .map(|col| Position::from((row, col)))
        };
        let start = path_in_row(0).ok_or(PuzzleError::Missing("entrance in the top row"))?;
        let goal = path_in_row(grid.rows() - 1).ok_or(PuzzleError::Missing("exit in the bottom row"))?;

        Ok(Self { grid, start, goal })
    }

    /// The longest hike walking cell by cell under `trail`'s rules.
    pub fn longest_walk(&self, trail: Trail) -> Option<GridPath> {
        longest_path(&self.grid, self.start, self.goal, |symbol, direction| trail.can_enter(symbol, direction))
    }

    /// The map reduced to its crossroads, ignoring slopes.
    pub fn junctions(&self) -> CompressedGraph {
        compress(&self.grid, self.start, self.goal, |symbol| symbol != '#')
    }
}

/// Longest hike down the icy slopes.
pub fn part_one(input: &str) -> Answer {
    let hike = Hike::parse(input)?;
    let walk = hike.longest_walk(Trail::Slippery).ok_or(PuzzleError::Missing("hike to the exit"))?;
    Ok(walk.steps() as u64)
}

/// Longest hike once the slopes are dry.
pub fn part_two(input: &str) -> Answer {
    let hike = Hike::parse(input)?;
    let graph = hike.junctions();
    let perimeter = Perimeter::infer(&graph);

    let walk = longest_graph_path_with_perimeter(&graph, &perimeter)
        .ok_or(PuzzleError::Missing("hike to the exit"))?;
    Ok(walk.length as u64)
}
