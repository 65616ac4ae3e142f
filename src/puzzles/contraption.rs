//! Day 16: a beam of light bouncing between mirrors and splitters.

use std::collections::HashSet;

use itertools::Itertools;

use crate::grid::Grid;
use crate::location::Position;
use crate::puzzles::{Answer, PuzzleError};
use crate::shape::{Direction, Step};
use crate::state::SearchState;

/// Headings of the beam(s) leaving `tile` after a beam enters it heading `heading`.
///
/// Mirrors (`/`, `\`) turn the beam; splitters (`|`, `-`) hit side-on split it in two. Anything else lets it pass.
pub fn deflect(tile: char, heading: Direction) -> (Direction, Option<Direction>) {
    use Direction::*;

    match (tile, heading) {
        ('/', North) => (East, None),
        ('/', East) => (North, None),
        ('/', South) => (West, None),
        ('/', West) => (South, None),
        ('\\', North) => (West, None),
        ('\\', West) => (North, None),
        ('\\', South) => (East, None),
        ('\\', East) => (South, None),
        ('|', West | East) => (North, Some(South)),
        ('-', North | South) => (West, Some(East)),
        _ => (heading, None),
    }
}

/// Number of tiles a beam entering at `start` heading `heading` passes through.
pub fn energized(grid: &Grid, start: Position, heading: Direction) -> usize {
    let mut seen: HashSet<SearchState<Direction>> = HashSet::new();
    let mut stack = vec![SearchState::new(start, heading)];

    while let Some(state) = stack.pop() {
        if !grid.contains(state.position) || !seen.insert(state) {
            continue;
        }

        let (first, second) = deflect(grid.cell_at(state.position), state.discriminator);
        for heading in std::iter::once(first).chain(second) {
            stack.push(SearchState::new(heading.attempt_from(state.position), heading));
        }
    }

    seen.into_iter().map(|state| state.position).unique().count()
}

/// Every way a beam can enter from the edge of `grid`.
pub fn edge_entries(grid: &Grid) -> Vec<(Position, Direction)> {
    let (last_row, last_col) = (grid.rows() - 1, grid.cols() - 1);

    (0..grid.rows())
        .flat_map(|row| [
            (Position::from((row, 0)), Direction::East),
            (Position::from((row, last_col)), Direction::West),
        ])
        .chain((0..grid.cols()).flat_map(|col| [
            (Position::from((0, col)), Direction::South),
            (Position::from((last_row, col)), Direction::North),
        ]))
        .collect_vec()
}

fn parse(input: &str) -> Result<Grid, PuzzleError> {
    let grid = Grid::parse(input)?;
    if let Some(position) = grid.positions().find(|p| !".|-/\\".contains(grid.cell_at(*p))) {
        return Err(PuzzleError::parse(
            position.0 as usize,
            format!("unexpected tile {:?}", grid.cell_at(position)),
        ));
    }

    Ok(grid)
}

/// Tiles energized by a beam entering the top left corner heading east.
pub fn part_one(input: &str) -> Answer {
    let grid = parse(input)?;
    Ok(energized(&grid, Position(0, 0), Direction::East) as u64)
}

/// Most tiles energized by any beam entering from the edge.
pub fn part_two(input: &str) -> Answer {
    let grid = parse(input)?;
    let best = edge_entries(&grid)
        .into_iter()
        .map(|(start, heading)| energized(&grid, start, heading))
        .max()
        .unwrap_or(0);

    Ok(best as u64)
}
