//! Day 14: rolling rocks on a tilting platform.
//!
//! Only eastward and westward tilts are implemented directly, row by row; north and south tilt a transposed copy.

use crate::cycle::state_after;
use crate::grid::Grid;
use crate::puzzles::Answer;
use crate::shape::Direction;

const SPINS: usize = 1_000_000_000;

/// Tilt `grid` until every round rock (`O`) has rolled as far as it can towards `direction`. Cube rocks (`#`) stay put.
pub fn tilt(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        // '.' sorts before 'O', so an ascending sort rolls rocks to the end of each stretch
        Direction::East => grid.map_rows(|row| row.split_mut(|c| *c == b'#').for_each(|stretch| stretch.sort_unstable())),
        Direction::West => grid.map_rows(|row| row.split_mut(|c| *c == b'#').for_each(|stretch| {
            stretch.sort_unstable_by(|a, b| b.cmp(a))
        })),
        Direction::North => tilt(&grid.transposed(), Direction::West).transposed(),
        Direction::South => tilt(&grid.transposed(), Direction::East).transposed(),
    }
}

/// Tilt north, west, south, then east.
pub fn spin(grid: &Grid) -> Grid {
    [Direction::North, Direction::West, Direction::South, Direction::East]
        .into_iter()
        .fold(grid.clone(), |grid, direction| tilt(&grid, direction))
}

/// Load on the north support beams: each round rock weighs its distance from the south edge.
pub fn north_load(grid: &Grid) -> u64 {
    grid.find_all('O')
        .into_iter()
        .map(|rock| (grid.rows() as isize - rock.0) as u64)
        .sum()
}

/// Load after a single northward tilt.
pub fn part_one(input: &str) -> Answer {
    let grid = Grid::parse(input)?;
    Ok(north_load(&tilt(&grid, Direction::North)))
}

/// Load after a billion spin cycles.
pub fn part_two(input: &str) -> Answer {
    let grid = Grid::parse(input)?;
    Ok(north_load(&state_after(grid, SPINS, spin)))
}
