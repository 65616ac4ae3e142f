//! Day 10: a loop of pipes hidden among junk pipes.

use std::collections::HashSet;

use strum::VariantArray;

use crate::grid::Grid;
use crate::location::Position;
use crate::puzzles::{Answer, PuzzleError};
use crate::shape::{Direction, Step};

const PIPES: [char; 6] = ['|', '-', 'L', 'J', '7', 'F'];

/// The two sides a pipe opens onto.
fn connections(pipe: char) -> Option<[Direction; 2]> {
    use Direction::*;

    match pipe {
        '|' => Some([North, South]),
        '-' => Some([West, East]),
        'L' => Some([North, East]),
        'J' => Some([North, West]),
        '7' => Some([South, West]),
        'F' => Some([South, East]),
        _ => None,
    }
}

/// The heading on leaving `pipe` after entering it while heading `heading`, if the pipe accepts flow from that side.
pub fn exit(pipe: char, heading: Direction) -> Option<Direction> {
    let [a, b] = connections(pipe)?;
    let entry = heading.invert();

    if a == entry {
        Some(b)
    } else if b == entry {
        Some(a)
    } else {
        None
    }
}

/// The main loop through the start tile.
#[derive(Clone, Debug)]
pub struct PipeLoop {
    /// Every tile of the loop in walking order, starting at the start tile.
    pub cells: Vec<Position>,
    /// The pipe hidden under the start tile.
    pub start_pipe: char,
}

impl PipeLoop {
    /// Trace the loop through the `S` tile of `grid`.
    pub fn trace(grid: &Grid) -> Result<Self, PuzzleError> {
        let start = grid.find('S').ok_or(PuzzleError::Missing("start tile"))?;

        for first in Direction::VARIANTS {
            let mut cells = vec![start];
            let mut position = start;
            let mut heading = *first;

            loop {
                position = heading.attempt_from(position);
                if position == start {
                    let ends = [*first, heading.invert()];
                    let start_pipe = PIPES.into_iter()
                        .find(|pipe| connections(*pipe).is_some_and(|c| ends.iter().all(|end| c.contains(end))));

                    match start_pipe {
                        Some(start_pipe) => return Ok(Self { cells, start_pipe }),
                        None => break,
                    }
                }

                let Some(next) = grid.get(position).and_then(|pipe| exit(pipe, heading)) else {
                    break;
                };
                if cells.len() > grid.rows() * grid.cols() {
                    break;
                }

                cells.push(position);
                heading = next;
            }
        }

        Err(PuzzleError::Missing("loop through the start tile"))
    }

    /// Steps to the tile of the loop farthest from the start.
    pub fn farthest(&self) -> usize {
        self.cells.len() / 2
    }

    /// Tiles not on the loop but enclosed by it.
    ///
    /// Scanning each row, crossing a loop tile that opens northwards flips between outside and inside.
    pub fn enclosed(&self, grid: &Grid) -> usize {
        let on_loop: HashSet<Position> = self.cells.iter().copied().collect();
        let start = self.cells[0];

        let mut enclosed = 0;
        for row in 0..grid.rows() {
            let mut inside = false;
            for col in 0..grid.cols() {
                let position = Position::from((row, col));
                if !on_loop.contains(&position) {
                    enclosed += usize::from(inside);
                    continue;
                }

                let pipe = match position == start {
                    true => self.start_pipe,
                    false => grid.cell_at(position),
                };
                if connections(pipe).is_some_and(|c| c.contains(&Direction::North)) {
                    inside = !inside;
                }
            }
        }

        enclosed
    }
}

/// Distance to the farthest tile of the loop.
pub fn part_one(input: &str) -> Answer {
    let grid = Grid::parse(input)?;
    Ok(PipeLoop::trace(&grid)?.farthest() as u64)
}

/// Tiles enclosed by the loop.
pub fn part_two(input: &str) -> Answer {
    let grid = Grid::parse(input)?;
    Ok(PipeLoop::trace(&grid)?.enclosed(&grid) as u64)
}
