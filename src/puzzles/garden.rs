//! Day 21: garden plots an elf can stand on after an exact number of steps.

use tracing::debug;

use crate::builder::GridBuilder;
use crate::grid::Grid;
use crate::location::Position;
use crate::puzzles::{Answer, PuzzleError};
use crate::reach::{reachable_in, ParityFrontier, ReachConfig};

const SHORT_WALK: usize = 64;
const LONG_WALK: usize = 26_501_365;

fn is_plot(symbol: char) -> bool {
    symbol != '#'
}

fn parse(input: &str) -> Result<(Grid, Position), PuzzleError> {
    let grid = GridBuilder::new().push_rows(input).require_symbol('S').build()?;
    let start = grid.find('S').ok_or(PuzzleError::Missing("start plot"))?;
    Ok((grid, start))
}

/// Plots reachable in exactly `config.num_steps` steps from `S`.
pub fn reachable_plots(input: &str, config: ReachConfig) -> Answer {
    let (grid, start) = parse(input)?;
    Ok(reachable_in(&grid, start, config, is_plot).len() as u64)
}

/// Evaluate the quadratic through `(0, a)`, `(1, b)`, `(2, c)` at `x`.
pub fn extrapolate([a, b, c]: [u64; 3], x: u64) -> u64 {
    let (a, b, c, x) = (a as i128, b as i128, c as i128, x as i128);
    let value = a + x * (b - a) + x * (x - 1) / 2 * (c - 2 * b + a);
    value as u64
}

/// Plots reachable in exactly `num_steps` steps on the infinite tiling of a square farm.
///
/// Sampling the count at three step counts spaced one tile apart and fitting a quadratic gives the answer for any step count congruent to them,
/// provided the count grows quadratically tile by tile, as it does when the start row and column are clear.
pub fn plots_on_infinite_farm(grid: &Grid, start: Position, num_steps: usize) -> u64 {
    let tile = grid.rows();
    let offset = num_steps % tile;

    if grid.rows() != grid.cols() || num_steps < offset + 2 * tile {
        return reachable_in(grid, start, ReachConfig::steps(num_steps).with_wrap(true), is_plot).len() as u64;
    }

    let mut search = ParityFrontier::new(grid, start, true, is_plot);
    let samples = [offset, offset + tile, offset + 2 * tile]
        .map(|steps| search.advance_to(steps).reachable().len() as u64);

    let tiles = (num_steps / tile) as u64;
    debug!(?samples, tiles, "extrapolating plot count");
    extrapolate(samples, tiles)
}

/// Plots reachable in exactly 64 steps.
pub fn part_one(input: &str) -> Answer {
    reachable_plots(input, ReachConfig::steps(SHORT_WALK))
}

/// Plots reachable in exactly 26501365 steps on the infinite farm.
pub fn part_two(input: &str) -> Answer {
    let (grid, start) = parse(input)?;
    Ok(plots_on_infinite_farm(&grid, start, LONG_WALK))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        ...........
        .....###.#.
        .###.##..#.
        ..#.#...#..
        ....#.#....
        .##..S####.
        .##..#...#.
        .......##..
        .##.#.####.
        .##..##.##.
        ...........
    "};

    #[test]
    fn bounded_farm() -> Result<(), PuzzleError> {
        for (steps, plots) in [(0, 1), (1, 2), (2, 4), (3, 6), (6, 16)] {
            assert_eq!(reachable_plots(EXAMPLE, ReachConfig::steps(steps))?, plots);
        }
        Ok(())
    }

    #[test]
    fn infinite_farm() -> Result<(), PuzzleError> {
        for (steps, plots) in [(6, 16), (10, 50), (50, 1594), (100, 6536)] {
            assert_eq!(reachable_plots(EXAMPLE, ReachConfig::steps(steps).with_wrap(true))?, plots);
        }
        Ok(())
    }

    #[test]
    fn quadratic_extrapolation() {
        // 3x² + 2x + 1
        assert_eq!(extrapolate([1, 6, 17], 5), 86);
        assert_eq!(extrapolate([1, 6, 17], 0), 1);
    }

    #[test]
    fn open_farm_extrapolates_exactly() -> Result<(), PuzzleError> {
        let (grid, start) = parse(".....\n.....\n..S..\n.....\n.....\n")?;
        assert_eq!(plots_on_infinite_farm(&grid, start, 20), 441);
        assert_eq!(plots_on_infinite_farm(&grid, start, 1000), 1001 * 1001);
        Ok(())
    }

    #[test]
    fn missing_start() {
        assert!(matches!(part_one("...\n...\n"), Err(PuzzleError::Grid(_))));
    }
}
