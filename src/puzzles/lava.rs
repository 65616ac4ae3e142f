//! Day 17: steering crucibles of lava through a city of heat-loss blocks.

use crate::grid::Grid;
use crate::puzzles::{Answer, PuzzleError};
use crate::shortest::{Crucible, Route, RunLength};

fn parse(input: &str) -> Result<Grid, PuzzleError> {
    let grid = Grid::parse(input)?;
    if let Some(position) = grid.positions().find(|p| !grid.cell_at(*p).is_ascii_digit()) {
        return Err(PuzzleError::parse(
            position.0 as usize,
            format!("unexpected block {:?}", grid.cell_at(position)),
        ));
    }

    Ok(grid)
}

/// Cheapest route from the top left block to the bottom right block with runs limited by `run`.
pub fn best_route(grid: &Grid, run: RunLength) -> Result<Route, PuzzleError> {
    Ok(Crucible::new(grid).with_run(run).route_across()?)
}

/// Least heat lost on the way across with runs limited by `run`.
pub fn minimal_heat_loss(input: &str, run: RunLength) -> Answer {
    let grid = parse(input)?;
    Ok(best_route(&grid, run)?.cost)
}

/// An ordinary crucible, moving 1 to 3 blocks between turns.
pub fn part_one(input: &str) -> Answer {
    minimal_heat_loss(input, RunLength::default())
}

/// An ultra crucible, moving 4 to 10 blocks between turns.
pub fn part_two(input: &str) -> Answer {
    minimal_heat_loss(input, RunLength::ULTRA)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::location::Position;

    const EXAMPLE: &str = indoc! {"
        2413432311323
        3215453535623
        3255245654254
        3446585845452
        4546657867536
        1438598798454
        4457876987766
        3637877979653
        4654967986887
        4564679986453
        1224686865563
        2546548887735
        4322674655533
    "};

    const UNFORTUNATE: &str = indoc! {"
        111111111111
        999999999111
        999999999111
        999999999111
        999999999991
    "};

    #[test]
    fn ordinary_crucible() -> Result<(), PuzzleError> {
        assert_eq!(part_one(EXAMPLE)?, 102);
        assert_eq!(part_one(UNFORTUNATE)?, 49);
        Ok(())
    }

    #[test]
    fn ultra_crucible() -> Result<(), PuzzleError> {
        assert_eq!(part_two(EXAMPLE)?, 94);
        assert_eq!(part_two(UNFORTUNATE)?, 71);
        Ok(())
    }

    #[test]
    fn route_cells_add_up_to_cost() -> Result<(), PuzzleError> {
        let grid = parse(EXAMPLE)?;
        let route = best_route(&grid, RunLength::default())?;

        let cells = route.cells();
        assert_eq!(cells.first(), Some(&Position(0, 0)));
        assert_eq!(cells.last(), Some(&Position(12, 12)));

        let cost: u64 = cells[1..].iter()
            .map(|p| u64::from(grid.cell_at(*p).to_digit(10).unwrap_or(0)))
            .sum();
        assert_eq!(cost, route.cost);
        Ok(())
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(part_one("12\n3x\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part_one("12\n3\n"), Err(PuzzleError::Grid(_))));
    }
}
