use std::collections::HashSet;

use gridwalk::longest::{longest_path, Trail};
use gridwalk::reach::ParityFrontier;
use gridwalk::shortest::{Crucible, RunLength};
use gridwalk::{Direction, Grid, Parity, Position, Step};
use proptest::prelude::*;

fn open_grid(rows: usize, cols: usize, symbol: char) -> Grid {
    let row: String = std::iter::repeat(symbol).take(cols).collect();
    let text = vec![row; rows].join("\n");
    Grid::parse(&text).unwrap()
}

fn farm() -> impl Strategy<Value = Grid> {
    (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::bool::weighted(0.7), rows * cols).prop_map(move |open| {
            let text = open.chunks(cols)
                .enumerate()
                .map(|(r, row)| row.iter()
                    .enumerate()
                    .map(|(c, o)| if (r, c) == (0, 0) || *o { '.' } else { '#' })
                    .collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            Grid::parse(&text).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn bounded_neighbors_stay_inside(rows in 1usize..9, cols in 1usize..9, r in 0usize..9, c in 0usize..9) {
        let grid = open_grid(rows, cols, '.');
        let position = Position::from((r % rows, c % cols));

        let neighbors = grid.neighbors(position, false);
        prop_assert!(neighbors.len() <= 4);
        for (neighbor, direction) in neighbors {
            prop_assert!(grid.contains(neighbor));
            prop_assert_eq!(direction.attempt_from(position), neighbor);
        }
    }

    #[test]
    fn wrapping_comes_full_circle(rows in 1usize..9, cols in 1usize..9, r in 0usize..9, c in 0usize..9) {
        let grid = open_grid(rows, cols, '.');
        let start = Position::from((r % rows, c % cols));

        let mut position = start;
        for _ in 0..rows {
            let south = grid.neighbors(position, true)
                .into_iter()
                .find(|(_, d)| *d == Direction::South)
                .map(|(p, _)| p);
            prop_assert!(south.is_some());
            position = south.unwrap();
        }

        prop_assert_eq!(position, start.offset_by((rows as isize, 0)));
        prop_assert_eq!(grid.wrap(position), start);
    }

    #[test]
    fn visited_sets_only_grow(grid in farm(), steps in 0usize..12, wrap in any::<bool>()) {
        let mut search = ParityFrontier::new(&grid, Position(0, 0), wrap, |c| c != '#');
        let mut previous: [HashSet<Position>; 2] = [HashSet::new(), HashSet::new()];

        for _ in 0..steps {
            search.step();
            for (index, parity) in [Parity::Even, Parity::Odd].into_iter().enumerate() {
                let visited = search.visited(parity);
                prop_assert!(previous[index].is_subset(visited));
                previous[index] = visited.clone();
            }
        }
    }

    #[test]
    fn crucible_alternating_unit_runs(n in 1usize..8) {
        let grid = open_grid(n, n, '1');
        let route = Crucible::new(&grid).with_run(RunLength::new(1, 1)).route_across();

        prop_assert_eq!(route.map(|r| r.cost), Ok(2 * (n as u64 - 1)));
    }

    #[test]
    fn crucible_long_runs_cost_manhattan(rows in 1usize..8, cols in 1usize..8) {
        let grid = open_grid(rows, cols, '1');
        let route = Crucible::new(&grid)
            .with_run(RunLength::new(1, rows.max(cols)))
            .route_across();

        prop_assert_eq!(route.map(|r| r.cost), Ok((rows + cols - 2) as u64));
    }

    #[test]
    fn straight_corridor_is_walked_whole(length in 1usize..30) {
        let grid = open_grid(1, length, '.');
        let goal = Position(0, length as isize - 1);

        let path = longest_path(&grid, Position(0, 0), goal, |c, d| Trail::Dry.can_enter(c, d));
        prop_assert_eq!(path.map(|p| p.cells.len()), Some(length));
    }
}
