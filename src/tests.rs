#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::builder::{GridBuilder, GridInvalidReason};
    use crate::compress::{compress, Perimeter};
    use crate::cycle::{state_after, Cycle};
    use crate::grid::Grid;
    use crate::location::Position;
    use crate::longest::{longest_graph_path, longest_graph_path_with_perimeter, longest_path, Trail};
    use crate::reach::{reachable_in, ParityFrontier, ReachConfig};
    use crate::shape::{Direction, DirectionError};
    use crate::shortest::{digit_cost, Crucible, RunLength, SearchFailure};
    use crate::state::Parity;

    // two corridors join the same pair of junctions; the shorter is found first
    const PARALLEL_CORRIDORS: &str = indoc! {"
        #.####
        #....#
        #.##.#
        #.##.#
        #....#
        ##.###
    "};

    // a 3x3 lattice of junctions, two of its corners folded into corridors
    const LATTICE: &str = indoc! {"
        #.#####
        #.....#
        #.#.#.#
        #.....#
        #.#.#.#
        #.....#
        #####.#
    "};

    #[test]
    fn build_and_print() {
        let grid = GridBuilder::new()
            .push_row("#.#")
            .push_row("...")
            .build()
            .unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(format!("{}", grid), "#.#
...
");
    }

    #[test]
    fn builder_collects_reasons() {
        let err = GridBuilder::new()
            .push_row("...")
            .push_row("..")
            .require_symbol('S')
            .build()
            .unwrap_err();

        assert_eq!(err.reasons, vec![
            GridInvalidReason::UnequalRows { row: 1, expected: 3, found: 2 },
            GridInvalidReason::MissingSymbol('S'),
        ]);
        assert_eq!(GridBuilder::new().push_rows("\n\n").build().unwrap_err().reasons, vec![GridInvalidReason::Empty]);
    }

    #[test]
    fn builder_stops_at_first_bad_row() {
        let mut builder = GridBuilder::new();
        builder.push_row("ab").push_row("é").push_row("cd");

        assert_eq!(builder.is_valid(), Some(&vec![GridInvalidReason::NonAscii { row: 1 }]));
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let grid: Grid = "ab\ncd\n\n\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn transforms() {
        let grid = Grid::parse("abc\ndef\n").unwrap();

        assert_eq!(format!("{}", grid.transposed()), "ad
be
cf
");
        assert_eq!(format!("{}", grid.flipped_rows()), "def
abc
");
        assert_eq!(format!("{}", grid.flipped_cols()), "cba
fed
");
        assert_eq!(format!("{}", grid.with_cells([Position(0, 0), Position(5, 5)], '*')), "*bc
def
");
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let grid = Grid::parse("...\n...\n").unwrap();

        assert_eq!(grid.neighbors(Position(0, 0), false), vec![
            (Position(1, 0), Direction::South),
            (Position(0, 1), Direction::East),
        ]);
        assert_eq!(grid.neighbors(Position(1, 1), false).len(), 3);
    }

    #[test]
    fn neighbors_wrap_keep_logical_positions() {
        let grid = Grid::parse("ab\ncd\n").unwrap();
        let neighbors = grid.neighbors(Position(0, 0), true);

        assert_eq!(neighbors[0], (Position(-1, 0), Direction::North));
        assert_eq!(grid.cell_at_wrapped(Position(-1, 0)), 'c');
        assert_eq!(grid.cell_at_wrapped(Position(0, -1)), 'b');
        assert_eq!(grid.wrap(Position(-3, 5)), Position(1, 1));
    }

    #[test]
    #[should_panic]
    fn cell_at_out_of_bounds() {
        let grid = Grid::parse("..\n..\n").unwrap();
        grid.cell_at(Position(2, 0));
    }

    #[test]
    fn parse_directions() {
        assert_eq!(Direction::try_from('U'), Ok(Direction::North));
        assert_eq!(Direction::try_from('e'), Ok(Direction::East));
        assert_eq!(Direction::try_from('x'), Err(DirectionError::InvalidDirection('x')));
        assert_eq!(Direction::from_arrow('>'), Some(Direction::East));
    }

    #[test]
    fn reach_zero_steps() {
        let grid = Grid::parse("###\n#.#\n###\n").unwrap();
        let start = Position(1, 1);

        let reached = reachable_in(&grid, start, ReachConfig::steps(0), |c| c != '#');
        assert_eq!(reached.len(), 1);
        assert!(reached.contains(&start));

        assert!(reachable_in(&grid, start, ReachConfig::steps(1), |c| c != '#').is_empty());
        assert_eq!(reachable_in(&grid, start, ReachConfig::steps(2), |c| c != '#').len(), 1);
    }

    #[test]
    fn frontier_tracks_parity() {
        let grid = Grid::parse(".....\n").unwrap();
        let mut search = ParityFrontier::new(&grid, Position(0, 0), false, |_| true);

        search.advance_to(3);
        assert_eq!(search.steps(), 3);
        assert_eq!(search.visited(Parity::Even).len(), 2);
        assert_eq!(search.visited(Parity::Odd).len(), 2);
        assert_eq!(search.frontier().iter().collect::<Vec<_>>(), vec![&Position(0, 3)]);
    }

    #[test]
    fn single_corridor() {
        let grid = Grid::parse(indoc! {"
            #.###
            #...#
            ###.#
            ###.#
        "}).unwrap();

        let path = longest_path(&grid, Position(0, 1), Position(3, 3), |c, d| Trail::Slippery.can_enter(c, d)).unwrap();
        assert_eq!(path.cells.len(), 6);
        assert_eq!(path.steps(), 5);
        assert_eq!(longest_path(&grid, Position(0, 1), Position(0, 1), |_, _| true).unwrap().steps(), 0);
    }

    #[test]
    fn slopes_are_one_way() {
        let grid = Grid::parse("#.###\n#.<.#\n###.#\n").unwrap();
        let (start, goal) = (Position(0, 1), Position(2, 3));

        assert!(longest_path(&grid, start, goal, |c, d| Trail::Slippery.can_enter(c, d)).is_none());
        assert_eq!(longest_path(&grid, start, goal, |c, d| Trail::Dry.can_enter(c, d)).unwrap().steps(), 4);
        assert_eq!(longest_path(&grid, goal, start, |c, d| Trail::Slippery.can_enter(c, d)).unwrap().steps(), 4);
    }

    #[test]
    fn slopes_can_be_entered_from_the_side() {
        let grid = Grid::parse(".##\n>..\n").unwrap();

        let path = longest_path(&grid, Position(0, 0), Position(1, 2), |c, d| Trail::Slippery.can_enter(c, d)).unwrap();
        assert_eq!(path.steps(), 3);
        assert!(Trail::Slippery.can_enter('>', Direction::South));
        assert!(!Trail::Slippery.can_enter('>', Direction::West));
    }

    #[test]
    fn parallel_corridors_keep_the_first() {
        let grid = Grid::parse(PARALLEL_CORRIDORS).unwrap();
        let (start, goal) = (Position(0, 1), Position(5, 2));
        let (fork, join) = (Position(1, 1), Position(4, 2));

        let graph = compress(&grid, start, goal, |c| c != '#');
        assert_eq!(graph.junctions().len(), 4);
        assert_eq!(graph.segment_count(), 3);
        assert_eq!(graph.segment(join, fork).map(|s| s.weight()), Some(4));

        // the eight-step corridor was dropped, so the junction walk falls short of the cell walk
        let by_cell = longest_path(&grid, start, goal, |c, d| Trail::Dry.can_enter(c, d)).unwrap();
        assert_eq!(by_cell.steps(), 10);
        assert_eq!(longest_graph_path(&graph).unwrap().length, 6);
    }

    #[test]
    fn lattice_compression() {
        let grid = Grid::parse(LATTICE).unwrap();
        let (start, goal) = (Position(0, 1), Position(6, 5));

        let graph = compress(&grid, start, goal, |c| c != '#');
        assert_eq!(graph.junctions().len(), 9);
        assert_eq!(graph.segment_count(), 12);
        assert_eq!(graph.segment(Position(1, 3), Position(3, 5)).map(|s| s.weight()), Some(4));

        let by_cell = longest_path(&grid, start, goal, |c, d| Trail::Dry.can_enter(c, d)).unwrap();
        let by_junction = longest_graph_path(&graph).unwrap();
        assert_eq!(by_cell.steps(), 18);
        assert_eq!(by_junction.length, 18);
        assert_eq!(graph.expand(&by_junction.junctions).len(), 19);
    }

    #[test]
    fn lattice_perimeter() {
        let grid = Grid::parse(LATTICE).unwrap();
        let graph = compress(&grid, Position(0, 1), Position(6, 5), |c| c != '#');

        let perimeter = Perimeter::infer(&graph);
        assert_eq!(perimeter.len(), 6);
        assert!(perimeter.allows(Position(1, 1), Position(1, 3)));
        assert!(!perimeter.allows(Position(1, 3), Position(1, 1)));
        // the centre junction is not on the perimeter
        assert!(perimeter.allows(Position(3, 3), Position(1, 3)));
        // the folded corner leaves one edge straight across it
        assert!(perimeter.allows(Position(1, 3), Position(3, 5)));
        assert!(!perimeter.allows(Position(3, 5), Position(1, 3)));

        assert_eq!(longest_graph_path_with_perimeter(&graph, &perimeter).unwrap().length, 18);
        assert_eq!(longest_graph_path_with_perimeter(&graph, &Perimeter::default()).unwrap().length, 18);
    }

    #[test]
    fn crucible_smallest() {
        let grid = Grid::parse("11\n11\n").unwrap();
        let route = Crucible::new(&grid)
            .with_run(RunLength::new(1, 1))
            .route(Position(0, 0), Position(1, 1))
            .unwrap();

        assert_eq!(route.cost, 2);
        assert_eq!(route.cells().len(), 3);
    }

    #[test]
    fn crucible_walled_off() {
        let grid = Grid::parse(indoc! {"
            1111
            1111
            11##
            11#1
        "}).unwrap();

        assert_eq!(Crucible::new(&grid).route_across(), Err(SearchFailure::NoPathFound {
            start: Position(0, 0),
            goal: Position(3, 3),
        }));
    }

    #[test]
    fn crucible_must_run_before_turning() {
        let grid = Grid::parse("1111\n1111\n").unwrap();
        let search = Crucible::new(&grid).with_run(RunLength::new(2, 3));

        // one row down is too short a run
        assert!(search.route_across().is_err());
        let route = search.route(Position(0, 0), Position(1, 2)).unwrap_err();
        assert_eq!(route, SearchFailure::NoPathFound { start: Position(0, 0), goal: Position(1, 2) });
    }

    #[test]
    fn crucible_custom_cost() {
        let grid = Grid::parse("..#\n...\n").unwrap();
        let route = Crucible::new(&grid)
            .with_cost(|c| (c == '.').then_some(1))
            .route_across()
            .unwrap();

        assert_eq!(route.cost, 3);
        assert_eq!(route.waypoints.first(), Some(&Position(0, 0)));
        assert_eq!(route.waypoints.last(), Some(&Position(1, 2)));
        assert_eq!(digit_cost('7'), Some(7));
        assert_eq!(digit_cost('#'), None);
    }

    #[test]
    fn cycle_projection() {
        let cycle = Cycle { start: 3, length: 4 };
        assert_eq!(cycle.project(2), 2);
        assert_eq!(cycle.project(10), 6);

        let step = |x: &u32| if *x < 3 { x + 1 } else { 3 + (x - 2) % 4 };
        assert_eq!(state_after(0, 10, step), 6);
        assert_eq!(state_after(0, 5, step), 5);
        assert_eq!(state_after(0u32, 1_000_000_000, |x| (x + 1) % 7), 6);
    }
}
