use tracing::debug;

use crate::compress::{CompressedGraph, Perimeter};
use crate::grid::Grid;
use crate::location::Position;
use crate::shape::{Direction, Step};

/// Rules for which cells a hike may step onto.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Trail {
    /// Slope arrows (`^`, `v`, `<`, `>`) can never be entered against the direction they point.
    #[default]
    Slippery,
    /// Slopes are ordinary path.
    Dry,
}

impl Trail {
    /// Whether a cell holding `symbol` may be entered while heading `direction`. Forest (`#`) never may.
    pub fn can_enter(self, symbol: char, direction: Direction) -> bool {
        if symbol == '#' {
            return false;
        }

        match (self, Direction::from_arrow(symbol)) {
            (Self::Slippery, Some(slope)) => slope != direction.invert(),
            _ => true,
        }
    }
}

/// A simple path over grid cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridPath {
    /// Cells in walking order, both ends included.
    pub cells: Vec<Position>,
}

impl GridPath {
    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// A simple path over the junctions of a [`CompressedGraph`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphPath {
    /// Junctions in walking order, both ends included.
    pub junctions: Vec<Position>,
    /// Total weight of the segments walked.
    pub length: usize,
}

/// The longest simple path from `start` to `goal` stepping only where `can_enter` allows.
///
/// Every simple path is enumerated with an explicit stack, so the running time is exponential in the number of forks.
/// Returns [`None`] when `goal` cannot be reached.
pub fn longest_path<F>(grid: &Grid, start: Position, goal: Position, can_enter: F) -> Option<GridPath>
where
    F: Fn(char, Direction) -> bool,
{
    if start == goal {
        return Some(GridPath { cells: vec![start] });
    }

    let mut best: Option<Vec<Position>> = None;
    let mut closed = 0usize;
    let mut stack = vec![vec![start]];

    while let Some(path) = stack.pop() {
        let Some(&last) = path.last() else {
            continue;
        };

        for (next, direction) in grid.neighbors(last, false) {
            if !can_enter(grid.cell_at(next), direction) || path.contains(&next) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(next);

            if next == goal {
                closed += 1;
                if best.as_ref().map_or(true, |b| extended.len() > b.len()) {
                    best = Some(extended);
                }
            } else {
                stack.push(extended);
            }
        }
    }

    debug!(%start, %goal, closed, best = ?best.as_ref().map(Vec::len), "grid path search finished");
    best.map(|cells| GridPath { cells })
}

/// The heaviest simple walk from the graph's start to its goal.
pub fn longest_graph_path(graph: &CompressedGraph) -> Option<GraphPath> {
    search_graph(graph, |_, _| true)
}

/// As [`longest_graph_path`], never walking a `perimeter` edge backwards.
pub fn longest_graph_path_with_perimeter(graph: &CompressedGraph, perimeter: &Perimeter) -> Option<GraphPath> {
    search_graph(graph, |from, to| perimeter.allows(from, to))
}

fn search_graph<F>(compressed: &CompressedGraph, allows: F) -> Option<GraphPath>
where
    F: Fn(Position, Position) -> bool,
{
    let (start, goal) = (compressed.start(), compressed.goal());
    let graph = compressed.graph();

    if start == goal {
        return Some(GraphPath { junctions: vec![start], length: 0 });
    }

    let mut best: Option<GraphPath> = None;
    let mut closed = 0usize;
    let mut stack = vec![(vec![start], 0usize)];

    while let Some((path, length)) = stack.pop() {
        let Some(&last) = path.last() else {
            continue;
        };

        for (_, next, weight) in graph.edges(last) {
            if path.contains(&next) || !allows(last, next) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(next);
            let length = length + weight;

            if next == goal {
                closed += 1;
                if best.as_ref().map_or(true, |b| length > b.length) {
                    best = Some(GraphPath { junctions: extended, length });
                }
            } else {
                stack.push((extended, length));
            }
        }
    }

    debug!(%start, %goal, closed, best = ?best.as_ref().map(|b| b.length), "junction path search finished");
    best
}
