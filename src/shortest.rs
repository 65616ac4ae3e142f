use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use itertools::Itertools;
use strum::VariantArray;
use thiserror::Error;
use tracing::{debug, trace};

use crate::grid::Grid;
use crate::location::Position;
use crate::shape::{Axis, Step};
use crate::state::SearchState;

/// Ways a weighted search may fail.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchFailure {
    /// The priority queue drained without ever reaching the goal.
    #[error("no path exists from {start} to {goal}")]
    NoPathFound {
        /// Where the search began.
        start: Position,
        /// Where it was headed.
        goal: Position,
    },
}

/// How far a crucible must and may travel in a straight line before turning.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RunLength {
    /// Shortest run allowed between turns.
    pub min: usize,
    /// Longest run allowed between turns.
    pub max: usize,
}

impl RunLength {
    /// Runs of 4 to 10 cells.
    pub const ULTRA: Self = Self::new(4, 10);

    /// Runs of `min` to `max` cells.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Signed run lengths, most negative first. Zero is never a run.
    fn offsets(&self) -> impl Iterator<Item = isize> {
        let (min, max) = (self.min.max(1) as isize, self.max as isize);
        (-max..=-min).chain(min..=max)
    }
}

impl Default for RunLength {
    /// Runs of 1 to 3 cells.
    fn default() -> Self {
        Self::new(1, 3)
    }
}

/// Cost of entering a cell holding a decimal digit; any other symbol is impassable.
pub fn digit_cost(symbol: char) -> Option<u64> {
    symbol.to_digit(10).map(u64::from)
}

/// The cheapest route found by a [`Crucible`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    /// Sum of the cost of every cell entered, excluding the start.
    pub cost: u64,
    /// The start, every turning point, and the goal.
    pub waypoints: Vec<Position>,
}

impl Route {
    /// Every cell along the route, start and goal included.
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = self.waypoints.first().copied().into_iter().collect_vec();

        for (from, to) in self.waypoints.iter().tuple_windows() {
            let (rows, cols) = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
            let mut current = *from;
            while current != *to {
                current = current.offset_by((rows, cols));
                cells.push(current);
            }
        }

        cells
    }
}

/// Best-first search over straight runs that must alternate between axes.
///
/// A state is a position together with the axis of the run that reached it; the next run must go along the other axis.
/// Every run is between [`RunLength::min`] and [`RunLength::max`] cells long, forwards or backwards.
pub struct Crucible<'g, C> {
    grid: &'g Grid,
    run: RunLength,
    cost: C,
}

impl<'g> Crucible<'g, fn(char) -> Option<u64>> {
    /// A crucible over a grid of digit costs with the default [`RunLength`].
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            run: RunLength::default(),
            cost: digit_cost,
        }
    }
}

impl<'g, C> Crucible<'g, C>
where
    C: Fn(char) -> Option<u64>,
{
    /// Replace the run length limits.
    pub fn with_run(mut self, run: RunLength) -> Self {
        self.run = run;
        self
    }

    /// Replace the per-cell cost function. Cells costing [`None`] cannot be entered or crossed.
    pub fn with_cost<C2>(self, cost: C2) -> Crucible<'g, C2>
    where
        C2: Fn(char) -> Option<u64>,
    {
        Crucible {
            grid: self.grid,
            run: self.run,
            cost,
        }
    }

    /// The cheapest route from the top left corner to the bottom right corner.
    pub fn route_across(&self) -> Result<Route, SearchFailure> {
        let goal = Position((self.grid.rows() - 1) as isize, (self.grid.cols() - 1) as isize);
        self.route(Position(0, 0), goal)
    }

    /// The cheapest route from `start` to `goal`.
    pub fn route(&self, start: Position, goal: Position) -> Result<Route, SearchFailure> {
        // scaling by the cheapest cell keeps the estimate admissible when cells may be free
        let scale = self.grid.positions()
            .filter_map(|p| (self.cost)(self.grid.cell_at(p)))
            .min()
            .unwrap_or(0);
        let heuristic = |p: Position| p.manhattan(goal) as u64 * scale;

        let mut g_score: HashMap<SearchState<Axis>, u64> = HashMap::new();
        let mut came_from: HashMap<SearchState<Axis>, Position> = HashMap::new();
        let mut open = BinaryHeap::new();

        for axis in Axis::VARIANTS {
            let state = SearchState::new(start, *axis);
            g_score.insert(state, 0);
            open.push(Reverse((heuristic(start), 0, state)));
        }

        let mut expanded = 0usize;
        while let Some(Reverse((_, cost, state))) = open.pop() {
            if g_score.get(&state).is_some_and(|best| cost > *best) {
                continue;
            }
            expanded += 1;

            if state.position == goal {
                let (end, cost) = Axis::VARIANTS.iter()
                    .filter_map(|axis| {
                        let end = SearchState::new(goal, *axis);
                        g_score.get(&end).map(|cost| (end, *cost))
                    })
                    .min_by_key(|(_, cost)| *cost)
                    .unwrap_or((state, cost));

                debug!(%start, %goal, cost, expanded, "crucible search finished");
                return Ok(Route {
                    cost,
                    waypoints: Self::reconstruct(&came_from, end),
                });
            }

            let axis = state.discriminator.other();
            for run in self.run.offsets() {
                let Some(run_cost) = self.run_cost(state.position, axis, run) else {
                    continue;
                };

                let next = SearchState::new(axis.forward().repeat_from(state.position, run), axis);
                let tentative = cost + run_cost;
                if g_score.get(&next).map_or(true, |known| tentative < *known) {
                    trace!(from = %state.position, to = %next.position, tentative, "relaxed");
                    g_score.insert(next, tentative);
                    came_from.insert(next, state.position);
                    open.push(Reverse((tentative + heuristic(next.position), tentative, next)));
                }
            }
        }

        debug!(%start, %goal, expanded, "crucible search exhausted");
        Err(SearchFailure::NoPathFound { start, goal })
    }

    /// Cost of every cell entered by a run of `run` cells along `axis`, or [`None`] if the run leaves the grid or crosses an impassable cell.
    fn run_cost(&self, origin: Position, axis: Axis, run: isize) -> Option<u64> {
        let direction = axis.forward();
        (1..=run.abs())
            .map(|k| direction.repeat_from(origin, k * run.signum()))
            .map(|p| self.grid.get(p).and_then(&self.cost))
            .sum()
    }

    /// Walk `came_from` back from `end`, flipping the assumed axis at every step.
    fn reconstruct(came_from: &HashMap<SearchState<Axis>, Position>, end: SearchState<Axis>) -> Vec<Position> {
        let mut waypoints = vec![end.position];
        let mut current = end;

        while let Some(previous) = came_from.get(&current) {
            // a chain can never be longer than the table it walks
            if waypoints.len() > came_from.len() {
                break;
            }
            waypoints.push(*previous);
            current = SearchState::new(*previous, current.discriminator.other());
        }

        waypoints.reverse();
        waypoints
    }
}
