//! Breadth-first reachability where only the parity of the step count matters.
//!
//! A position reached after `k` steps can be revisited after `k + 2`, `k + 4`, ... steps by stepping back and forth,
//! so a position belongs to the answer for `n` steps exactly when it was first reached at some step count with the parity of `n`.

use std::collections::HashSet;

use tracing::debug;

use crate::grid::Grid;
use crate::location::Position;
use crate::state::Parity;

/// Configuration for a reachability query.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReachConfig {
    /// Exact number of steps to take.
    pub num_steps: usize,
    /// Treat the grid as tiling the plane.
    pub wrap: bool,
}

impl ReachConfig {
    /// A non-wrapping query of `num_steps` steps.
    pub fn steps(num_steps: usize) -> Self {
        Self { num_steps, wrap: false }
    }

    /// Set whether the grid tiles the plane.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// The expanding frontier of a parity breadth-first search.
///
/// Visited sets only ever grow; the frontier holds the positions first reached on the latest step.
pub struct ParityFrontier<'g, P> {
    grid: &'g Grid,
    wrap: bool,
    passable: P,
    visited: [HashSet<Position>; 2],
    frontier: HashSet<Position>,
    steps: usize,
}

impl<'g, P> ParityFrontier<'g, P>
where
    P: Fn(char) -> bool,
{
    /// Start a search from `start` after zero steps.
    ///
    /// `passable` decides from a cell's symbol whether it may be stepped on.
    pub fn new(grid: &'g Grid, start: Position, wrap: bool, passable: P) -> Self {
        Self {
            grid,
            wrap,
            passable,
            visited: [HashSet::from([start]), HashSet::new()],
            frontier: HashSet::from([start]),
            steps: 0,
        }
    }

    /// Take one more step from every frontier position.
    pub fn step(&mut self) {
        self.steps += 1;
        let parity = Parity::of(self.steps).index();

        let mut next = HashSet::with_capacity(self.frontier.len() * 2);
        for position in &self.frontier {
            for (neighbor, _) in self.grid.neighbors(*position, self.wrap) {
                let symbol = match self.wrap {
                    true => self.grid.cell_at_wrapped(neighbor),
                    false => self.grid.cell_at(neighbor),
                };

                if (self.passable)(symbol) && self.visited[parity].insert(neighbor) {
                    next.insert(neighbor);
                }
            }
        }

        self.frontier = next;
    }

    /// Step until `num_steps` steps have been taken in total. Does nothing if already past it.
    pub fn advance_to(&mut self, num_steps: usize) -> &mut Self {
        while self.steps < num_steps {
            self.step();
        }
        self
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Positions reached at any step count of the given parity so far.
    pub fn visited(&self, parity: Parity) -> &HashSet<Position> {
        &self.visited[parity.index()]
    }

    /// Positions first reached on the latest step.
    pub fn frontier(&self) -> &HashSet<Position> {
        &self.frontier
    }

    /// Positions standing exactly [`steps`](ParityFrontier::steps) steps away from the start.
    pub fn reachable(&self) -> &HashSet<Position> {
        self.visited(Parity::of(self.steps))
    }

    /// Consume the search, keeping only the positions of [`reachable`](ParityFrontier::reachable).
    pub fn into_reachable(self) -> HashSet<Position> {
        let [even, odd] = self.visited;
        match Parity::of(self.steps) {
            Parity::Even => even,
            Parity::Odd => odd,
        }
    }
}

/// Every position at which a walk of exactly `config.num_steps` steps from `start` can end.
pub fn reachable_in<P>(grid: &Grid, start: Position, config: ReachConfig, passable: P) -> HashSet<Position>
where
    P: Fn(char) -> bool,
{
    let mut search = ParityFrontier::new(grid, start, config.wrap, passable);
    search.advance_to(config.num_steps);

    let reachable = search.into_reachable();
    debug!(steps = config.num_steps, wrap = config.wrap, reachable = reachable.len(), "parity search finished");
    reachable
}
