use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

/// A repeating stretch of a deterministic simulation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cycle {
    /// Step index of the first state that recurs.
    pub start: usize,
    /// Number of steps before it recurs.
    pub length: usize,
}

impl Cycle {
    /// The earliest step index whose state equals the state at step `target`.
    pub fn project(&self, target: usize) -> usize {
        match target < self.start {
            true => target,
            false => self.start + (target - self.start) % self.length,
        }
    }
}

/// The state after `target` applications of `step` to `initial`.
///
/// Every state is fingerprinted by value; as soon as one repeats, the remaining steps are skipped by projecting `target` onto the cycle.
pub fn state_after<S, F>(initial: S, target: usize, mut step: F) -> S
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut seen = HashMap::from([(initial.clone(), 0usize)]);
    let mut history = vec![initial];

    for index in 1..=target {
        let next = step(&history[index - 1]);

        if let Some(&first) = seen.get(&next) {
            let cycle = Cycle { start: first, length: index - first };
            debug!(start = cycle.start, length = cycle.length, target, "cycle found");
            return history.swap_remove(cycle.project(target));
        }

        seen.insert(next.clone(), index);
        history.push(next);
    }

    history.swap_remove(target)
}
