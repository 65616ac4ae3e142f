use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use tracing::{debug, trace};
use unordered_pair::UnorderedPair;

use crate::grid::Grid;
use crate::location::Position;

/// A corridor between two junctions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// Every cell from one junction to the other, both included.
    pub cells: Vec<Position>,
}

impl Segment {
    /// Number of steps needed to walk the corridor end to end.
    pub fn weight(&self) -> usize {
        self.cells.len() - 1
    }
}

/// A corridor grid reduced to its junctions.
///
/// Every pair of junctions keeps at most one segment: the first corridor discovered between them.
/// A second, parallel corridor between the same pair is dropped, even if it is longer.
pub struct CompressedGraph {
    pub(crate) graph: UnGraphMap<Position, usize>,
    segments: HashMap<UnorderedPair<Position>, Segment>,
    start: Position,
    goal: Position,
}

fn key(a: Position, b: Position) -> UnorderedPair<Position> {
    UnorderedPair::from((a.min(b), a.max(b)))
}

impl CompressedGraph {
    /// The underlying weighted graph, weights being segment step counts.
    pub fn graph(&self) -> &UnGraphMap<Position, usize> {
        &self.graph
    }

    /// Where walks begin.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Where walks end.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Every junction, in discovery order.
    pub fn junctions(&self) -> Vec<Position> {
        self.graph.nodes().collect_vec()
    }

    /// The segment joining `a` and `b`, in either order.
    pub fn segment(&self, a: Position, b: Position) -> Option<&Segment> {
        self.segments.get(&key(a, b))
    }

    /// Number of segments kept.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Expand a walk over junctions back into the cells it covers.
    pub fn expand(&self, junctions: &[Position]) -> Vec<Position> {
        let mut cells = junctions.first().copied().into_iter().collect_vec();

        for (from, to) in junctions.iter().tuple_windows() {
            let Some(segment) = self.segment(*from, *to) else {
                continue;
            };

            match segment.cells.first() == Some(from) {
                true => cells.extend(segment.cells.iter().skip(1)),
                false => cells.extend(segment.cells.iter().rev().skip(1)),
            }
        }

        cells
    }
}

/// Reduce the open cells of `grid` reachable from `start` to a junction graph.
///
/// Junctions are `start`, `goal`, and every open cell without exactly two open neighbours.
/// Corridors are followed depth-first from each junction until another junction is met.
pub fn compress<F>(grid: &Grid, start: Position, goal: Position, is_open: F) -> CompressedGraph
where
    F: Fn(char) -> bool,
{
    let open_neighbors = |p: Position| {
        grid.neighbors(p, false)
            .into_iter()
            .map(|(neighbor, _)| neighbor)
            .filter(|neighbor| is_open(grid.cell_at(*neighbor)))
            .collect_vec()
    };
    let is_junction = |p: Position| p == start || p == goal || open_neighbors(p).len() != 2;

    let mut graph = UnGraphMap::new();
    let mut segments = HashMap::new();
    graph.add_node(start);

    let mut stack = vec![start];
    while let Some(junction) = stack.pop() {
        for first in open_neighbors(junction) {
            let mut cells = vec![junction, first];
            let mut previous = junction;
            let mut current = first;

            while !is_junction(current) {
                let Some(next) = open_neighbors(current).into_iter().find(|n| *n != previous) else {
                    break;
                };
                previous = current;
                current = next;
                cells.push(current);
            }

            if current == junction {
                continue;
            }

            if !graph.contains_node(current) {
                graph.add_node(current);
                stack.push(current);
            }

            let pair = key(junction, current);
            if segments.contains_key(&pair) {
                trace!(from = %junction, to = %current, weight = cells.len() - 1, "parallel corridor dropped");
                continue;
            }

            graph.add_edge(junction, current, cells.len() - 1);
            segments.insert(pair, Segment { cells });
        }
    }

    debug!(junctions = graph.node_count(), segments = segments.len(), "grid compressed");
    CompressedGraph { graph, segments, start, goal }
}

/// Perimeter edges of a junction graph, each oriented in the only direction a longest walk may take it.
///
/// Walking a perimeter edge backwards cuts the walk off from the goal, so such moves can be pruned.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Perimeter {
    forward: HashSet<(Position, Position)>,
}

impl Perimeter {
    /// A perimeter made of the given `(from, to)` forward edges.
    pub fn new(edges: impl IntoIterator<Item = (Position, Position)>) -> Self {
        Self { forward: edges.into_iter().collect() }
    }

    /// Guess the perimeter of a lattice-shaped junction graph.
    ///
    /// The start and goal must each hang off one corner of a rectangular lattice, at opposite ends of its boundary
    /// ring, with the other two corners folded into corridors. Every ring edge is then oriented along the ring, away
    /// from the start's corner and towards the goal's. Any other graph gets an empty perimeter, which allows every move.
    pub fn infer(compressed: &CompressedGraph) -> Self {
        let Some((ring, far)) = lattice_ring(compressed) else {
            debug!(junctions = compressed.graph.node_count(), "not a lattice, no perimeter inferred");
            return Self::default();
        };

        let one_way = ring[..=far].iter().copied().tuple_windows::<(_, _)>();
        let other_way = ring[far..].iter().copied().chain([ring[0]]).rev().tuple_windows::<(_, _)>();

        Self { forward: one_way.chain(other_way).collect() }
    }

    /// Whether moving from `from` to `to` does not walk a perimeter edge backwards.
    pub fn allows(&self, from: Position, to: Position) -> bool {
        !self.forward.contains(&(to, from))
    }

    /// Number of oriented perimeter edges.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether there are no perimeter edges.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// The boundary ring of a lattice-shaped junction graph, starting at the corner next to the start, together with the
/// index of the corner next to the goal.
fn lattice_ring(compressed: &CompressedGraph) -> Option<(Vec<Position>, usize)> {
    let graph = &compressed.graph;
    let (start, goal) = (compressed.start, compressed.goal);

    let entry = graph.neighbors(start).exactly_one().ok()?;
    let exit = graph.neighbors(goal).exactly_one().ok()?;
    if entry == goal || exit == start || entry == exit {
        return None;
    }

    let inner = |n: Position| graph.neighbors(n).filter(|m| *m != start && *m != goal).collect_vec();

    // only the two end corners keep two lattice neighbours, the other corners being corridors
    let mut corners = Vec::new();
    for node in graph.nodes().filter(|n| *n != start && *n != goal) {
        match inner(node).len() {
            2 => corners.push(node),
            3 | 4 => {}
            _ => return None,
        }
    }
    if corners.len() != 2 || !corners.contains(&entry) || !corners.contains(&exit) {
        return None;
    }

    let on_ring = |n: Position| n != start && n != goal && inner(n).len() <= 3;
    let ring_neighbors = |n: Position| inner(n).into_iter().filter(|m| on_ring(*m)).collect_vec();
    let ring_size = graph.nodes().filter(|n| on_ring(*n)).count();

    let mut ring = vec![entry];
    let (mut previous, mut current) = match ring_neighbors(entry)[..] {
        [first, _] => (entry, first),
        _ => return None,
    };
    while current != entry {
        let next = match ring_neighbors(current)[..] {
            [a, b] if a == previous => b,
            [a, _] => a,
            _ => return None,
        };
        if ring.len() >= ring_size {
            return None;
        }
        ring.push(current);
        previous = current;
        current = next;
    }

    let far = ring.iter().position(|n| *n == exit)?;
    (ring.len() == ring_size && far * 2 == ring.len()).then_some((ring, far))
}
