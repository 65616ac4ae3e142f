#![warn(missing_docs)]

//! # `gridwalk`
//!
//! Search engines over character grids and the junction graphs they compress to, together with the
//! [Advent of Code 2023](https://adventofcode.com/2023) puzzles built on them.
//!
//! Begin by building a [`Grid`] with a [`GridBuilder`](builder::GridBuilder) or [`Grid::parse`].
//! Then hand it to one of the engines:
//!
//! - [`longest`] enumerates simple paths with an explicit stack and keeps the longest, either cell by cell under a
//!   [`Trail`](longest::Trail) rule or junction by junction over a [`CompressedGraph`](compress::CompressedGraph).
//! - [`reach`] expands a breadth-first frontier and answers "which cells can be reached in exactly `n` steps",
//!   on a bounded grid or on its infinite tiling.
//! - [`shortest`] routes a [`Crucible`](shortest::Crucible), which must turn after a run of between
//!   [`RunLength::min`](shortest::RunLength::min) and [`RunLength::max`](shortest::RunLength::max) cells.
//! - [`compress`] reduces a corridor maze to its junctions.
//!
//! [`cycle`] skips ahead through long deterministic simulations once a state repeats.
//!
//! # Internals
//! Every search owns its stack, frontier, score table and visited set, and drops them when it returns.
//! States that must be told apart by move history are [`SearchState`]s: a position plus a discriminator such as the
//! axis of the previous run or the direction of travel.
//!
//! The day-by-day adapters live in [`puzzles`]. Each parses its input and returns a number.

pub use builder::{GridBuilder, MalformedGrid};
pub use grid::Grid;
pub use location::Position;
pub use shape::{Axis, Direction, Step};
pub use state::{Parity, SearchState};

pub mod builder;
pub mod compress;
pub mod cycle;
pub(crate) mod grid;
pub(crate) mod location;
pub mod longest;
pub mod puzzles;
pub mod reach;
pub mod shape;
pub mod shortest;
pub(crate) mod state;
mod tests;
