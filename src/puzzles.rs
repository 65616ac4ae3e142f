//! Adapters that parse a day's puzzle input and drive the engines.
//!
//! Every adapter exposes `part_one` and `part_two`, each taking the raw input text.

use thiserror::Error;

use crate::builder::MalformedGrid;
use crate::shape::DirectionError;
use crate::shortest::SearchFailure;

pub mod contraption;
pub mod dish;
pub mod garden;
pub mod hike;
pub mod lagoon;
pub mod lava;
pub mod pipes;
pub mod pulses;
pub mod springs;

/// Anything that can go wrong between puzzle text and an answer.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The input is not a rectangular grid.
    #[error(transparent)]
    Grid(#[from] MalformedGrid),
    /// A search ran out of states.
    #[error(transparent)]
    Search(#[from] SearchFailure),
    /// A direction token could not be read.
    #[error(transparent)]
    Direction(#[from] DirectionError),
    /// A line could not be read.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// The input lacks something the puzzle needs.
    #[error("no {0} found in input")]
    Missing(&'static str),
}

impl PuzzleError {
    pub(crate) fn parse(index: usize, reason: impl Into<String>) -> Self {
        Self::Parse { line: index + 1, reason: reason.into() }
    }
}

/// Shorthand for adapter results.
pub type Answer = Result<u64, PuzzleError>;
