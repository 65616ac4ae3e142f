use std::hash::Hash;

use strum::{Display, VariantArray};
use thiserror::Error;

use crate::location::Position;

/// Failure to read a direction from puzzle input.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DirectionError {
    /// The token does not name any direction.
    #[error("unrecognised direction {0:?}")]
    InvalidDirection(char),
}

/// Functionality that must be implemented by any kind of step between grid cells.
///
/// [`Direction`] is the built-in implementation for rectangular grids.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// The unit `(rows, cols)` offset of this step.
    fn offset(&self) -> (isize, isize);
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;

    /// Attempt the step from `position` in the direction specified by `self` and return the resultant [`Position`].
    fn attempt_from(&self, position: Position) -> Position {
        position.offset_by(self.offset())
    }

    /// Take `count` steps at once from `position`. Negative counts step backwards.
    fn repeat_from(&self, position: Position, count: isize) -> Position {
        let (rows, cols) = self.offset();
        position.offset_by((rows * count, cols * count))
    }

    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] when `a` and `b` are not adjacent.
    fn direction_to(a: Position, b: Position) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}

/// The orientation of a run of steps.
#[derive(Copy, Clone, VariantArray, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Axis {
    /// Along a column, changing the row.
    Vertical,
    /// Along a row, changing the column.
    Horizontal,
}

impl Axis {
    /// The other axis.
    pub fn other(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The direction of travel along this axis for a positive step count.
    pub fn forward(self) -> Direction {
        match self {
            Self::Vertical => Direction::South,
            Self::Horizontal => Direction::East,
        }
    }
}

/// A cardinal direction on a rectangular grid, where north is towards row 0.
///
/// The declaration order is the order in which neighbours are generated.
#[derive(Copy, Clone, VariantArray, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    /// Up, towards row 0.
    North,
    /// Down, towards the last row.
    South,
    /// Left, towards column 0.
    West,
    /// Right, towards the last column.
    East,
}

impl Step for Direction {
    fn offset(&self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }
}

impl Direction {
    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::West | Self::East => Axis::Horizontal,
        }
    }

    /// The direction a slope arrow (`^`, `v`, `<`, `>`) points in.
    pub fn from_arrow(symbol: char) -> Option<Self> {
        match symbol {
            '^' => Some(Self::North),
            'v' => Some(Self::South),
            '<' => Some(Self::West),
            '>' => Some(Self::East),
            _ => None,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = DirectionError;

    /// Accepts compass letters (`N`, `S`, `W`, `E`) and screen letters (`U`, `D`, `L`, `R`) in either case.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'N' | 'U' => Ok(Self::North),
            'S' | 'D' => Ok(Self::South),
            'W' | 'L' => Ok(Self::West),
            'E' | 'R' => Ok(Self::East),
            _ => Err(DirectionError::InvalidDirection(value)),
        }
    }
}
