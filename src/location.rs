use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub type Coord = isize;
pub type Dimension = NonZero<usize>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A position `(row, col)` on a grid. The top left corner is `Position(0, 0)`.
///
/// Coordinates are signed so that positions on a toroidal grid can keep their logical, unwrapped value.
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// The array index of this position, if both coordinates are non-negative.
    pub(crate) fn as_index(&self) -> Option<(Ix, Ix)> {
        Some((usize::try_from(self.0).ok()?, usize::try_from(self.1).ok()?))
    }

    /// Shift this position by `(rows, cols)`.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }

    /// Reduce this position into `[0, rows) × [0, cols)`.
    pub fn wrapped(self, dims: (Dimension, Dimension)) -> Self {
        Self(
            self.0.rem_euclid(dims.0.get() as Coord),
            self.1.rem_euclid(dims.1.get() as Coord),
        )
    }

    /// Taxicab distance between `self` and `other`.
    pub fn manhattan(self, other: Self) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0 as Coord, value.1 as Coord)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
