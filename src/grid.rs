use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::{Array1, Array2};
use strum::VariantArray;

use crate::builder::{GridBuilder, MalformedGrid};
use crate::location::{Coord, Dimension, Position};
use crate::shape::{Direction, Step};

/// A rectangular grid of single-byte ASCII cells.
///
/// Grids are immutable once built; transforms such as [`transposed`](Grid::transposed) return new grids.
/// Build one with a [`GridBuilder`] or by parsing text with [`Grid::parse`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Grid {
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) cells: Array2<u8>,
}

impl Grid {
    /// Parse newline-delimited rows of ASCII text. Trailing empty lines are ignored.
    pub fn parse(text: &str) -> Result<Self, MalformedGrid> {
        GridBuilder::new().push_rows(text).build()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dims.1.get()
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `position` lies inside `[0, rows) × [0, cols)`.
    pub fn contains(&self, position: Position) -> bool {
        position.0 >= 0
            && position.1 >= 0
            && position.0 < self.rows() as Coord
            && position.1 < self.cols() as Coord
    }

    /// Reduce a logical position on the infinite tiling of this grid to its base tile.
    pub fn wrap(&self, position: Position) -> Position {
        position.wrapped(self.dims)
    }

    /// The symbol at `position`, or [`None`] if it is out of bounds.
    pub fn get(&self, position: Position) -> Option<char> {
        position.as_index()
            .and_then(|index| self.cells.get(index))
            .map(|cell| *cell as char)
    }

    /// The symbol at `position`.
    ///
    /// # Panics
    /// If `position` is out of bounds; callers on non-wrapping grids must stay inside.
    pub fn cell_at(&self, position: Position) -> char {
        match self.get(position) {
            Some(symbol) => symbol,
            None => panic!("{position} lies outside a {}x{} grid", self.rows(), self.cols()),
        }
    }

    /// The symbol at `position` after reducing it onto the base tile.
    pub fn cell_at_wrapped(&self, position: Position) -> char {
        self.cell_at(self.wrap(position))
    }

    /// Cardinal neighbours of `position` in the order north, south, west, east, with the direction taken to reach each.
    ///
    /// Without `wrap`, neighbours outside the grid are omitted.
    /// With `wrap`, every neighbour is returned with its logical (unwrapped) position; look the cell up with [`cell_at_wrapped`](Grid::cell_at_wrapped).
    pub fn neighbors(&self, position: Position, wrap: bool) -> Vec<(Position, Direction)> {
        Direction::VARIANTS.iter()
            .map(|dir| (dir.attempt_from(position), *dir))
            .filter(|(neighbor, _)| wrap || self.contains(*neighbor))
            .collect_vec()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.indexed_iter().map(|(index, _)| Position::from(index))
    }

    /// The first position, in row-major order, holding `symbol`.
    pub fn find(&self, symbol: char) -> Option<Position> {
        self.cells.indexed_iter()
            .find(|(_, cell)| **cell as char == symbol)
            .map(|(index, _)| Position::from(index))
    }

    /// Every position holding `symbol`, in row-major order.
    pub fn find_all(&self, symbol: char) -> Vec<Position> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| **cell as char == symbol)
            .map(|(index, _)| Position::from(index))
            .collect_vec()
    }

    /// Row `row` as text.
    ///
    /// # Panics
    /// If `row` is not below [`rows`](Grid::rows).
    pub fn row(&self, row: usize) -> String {
        self.cells.row(row).iter().map(|cell| *cell as char).collect()
    }

    /// A copy with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self {
            dims: (self.dims.1, self.dims.0),
            cells: Array2::from_shape_fn((self.cols(), self.rows()), |(r, c)| self.cells[(c, r)]),
        }
    }

    /// A copy turned upside down.
    pub fn flipped_rows(&self) -> Self {
        let last = self.rows() - 1;
        Self {
            dims: self.dims,
            cells: Array2::from_shape_fn(self.cells.dim(), |(r, c)| self.cells[(last - r, c)]),
        }
    }

    /// A copy mirrored left to right.
    pub fn flipped_cols(&self) -> Self {
        let last = self.cols() - 1;
        Self {
            dims: self.dims,
            cells: Array2::from_shape_fn(self.cells.dim(), |(r, c)| self.cells[(r, last - c)]),
        }
    }

    /// A copy with every row rewritten in place by `f`. The row length cannot change.
    pub fn map_rows(&self, mut f: impl FnMut(&mut [u8])) -> Self {
        let mut cells = self.cells.clone();
        for mut row in cells.rows_mut() {
            let mut buffer = row.to_vec();
            f(&mut buffer);
            row.assign(&Array1::from(buffer));
        }

        Self { dims: self.dims, cells }
    }

    /// A copy with every in-bounds position of `positions` overwritten by `symbol`.
    pub fn with_cells(&self, positions: impl IntoIterator<Item = Position>, symbol: char) -> Self {
        let mut cells = self.cells.clone();
        for index in positions.into_iter().filter_map(|p| p.as_index()) {
            if let Some(cell) = cells.get_mut(index) {
                *cell = symbol as u8;
            }
        }

        Self { dims: self.dims, cells }
    }

    /// Dump this grid row by row, each row followed by a newline.
    fn print(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(*cell as char);
            }
            out.push('\n');
        }

        out
    }
}

impl FromStr for Grid {
    type Err = MalformedGrid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.print())
    }
}
