use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::grid::Grid;

/// Reasons a builder may become invalid while building.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GridInvalidReason {
    /// No rows were pushed, or every row was empty.
    #[error("grid has no cells")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("row {row} has width {found}, expected {expected}")]
    UnequalRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A row holds a character outside ASCII.
    #[error("row {row} contains non-ASCII text")]
    NonAscii {
        /// Zero-based index of the offending row.
        row: usize,
    },
    /// A symbol passed to [`GridBuilder::require_symbol`] is absent from the grid.
    #[error("symbol {0:?} does not appear in the grid")]
    MissingSymbol(char),
}

/// Every reason a [`GridBuilder`] refused to build.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("malformed grid: {}", .reasons.iter().join("; "))]
pub struct MalformedGrid {
    /// Reasons in the order they were detected.
    pub reasons: Vec<GridInvalidReason>,
}

/// A builder for [`Grid`]s, fed one row at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Default)]
pub struct GridBuilder {
    rows: Vec<Vec<u8>>,
    required_symbols: Vec<char>,
    invalid_reasons: Vec<GridInvalidReason>,
}

impl GridBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    ///
    /// May cause the builder to enter an [`UnequalRows`](GridInvalidReason::UnequalRows) or [`NonAscii`](GridInvalidReason::NonAscii) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push_row(&mut self, row: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let index = self.rows.len();
        if !row.is_ascii() {
            self.invalid_reasons.push(GridInvalidReason::NonAscii { row: index });
            return self;
        }

        if let Some(first) = self.rows.first() {
            if first.len() != row.len() {
                self.invalid_reasons.push(GridInvalidReason::UnequalRows {
                    row: index,
                    expected: first.len(),
                    found: row.len(),
                });
                return self;
            }
        }

        self.rows.push(row.as_bytes().to_vec());
        self
    }

    /// Append every line of `text` as a row. Trailing whitespace on each line and trailing empty lines are dropped.
    pub fn push_rows(&mut self, text: &str) -> &mut Self {
        let lines = text.lines().map(str::trim_end).collect_vec();
        let used = lines.iter().rposition(|line| !line.is_empty()).map_or(0, |last| last + 1);

        for line in &lines[..used] {
            self.push_row(line);
        }

        self
    }

    /// Require `symbol` to appear somewhere in the finished grid, e.g. a start marker.
    pub fn require_symbol(&mut self, symbol: char) -> &mut Self {
        self.required_symbols.push(symbol);
        self
    }

    /// Check the validity of this builder, ensuring no [`GridInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<GridInvalidReason>)` otherwise.
    /// Required symbols are only checked by [`build`](GridBuilder::build).
    pub fn is_valid(&self) -> Option<&Vec<GridInvalidReason>> {
        match self.invalid_reasons.is_empty() {
            true => None,
            false => Some(&self.invalid_reasons),
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    pub fn build(&self) -> Result<Grid, MalformedGrid> {
        let mut reasons = self.invalid_reasons.clone();

        let height = self.rows.len();
        let width = self.rows.first().map_or(0, Vec::len);
        let dims = match (NonZero::new(height), NonZero::new(width)) {
            (Some(rows), Some(cols)) => Some((rows, cols)),
            _ => None,
        };

        if dims.is_none() && reasons.is_empty() {
            reasons.push(GridInvalidReason::Empty);
        }

        for symbol in &self.required_symbols {
            let present = self.rows.iter().flatten().any(|cell| *cell as char == *symbol);
            if !present {
                reasons.push(GridInvalidReason::MissingSymbol(*symbol));
            }
        }

        match dims {
            Some(dims) if reasons.is_empty() => Ok(Grid {
                dims,
                cells: Array2::from_shape_fn((height, width), |(r, c)| self.rows[r][c]),
            }),
            _ => Err(MalformedGrid { reasons }),
        }
    }
}
