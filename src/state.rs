use crate::location::Position;

/// A position paired with whatever part of the move history still constrains future moves.
///
/// Two states are the same only when both the position and the discriminator match.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct SearchState<D> {
    /// Where the search stands.
    pub position: Position,
    /// What the search remembers about how it got there.
    pub discriminator: D,
}

impl<D> SearchState<D> {
    /// Pair `position` with `discriminator`.
    pub fn new(position: Position, discriminator: D) -> Self {
        Self { position, discriminator }
    }
}

/// Whether a step count is even or odd.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub enum Parity {
    /// Even step counts, including zero.
    Even,
    /// Odd step counts.
    Odd,
}

impl Parity {
    /// The parity of `steps`.
    pub fn of(steps: usize) -> Self {
        match steps % 2 {
            0 => Self::Even,
            _ => Self::Odd,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }
}
