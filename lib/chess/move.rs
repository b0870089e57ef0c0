use crate::chess::{ParseSquareError, Square};
use derive_more::{DebugCustom, Display, Error, From};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// A move is only a pair of squares, whether it is legal depends on the
/// [`Board`][`crate::chess::Board`] it is played on.
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Move({})", self)]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from a pair of origin and destination [`Square`]s.
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move")]
    #[from(ignore)]
    InvalidLength,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::InvalidLength);
        }

        Ok(Move(s[..2].parse()?, s[2..].parse()?))
    }
}
