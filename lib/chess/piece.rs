use crate::chess::{Color, Role};
use std::fmt::{self, Display, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// A piece carries no position of its own, its [`Square`][`crate::chess::Square`]
/// is implied by where it sits on the [`Board`][`crate::chess::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            has_moved: false,
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has ever moved.
    ///
    /// Only relevant for castling eligibility.
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// This piece after it has moved.
    pub fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Whether this piece belongs to the opponent of `other`.
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

/// Prints the piece's [`Role`], uppercase for white and lowercase for black.
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_char(self.role.letter().to_ascii_uppercase()),
            Color::Black => f.write_char(self.role.letter()),
        }
    }
}
