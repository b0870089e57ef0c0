use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Row 0 is black's back rank and row 7 is white's, columns run from the
/// queen's side (0) to the king's side (7).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0u8..8))]
    row: u8,
    #[cfg_attr(test, strategy(0u8..8))]
    col: u8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate falls outside of `0..8`.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of bounds");
        Square { row, col }
    }

    /// Constructs [`Square`] from a pair of signed coordinates, if in bounds.
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Constructs [`Square`] from the index used by chess engines,
    /// where `a1` is 0 and `h8` is 63.
    pub fn from_index(i: u8) -> Option<Self> {
        if i < 64 {
            Some(Square::new(7 - i / 8, i % 8))
        } else {
            None
        }
    }

    /// The index of this square as used by chess engines.
    pub fn index(&self) -> u8 {
        (7 - self.row) * 8 + self.col
    }

    /// This square's row.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This square's column.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The signed `(rows, columns)` distance from `other` to this square.
    pub fn delta(&self, other: Square) -> (i8, i8) {
        (
            self.row as i8 - other.row as i8,
            self.col as i8 - other.col as i8,
        )
    }

    /// The square at a signed offset from this one, if on the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        Square::checked(self.row as i8 + rows, self.col as i8 + cols)
    }

    /// An iterator over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64u8).map(|i| Square::new(i / 8, i % 8))
    }
}

/// Prints the square in algebraic notation, e.g. `e4`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::new(b'8' - r, f - b'a')),
            _ => Err(ParseSquareError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_row_and_col(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), sq);
    }

    #[proptest]
    fn checked_fails_out_of_bounds(
        #[filter(!(0..8).contains(&#r))] r: i8,
        #[strategy(0i8..8)] c: i8,
    ) {
        assert_eq!(Square::checked(r, c), None);
        assert_eq!(Square::checked(c, r), None);
    }

    #[proptest]
    fn converting_from_index_is_an_identity(sq: Square) {
        assert_eq!(Square::from_index(sq.index()), Some(sq));
    }

    #[proptest]
    fn converting_from_index_fails_past_63(#[strategy(64u8..=u8::MAX)] i: u8) {
        assert_eq!(Square::from_index(i), None);
    }

    #[test]
    fn engine_index_counts_from_white_queen_rook() {
        assert_eq!(Square::from_index(0), Some(Square::new(7, 0)));
        assert_eq!(Square::from_index(63), Some(Square::new(0, 7)));
        assert_eq!("e2".parse::<Square>().map(|sq| sq.index()), Ok(12));
    }

    #[proptest]
    fn offset_by_delta_returns_original_square(a: Square, b: Square) {
        let (r, c) = a.delta(b);
        assert_eq!(b.offset(r, c), Some(a));
    }

    #[test]
    fn squares_are_iterated_in_row_major_order() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[9], Square::new(1, 1));
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn square_is_printed_in_algebraic_notation() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 4).to_string(), "e1");
        assert_eq!(Square::new(4, 7).to_string(), "h4");
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        #[strategy(1u8..=8)] r: u8,
    ) {
        assert_eq!(format!("{c}{r}").parse::<Square>(), Err(ParseSquareError));
    }
}
