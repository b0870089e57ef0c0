use crate::chess::{Board, Color, Piece, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// Prints the board in a compact form of the [Forsyth–Edwards Notation].
///
/// Ranks are listed from row 0 to row 7 separated by `/`, each piece is a letter,
/// uppercase for white and lowercase for black, each run of empty squares is a
/// digit, and the side to move follows after a single space.
///
/// [Forsyth–Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            if row > 0 {
                f.write_char('/')?;
            }

            let mut empty = 0;
            for col in 0..8 {
                match self[Square::new(row, col)] {
                    None => empty += 1,
                    Some(p) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }

        write!(f, " {}", self.turn.abbrev())
    }
}

/// The reason why the string is not valid FEN.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseFenError {
    #[display(fmt = "syntax error at the piece placement field")]
    InvalidPlacement,
    #[display(fmt = "syntax error at the side to move field")]
    InvalidTurn,
    #[display(fmt = "syntax error at the castling rights field")]
    InvalidCastlingRights,
}

/// Parses the piece placement, the side to move and optionally the castling rights.
///
/// Without castling rights, no piece is considered to have moved. With them,
/// kings and rooks that may no longer castle are marked as moved. Any further
/// fields are ignored.
impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_ascii_whitespace();
        let placement = fields.next().ok_or(ParseFenError::InvalidPlacement)?;

        let turn: Color = match fields.next().map(str::parse) {
            Some(Ok(c)) => c,
            _ => return Err(ParseFenError::InvalidTurn),
        };

        let mut board = Board::empty(turn);

        let ranks: Vec<_> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseFenError::InvalidPlacement);
        }

        for (row, rank) in (0u8..).zip(ranks) {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(n) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    col += n as u8;
                } else if col < 8 {
                    let role: Role = c
                        .to_ascii_lowercase()
                        .to_string()
                        .parse()
                        .map_err(|_| ParseFenError::InvalidPlacement)?;

                    let color = match c.is_ascii_uppercase() {
                        true => Color::White,
                        false => Color::Black,
                    };

                    board.set(Square::new(row, col), Some(Piece::new(role, color)));
                    col += 1;
                } else {
                    return Err(ParseFenError::InvalidPlacement);
                }

                if col > 8 {
                    return Err(ParseFenError::InvalidPlacement);
                }
            }

            if col != 8 {
                return Err(ParseFenError::InvalidPlacement);
            }
        }

        if let Some(castles) = fields.next() {
            if castles != "-" && !castles.chars().all(|c| "KQkq".contains(c)) {
                return Err(ParseFenError::InvalidCastlingRights);
            }

            let stale: Vec<_> = board
                .iter()
                .filter(|&(p, sq)| !may_castle(p, sq, castles))
                .collect();

            for (p, sq) in stale {
                board.set(sq, Some(p.moved()));
            }
        }

        Ok(board)
    }
}

/// Whether the castling rights keep this piece unmoved.
fn may_castle(p: Piece, sq: Square, castles: &str) -> bool {
    let (short, long) = match p.color() {
        Color::White => ('K', 'Q'),
        Color::Black => ('k', 'q'),
    };

    let row = p.color().back_row();
    match p.role() {
        Role::King => castles.contains(short) || castles.contains(long),
        Role::Rook if sq == Square::new(row, 7) => castles.contains(short),
        Role::Rook if sq == Square::new(row, 0) => castles.contains(long),
        Role::Rook => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Move;
    use test_strategy::proptest;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn initial_board_is_printed_in_fen() {
        assert_eq!(Board::default().to_string(), START);
    }

    #[test]
    fn runs_of_empty_squares_are_counted() {
        let mut b = Board::default();
        b.move_piece(Move::new(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(
            b.to_string(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
    }

    #[proptest]
    fn empty_board_is_all_eights(c: Color) {
        assert_eq!(
            Board::empty(c).to_string(),
            format!("8/8/8/8/8/8/8/8 {}", c.abbrev())
        );
    }

    #[test]
    fn parsing_initial_fen_yields_initial_board() {
        assert_eq!(START.parse(), Ok(Board::default()));
        assert_eq!(format!("{START} KQkq - 0 1").parse(), Ok(Board::default()));
    }

    #[proptest]
    fn parsing_printed_board_preserves_placement_and_turn(b: Board) {
        let parsed: Board = b.to_string().parse()?;
        assert_eq!(parsed.to_string(), b.to_string());
        assert_eq!(parsed.turn, b.turn);
    }

    #[test]
    fn castling_rights_mark_kings_and_rooks_that_may_not_castle() {
        let b: Board = "r3k2r/8/8/8/8/8/8/R3K2R w Q".parse().unwrap();
        assert!(!b[sq("e1")].unwrap().has_moved());
        assert!(!b[sq("a1")].unwrap().has_moved());
        assert!(b[sq("h1")].unwrap().has_moved());
        assert!(b[sq("e8")].unwrap().has_moved());
        assert!(b[sq("a8")].unwrap().has_moved());
        assert!(b[sq("h8")].unwrap().has_moved());

        let b: Board = "r3k2r/8/8/8/8/8/8/R3K2R w -".parse().unwrap();
        assert!(b.iter().all(|(p, _)| p.has_moved()));
    }

    #[test]
    fn parsing_fails_on_malformed_placement() {
        for s in [
            "",
            "8/8/8/8/8/8/8 w",
            "8/8/8/8/8/8/8/8/8 w",
            "9/8/8/8/8/8/8/8 w",
            "08/8/8/8/8/8/8/8 w",
            "7/8/8/8/8/8/8/8 w",
            "ppppppppp/8/8/8/8/8/8/8 w",
            "x7/8/8/8/8/8/8/8 w",
        ] {
            assert_eq!(s.parse::<Board>(), Err(ParseFenError::InvalidPlacement));
        }
    }

    #[test]
    fn parsing_fails_on_malformed_turn() {
        assert_eq!(
            "8/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseFenError::InvalidTurn)
        );

        assert_eq!(
            "8/8/8/8/8/8/8/8 x".parse::<Board>(),
            Err(ParseFenError::InvalidTurn)
        );
    }

    #[test]
    fn parsing_fails_on_malformed_castling_rights() {
        assert_eq!(
            "8/8/8/8/8/8/8/8 w KX".parse::<Board>(),
            Err(ParseFenError::InvalidCastlingRights)
        );
    }
}
