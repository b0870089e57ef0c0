use crate::chess::{speculation::Speculation, Board, Color, Move, Square};
use arrayvec::ArrayVec;

impl Board {
    /// The squares the piece on `whence` may legally move to, in row-major order.
    ///
    /// Every destination the piece's own rules allow is tried on the board
    /// and kept only if it leaves the mover's king out of check.
    /// Nothing is ever legal for a side that has no king on the board.
    pub fn legal_moves(&mut self, whence: Square) -> ArrayVec<Square, 27> {
        let mut moves = ArrayVec::new();

        let piece = match self[whence] {
            Some(p) => p,
            None => return moves,
        };

        for whither in Square::iter() {
            if !piece.is_legal_move(whence, whither, self) {
                continue;
            }

            let mut trial = Speculation::new(self);
            trial.displace(whence, whither);

            let safe = trial
                .find_king(piece.color())
                .map_or(false, |king| !trial.is_checked(piece.color(), king));

            drop(trial);

            if safe {
                moves.push(whither);
            }
        }

        moves
    }

    /// Every legal [`Move`] available to `side`.
    pub fn moves(&mut self, side: Color) -> Vec<Move> {
        let origins: Vec<_> = self
            .iter()
            .filter(|(p, _)| p.color() == side)
            .map(|(_, sq)| sq)
            .collect();

        origins
            .into_iter()
            .flat_map(|whence| {
                self.legal_moves(whence)
                    .into_iter()
                    .map(move |whither| Move::new(whence, whither))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Piece, Role};
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn each_side_has_twenty_moves_initially() {
        let mut b = Board::default();
        assert_eq!(b.moves(Color::White).len(), 20);
        assert_eq!(b.moves(Color::Black).len(), 20);
    }

    #[test]
    fn pawns_and_knights_are_the_only_pieces_that_can_move_initially() {
        let mut b = Board::default();

        for (p, s) in Board::default().iter() {
            let n = b.legal_moves(s).len();
            match p.role() {
                Role::Pawn | Role::Knight => assert_eq!(n, 2),
                _ => assert_eq!(n, 0),
            }
        }
    }

    #[test]
    fn destinations_are_listed_in_row_major_order() {
        let mut b = board("4k3/8/8/8/3Q4/8/8/4K3 w");
        let moves = b.legal_moves(sq("d4"));
        assert_eq!(moves.len(), 27);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[proptest]
    fn empty_squares_have_no_moves(c: Color, s: Square) {
        assert!(Board::empty(c).legal_moves(s).is_empty());
    }

    #[test]
    fn pinned_pieces_may_only_move_along_the_pin() {
        let mut b = board("4k3/4r3/8/8/8/8/4R3/4K3 w");
        let moves = b.legal_moves(sq("e2"));
        assert_eq!(
            moves.as_slice(),
            [sq("e7"), sq("e6"), sq("e5"), sq("e4"), sq("e3")]
        );
    }

    #[test]
    fn only_moves_that_resolve_check_are_legal() {
        let mut b = board("4k3/8/8/8/8/8/3P4/r3K2N w");
        assert!(b.legal_moves(sq("d2")).is_empty());
        assert!(b.legal_moves(sq("h1")).is_empty());
        assert_eq!(b.legal_moves(sq("e1")).as_slice(), [sq("e2"), sq("f2")]);
    }

    #[test]
    fn pieces_of_a_side_without_king_have_no_moves() {
        let mut b = board("4k3/8/8/8/8/8/8/R7 w");
        assert!(b.legal_moves(sq("a1")).is_empty());
    }

    #[proptest]
    fn enumerating_moves_does_not_mutate_the_board(mut b: Board, s: Square) {
        let before = b.clone();
        b.legal_moves(s);
        assert_eq!(b, before);
    }

    #[proptest(cases = 64)]
    fn every_enumerated_move_is_accepted(mut b: Board) {
        for m in b.moves(b.turn) {
            let mut next = b.clone();
            assert_eq!(next.move_piece(m).map(|_| ()), Ok(()));

            let king = next.find_king(b.turn).unwrap();
            assert!(!next.is_checked(b.turn, king));
        }
    }

    #[proptest]
    fn lone_king_moves_to_every_safe_adjacent_square(c: Color, s: Square) {
        let mut b = Board::empty(c);
        b.set(s, Some(Piece::new(Role::King, c).moved()));

        let expected: Vec<_> = Square::iter()
            .filter(|t| {
                let (r, f) = t.delta(s);
                r.abs() <= 1 && f.abs() <= 1 && *t != s
            })
            .collect();

        assert_eq!(b.legal_moves(s).to_vec(), expected);
    }
}
