use crate::chess::{speculation::Speculation, Board, Color, Role, Square};
use tracing::instrument;

impl Board {
    /// Whether `side` is in [checkmate].
    ///
    /// A side without a king, or whose king is not in check, is never
    /// checkmated, even if it has no legal moves.
    ///
    /// [checkmate]: https://www.chessprogramming.org/Checkmate
    #[instrument(level = "debug", skip(self), ret)]
    pub fn is_checkmate(&mut self, side: Color) -> bool {
        let king = match self.find_king(side) {
            Some(k) if self.is_checked(side, k) => k,
            _ => return false,
        };

        let pieces: Vec<_> = self.iter().filter(|(p, _)| p.color() == side).collect();

        for (piece, whence) in pieces {
            for whither in Square::iter() {
                if !piece.is_legal_move(whence, whither, self) {
                    continue;
                }

                let mut trial = Speculation::new(self);
                trial.displace(whence, whither);

                let king = match piece.role() {
                    Role::King => whither,
                    _ => king,
                };

                if !trial.is_checked(side, king) {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut b = Board::default();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            b.move_piece(m.parse().unwrap()).unwrap();
        }

        assert!(b.is_checkmate(Color::White));
        assert!(!b.is_checkmate(Color::Black));
    }

    #[test]
    fn lone_kings_are_never_checkmated() {
        let mut b = board("4k3/8/8/8/8/8/8/4K3 w");
        assert!(!b.is_checkmate(Color::White));
        assert!(!b.is_checkmate(Color::Black));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut b = board("3R2k1/5ppp/8/8/8/8/8/6K1 b");
        assert!(b.is_checkmate(Color::Black));
    }

    #[test]
    fn check_that_can_be_blocked_is_not_checkmate() {
        let mut b = board("3R2k1/5ppp/8/8/8/8/8/4r1K1 b");
        assert!(!b.is_checkmate(Color::Black));
    }

    #[test]
    fn check_that_can_be_captured_is_not_checkmate() {
        let mut b = board("3R2k1/5ppp/8/8/8/8/8/3r2K1 b");
        assert!(!b.is_checkmate(Color::Black));
    }

    #[test]
    fn check_the_king_can_escape_is_not_checkmate() {
        let mut b = board("3R2k1/5pp1/8/8/8/8/8/6K1 b");
        assert!(!b.is_checkmate(Color::Black));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let mut b = board("7k/5Q2/6K1/8/8/8/8/8 b");
        assert!(b.moves(Color::Black).is_empty());
        assert!(!b.is_checkmate(Color::Black));
    }

    #[proptest]
    fn side_without_king_is_never_checkmated(c: Color) {
        assert!(!Board::empty(c).is_checkmate(c));
    }

    #[proptest]
    fn is_checkmate_does_not_mutate_the_board(mut b: Board, c: Color) {
        let before = b.clone();
        b.is_checkmate(c);
        assert_eq!(b, before);
    }

    #[proptest(cases = 64)]
    fn checkmate_iff_in_check_without_legal_moves(mut b: Board) {
        let c = b.turn;
        let king = b.find_king(c).unwrap();
        let check = b.is_checked(c, king);
        let stuck = b.moves(c).is_empty();
        assert_eq!(b.is_checkmate(c), check && stuck);
    }
}
