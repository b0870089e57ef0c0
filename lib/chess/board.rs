use crate::chess::{speculation::Speculation, Color, Move, Piece, Role, Square};
use derive_more::{DebugCustom, Display, Error};
use proptest::{prelude::*, sample::Selector};
use std::ops::Index;
use tracing::instrument;

/// The reason why [`Board::move_piece`] rejected a [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalMove {
    #[display(fmt = "move `{}` is invalid", _0)]
    Invalid(#[error(not(source))] Move),

    #[display(fmt = "move `{}` leaves the king in check", _0)]
    SelfCheck(#[error(not(source))] Move),
}

/// The chess board.
///
/// The board exclusively owns the pieces it holds, moving a piece transfers
/// the grid slot rather than copying its identity.
#[derive(DebugCustom, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board(\"{}\")", self)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    /// The side to move.
    pub turn: Color,
}

/// The standard initial placement.
impl Default for Board {
    fn default() -> Self {
        use Role::*;

        let mut board = Board::empty(Color::White);
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (col, role) in (0..8).zip(back) {
            board.set(Square::new(0, col), Some(Piece::new(role, Color::Black)));
            board.set(Square::new(1, col), Some(Piece::new(Pawn, Color::Black)));
            board.set(Square::new(6, col), Some(Piece::new(Pawn, Color::White)));
            board.set(Square::new(7, col), Some(Piece::new(role, Color::White)));
        }

        board
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty(turn: Color) -> Self {
        Board {
            grid: [[None; 8]; 8],
            turn,
        }
    }

    /// Puts a piece on a [`Square`], or clears it, returning its previous occupant.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let slot = &mut self.grid[sq.row() as usize][sq.col() as usize];
        std::mem::replace(slot, piece)
    }

    /// An iterator over all pieces on the board in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(move |sq| Some((self[sq]?, sq)))
    }

    /// [`Square`] occupied by the king of the given [`Color`], if any.
    ///
    /// If there happen to be several, the first one in row-major order is returned.
    pub fn find_king(&self, side: Color) -> Option<Square> {
        self.iter()
            .find(|(p, _)| p.role() == Role::King && p.color() == side)
            .map(|(_, sq)| sq)
    }

    /// Plays a [`Move`] if legal on this board.
    ///
    /// On success, the piece is marked as moved, the turn passes to the
    /// opponent and the captured piece, if any, is returned.
    /// On failure the board is left untouched.
    ///
    /// The side to move is not enforced, the mover's own king is the one
    /// that must not be left in check.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn move_piece(&mut self, m: Move) -> Result<Option<Piece>, IllegalMove> {
        let (whence, whither) = (m.whence(), m.whither());

        let piece = match self[whence] {
            Some(p) if p.is_legal_move(whence, whither, self) => p,
            _ => return Err(IllegalMove::Invalid(m)),
        };

        let castling = castling_rook(piece, m);
        let side = piece.color();

        let mut trial = Speculation::new(self);

        if let Some((corner, target)) = castling {
            trial.displace(corner, target);
        }

        let capture = trial.displace(whence, whither);

        if let Some(king) = trial.find_king(side) {
            if trial.is_checked(side, king) {
                return Err(IllegalMove::SelfCheck(m));
            }
        }

        trial.commit();

        self.set(whither, Some(piece.moved()));
        if let Some((_, target)) = castling {
            let rook = self[target].map(Piece::moved);
            self.set(target, rook);
        }

        self.turn = !self.turn;

        Ok(capture)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.grid[sq.row() as usize][sq.col() as usize]
    }
}

/// The rook relocation implied by a castling move, if `m` is one.
fn castling_rook(piece: Piece, m: Move) -> Option<(Square, Square)> {
    let (rows, cols) = m.whither().delta(m.whence());
    if piece.role() != Role::King || rows != 0 || cols.abs() != 2 {
        return None;
    }

    let row = m.whence().row();
    match m.whither().col() {
        6 => Some((Square::new(row, 7), Square::new(row, 5))),
        2 => Some((Square::new(row, 0), Square::new(row, 3))),
        _ => None,
    }
}

/// Boards reachable from the initial position by random legal play.
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..32usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut board = Board::default();

                for _ in 0..plies {
                    let moves = board.moves(board.turn);
                    match selector.try_select(moves) {
                        Some(m) if board.move_piece(m).is_ok() => continue,
                        _ => break,
                    }
                }

                board
            })
            .boxed()
    }
}
