use crate::chess::{Board, Piece, Square};
use arrayvec::ArrayVec;
use std::ops::Deref;

/// A provisional change to a [`Board`].
///
/// Every square touched through this guard is restored when it goes out of
/// scope, unless the change is explicitly [committed](`Speculation::commit`).
/// At most two pieces may be displaced, which is what castling requires.
pub(crate) struct Speculation<'a> {
    board: &'a mut Board,
    undo: ArrayVec<(Square, Option<Piece>), 4>,
}

impl<'a> Speculation<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Speculation {
            board,
            undo: ArrayVec::new(),
        }
    }

    /// Moves the contents of `whence` onto `whither`, returning what was captured.
    pub fn displace(&mut self, whence: Square, whither: Square) -> Option<Piece> {
        let piece = self.replace(whence, None);
        self.replace(whither, piece)
    }

    /// Keeps the changes on the board.
    pub fn commit(mut self) {
        self.undo.clear();
    }

    fn replace(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = self.board.set(sq, piece);
        self.undo.push((sq, previous));
        previous
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        while let Some((sq, piece)) = self.undo.pop() {
            self.board.set(sq, piece);
        }
    }
}
