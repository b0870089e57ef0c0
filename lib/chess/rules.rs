use crate::chess::{Board, Piece, Role, Square};

impl Piece {
    /// Whether this piece, standing on `whence`, may move to `whither`.
    ///
    /// This only consults the piece's own movement rules on the given board,
    /// it does not verify whether the move leaves its king in check, except
    /// for the king itself, which may not step onto an attacked square.
    pub fn is_legal_move(&self, whence: Square, whither: Square, board: &Board) -> bool {
        match self.role() {
            Role::Pawn => pawn(self, whence, whither, board),
            Role::Knight => knight(self, whence, whither, board),
            Role::Bishop => bishop(self, whence, whither, board),
            Role::Rook => rook(self, whence, whither, board),
            Role::Queen => {
                rook(self, whence, whither, board) || bishop(self, whence, whither, board)
            }
            Role::King => {
                king(self, whence, whither, board) || castling(self, whence, whither, board)
            }
        }
    }

    /// Whether this piece, standing on `whence`, threatens `whither`.
    ///
    /// Same as [`Piece::is_legal_move`], except that the king only ever
    /// threatens adjacent squares, regardless of whether it could safely step
    /// onto them or castle.
    pub fn attacks(&self, whence: Square, whither: Square, board: &Board) -> bool {
        match self.role() {
            Role::King => is_adjacent(whence, whither) && lands(self, whither, board),
            _ => self.is_legal_move(whence, whither, board),
        }
    }
}

/// Whether `whither` is empty or held by an opponent.
fn lands(piece: &Piece, whither: Square, board: &Board) -> bool {
    board[whither].map_or(true, |p| p.is_opponent_of(piece))
}

/// Whether every square strictly between `whence` and `whither` is empty.
///
/// Both squares must lie on the same row, column or diagonal.
fn is_path_clear(whence: Square, whither: Square, board: &Board) -> bool {
    let (rows, cols) = whither.delta(whence);
    let (dr, dc) = (rows.signum(), cols.signum());
    let steps = rows.abs().max(cols.abs());

    (1..steps).all(|i| {
        whence
            .offset(dr * i, dc * i)
            .map_or(false, |sq| board[sq].is_none())
    })
}

fn is_adjacent(whence: Square, whither: Square) -> bool {
    let (rows, cols) = whither.delta(whence);
    rows.abs() <= 1 && cols.abs() <= 1 && (rows, cols) != (0, 0)
}

fn pawn(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    let color = piece.color();
    let dir = color.pawn_direction();
    let (rows, cols) = whither.delta(whence);

    match cols {
        0 if rows == dir => board[whither].is_none(),
        0 if rows == 2 * dir && whence.row() == color.pawn_row() => {
            board[whither].is_none() && is_path_clear(whence, whither, board)
        }
        -1 | 1 if rows == dir => board[whither].map_or(false, |p| p.is_opponent_of(piece)),
        _ => false,
    }
}

fn knight(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    let (rows, cols) = whither.delta(whence);
    matches!((rows.abs(), cols.abs()), (1, 2) | (2, 1)) && lands(piece, whither, board)
}

fn bishop(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    let (rows, cols) = whither.delta(whence);
    rows != 0
        && rows.abs() == cols.abs()
        && is_path_clear(whence, whither, board)
        && lands(piece, whither, board)
}

fn rook(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    let (rows, cols) = whither.delta(whence);
    (rows == 0) != (cols == 0)
        && is_path_clear(whence, whither, board)
        && lands(piece, whither, board)
}

/// A single step onto a square that is not attacked on the board as it stands.
///
/// The square the king vacates is not taken into account, the full check
/// after the move is left to the callers.
fn king(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    is_adjacent(whence, whither)
        && lands(piece, whither, board)
        && !board.is_checked(piece.color(), whither)
}

fn castling(piece: &Piece, whence: Square, whither: Square, board: &Board) -> bool {
    let (rows, cols) = whither.delta(whence);
    if piece.has_moved() || rows != 0 || cols.abs() != 2 {
        return false;
    }

    let (corner, dir) = match whither.col() {
        6 => (7, 1),
        2 => (0, -1),
        _ => return false,
    };

    let corner = Square::new(whence.row(), corner);
    let rook = board[corner].map_or(false, |p| {
        p.role() == Role::Rook && p.color() == piece.color() && !p.has_moved()
    });

    rook && is_path_clear(whence, corner, board)
        && (0..=2).all(|i| {
            whence
                .offset(0, dir * i)
                .map_or(false, |sq| !board.is_checked(piece.color(), sq))
        })
}
