use crate::chess::{Board, Color, Square};

impl Board {
    /// Whether `sq` is attacked by any opponent of `side`.
    ///
    /// A square counts as attacked if some opposing piece could move onto it
    /// on the board as it stands, with kings only reaching adjacent squares.
    pub fn is_checked(&self, side: Color, sq: Square) -> bool {
        self.iter()
            .any(|(p, whence)| p.color() != side && p.attacks(whence, sq, self))
    }
}
