use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Square};
use tracing::instrument;

/// Lists the legal destinations of a piece.
#[derive(Debug, Parser)]
pub struct Moves {
    /// The board to inspect.
    #[clap(long, default_value_t)]
    fen: Board,

    /// The square the piece stands on, e.g. `e2`.
    square: Square,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(mut self) -> Result<(), Anyhow> {
        let moves = self.fen.legal_moves(self.square);
        let moves: Vec<_> = moves.iter().map(Square::to_string).collect();
        println!("{}", moves.join(" "));
        Ok(())
    }
}
