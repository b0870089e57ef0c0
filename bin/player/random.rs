use crate::player::Player;
use derive_more::{Display, Error};
use lib::chess::{Board, Color, Move};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// The reason why the [`Random`] player could not move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "{} has no legal moves", _0)]
pub struct NoLegalMoves(#[error(not(source))] pub Color);

/// Plays any legal move, chosen uniformly at random.
#[derive(Debug)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Seeds the player, or draws a seed from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Random { rng }
    }
}

impl Player for Random {
    type Error = NoLegalMoves;

    fn play(&mut self, board: &Board) -> Result<Move, Self::Error> {
        let moves = board.clone().moves(board.turn);
        match moves.choose(&mut self.rng) {
            Some(m) => Ok(*m),
            None => Err(NoLegalMoves(board.turn)),
        }
    }
}
