use crate::{game::Game, player::PlayerConfig};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color};
use std::num::NonZeroUsize;
use tracing::{info, instrument};

/// A match of chess between two players.
#[derive(Debug, Parser)]
pub struct Play {
    /// How many games to play.
    #[clap(short = 'n', long, default_value = "1")]
    games: NonZeroUsize,

    /// The player with the white pieces: `human`, `random` or `random:SEED`.
    #[clap(long, default_value_t = PlayerConfig::Human)]
    white: PlayerConfig,

    /// The player with the black pieces: `human`, `random` or `random:SEED`.
    #[clap(long, default_value_t = PlayerConfig::Random(None))]
    black: PlayerConfig,

    /// End a game as a draw after this many moves.
    #[clap(long)]
    max_moves: Option<NonZeroUsize>,

    /// The board every game starts from.
    #[clap(long, default_value_t)]
    fen: Board,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            games: NonZeroUsize::MIN,
            white: PlayerConfig::Human,
            black: PlayerConfig::Random(None),
            max_moves: None,
            fen: Board::default(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new(self.white.build(), self.black.build());
        let limit = self.max_moves.map(NonZeroUsize::get);
        let (mut white, mut black, mut draws) = (0, 0, 0);

        for _ in 0..self.games.get() {
            match game.play(self.fen.clone(), limit)? {
                Some(Color::White) => white += 1,
                Some(Color::Black) => black += 1,
                None => draws += 1,
            }

            info!(games = white + black + draws, white, black, draws);
        }

        println!("white {white} - black {black} - draws {draws}");

        Ok(())
    }
}
