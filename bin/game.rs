use crate::player::Player;
use derive_more::{Display, Error};
use lib::chess::{Board, Color};
use tracing::{info, instrument, warn};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the {} player encountered an error")]
pub enum GameInterrupted<W, B> {
    #[display(fmt = "white")]
    White(W),

    #[display(fmt = "black")]
    Black(B),
}

/// A pair of players taking turns on a [`Board`].
#[derive(Debug)]
pub struct Game<W, B> {
    white: W,
    black: B,
}

impl<W: Player, B: Player> Game<W, B> {
    pub fn new(white: W, black: B) -> Self {
        Game { white, black }
    }

    /// Plays from `board` until a side is checkmated or `limit` moves are played.
    ///
    /// Returns the winner, or `None` if the limit was reached first.
    #[instrument(level = "debug", skip(self))]
    pub fn play(
        &mut self,
        mut board: Board,
        limit: Option<usize>,
    ) -> Result<Option<Color>, GameInterrupted<W::Error, B::Error>> {
        use GameInterrupted::*;

        let mut played = 0;

        loop {
            if board.is_checkmate(board.turn) {
                let winner = !board.turn;
                info!(%winner, played, "checkmate");
                return Ok(Some(winner));
            }

            if limit.map_or(false, |l| played >= l) {
                info!(played, "move limit reached");
                return Ok(None);
            }

            let m = match board.turn {
                Color::White => self.white.play(&board).map_err(White)?,
                Color::Black => self.black.play(&board).map_err(Black)?,
            };

            match board[m.whence()] {
                Some(p) if p.color() == board.turn => match board.move_piece(m) {
                    Err(e) => warn!("{}", e),
                    Ok(_) => {
                        played += 1;
                        info!(%m, %board);
                    }
                },

                _ => warn!(%m, "it is {}'s turn to move", board.turn),
            }
        }
    }
}
