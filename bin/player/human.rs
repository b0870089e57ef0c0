use crate::{io::Io, player::Player};
use derive_more::{Display, Error, From};
use lib::chess::{Board, Move, Square};
use std::fmt::{self, Formatter};
use std::io::{self, Read, Write};

/// The reason why the [`Human`] stopped playing.
#[derive(Debug, Display, Error, From)]
pub enum HumanError {
    #[display(fmt = "the player left the game")]
    #[from(ignore)]
    Quit,

    #[display(fmt = "failed to communicate with the player")]
    Io(io::Error),
}

/// A person playing through a text terminal.
#[derive(Debug)]
pub struct Human<W: Write, R: Read> {
    io: Io<W, R>,
}

impl<W: Write, R: Read> Human<W, R> {
    pub fn new(io: Io<W, R>) -> Self {
        Human { io }
    }
}

impl<W: Write, R: Read> Player for Human<W, R> {
    type Error = HumanError;

    fn play(&mut self, board: &Board) -> Result<Move, Self::Error> {
        self.io.send(Diagram(board))?;

        loop {
            let prompt = format!("{} to move (e.g. e2e4, e2 or quit):", board.turn);
            let line = match self.io.ask(prompt)? {
                None => return Err(HumanError::Quit),
                Some(line) => line,
            };

            let line = line.trim();
            if line == "quit" {
                return Err(HumanError::Quit);
            } else if let Ok(m) = line.parse() {
                return Ok(m);
            } else if let Ok(sq) = line.parse::<Square>() {
                let moves = board.clone().legal_moves(sq);
                let moves: Vec<_> = moves.iter().map(Square::to_string).collect();
                self.io.send(format_args!("{sq}: {}", moves.join(" ")))?;
            } else {
                self.io.send(format_args!("cannot parse `{line}`"))?;
            }
        }
    }
}

/// Draws the board with rank and file labels.
struct Diagram<'a>(&'a Board);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.0[Square::new(row, col)] {
                    Some(p) => write!(f, " {p}")?,
                    None => write!(f, " .")?,
                }
            }

            writeln!(f)?;
        }

        write!(f, "   a b c d e f g h")
    }
}
