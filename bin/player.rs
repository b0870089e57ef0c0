use crate::io::Io;
use derive_more::{Display, Error, From};
use lib::chess::{Board, Move};
use std::io::{stdin, stdout, Stdin, Stdout};
use std::str::FromStr;

mod human;
mod random;

pub use human::*;
pub use random::*;

/// Trait for types that know how to play chess.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Player {
    /// The reason why a move could not be proposed.
    type Error;

    /// Proposes a [`Move`] for the side to move.
    fn play(&mut self, board: &Board) -> Result<Move, Self::Error>;
}

/// The reason why parsing player configuration failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected `human`, `random` or `random:SEED`")]
pub struct ParsePlayerConfigError;

/// Runtime configuration for a [`Player`].
#[derive(Debug, Display, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum PlayerConfig {
    #[display(fmt = "human")]
    Human,
    #[display(fmt = "random{}", "_0.map(|s| format!(\":{s}\")).unwrap_or_default()")]
    Random(Option<u64>),
}

impl FromStr for PlayerConfig {
    type Err = ParsePlayerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "human" => Ok(PlayerConfig::Human),
            None if s == "random" => Ok(PlayerConfig::Random(None)),
            Some(("random", seed)) => match seed.parse() {
                Ok(seed) => Ok(PlayerConfig::Random(Some(seed))),
                Err(_) => Err(ParsePlayerConfigError),
            },
            _ => Err(ParsePlayerConfigError),
        }
    }
}

impl PlayerConfig {
    /// Instantiates the configured [`Player`].
    pub fn build(self) -> AnyPlayer {
        match self {
            PlayerConfig::Human => Human::new(Io::new(stdout(), stdin())).into(),
            PlayerConfig::Random(seed) => Random::new(seed).into(),
        }
    }
}

/// The reason why [`AnyPlayer`] failed to propose a [`Move`].
#[derive(Debug, Display, Error, From)]
pub enum PlayerError {
    Human(HumanError),
    Random(NoLegalMoves),
}

/// Any of the configurable players.
#[derive(Debug, From)]
pub enum AnyPlayer {
    Human(Human<Stdout, Stdin>),
    Random(Random),
}

impl Player for AnyPlayer {
    type Error = PlayerError;

    fn play(&mut self, board: &Board) -> Result<Move, Self::Error> {
        match self {
            AnyPlayer::Human(p) => Ok(p.play(board)?),
            AnyPlayer::Random(p) => Ok(p.play(board)?),
        }
    }
}
