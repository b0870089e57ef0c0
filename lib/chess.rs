mod board;
mod check;
mod color;
mod fen;
mod mate;
mod r#move;
mod moves;
mod piece;
mod role;
mod rules;
mod speculation;
mod square;

pub use board::*;
pub use color::*;
pub use fen::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use square::*;
