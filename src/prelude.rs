//! Commonly used types and utilities for ease of import.

pub use crate::{select_move, AiPlayer, Board, BoardError, GameEngine, GameStatus, Mark, Move, Player};

#[cfg(feature = "std")]
pub use crate::{write_board, CliPlayer, Session};
