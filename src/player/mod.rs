//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: rule-based heuristic opponent
//! - CliPlayer: interactive command-line player

use crate::{
    board::Board,
    common::{BoardError, Mark, Move},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// The turn loop asks the player whose mark is to move for a cell, then hands
/// the move to the engine. Players never mutate the board themselves.
pub trait Player {
    /// Choose the next cell for `mark` on `board`.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark)
        -> anyhow::Result<Move>;

    /// Inform the player that the engine refused its last move.
    ///
    /// Returning `Ok` asks the turn loop to prompt the same player again.
    /// Players that cannot correct themselves keep the default and end the game.
    /// `AiPlayer` keeps it, but the selector only proposes empty in-bounds cells,
    /// so an AI move is never refused during play.
    fn handle_rejected_move(&mut self, mv: Move, err: BoardError) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("move {} rejected: {}", mv, err))
    }

    /// Short label used when announcing turns.
    fn kind(&self) -> &'static str;
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
