use crate::{
    ai,
    board::Board,
    common::{Mark, Move},
};
use rand::rngs::SmallRng;

use super::Player;

/// Computer player backed by the heuristic move selector.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> anyhow::Result<Move> {
        ai::select_move(board, mark, rng)
            .ok_or_else(|| anyhow::anyhow!("no empty cell left for {}", mark))
    }

    fn kind(&self) -> &'static str {
        "AI"
    }
}
