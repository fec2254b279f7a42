use crate::{
    board::Board,
    common::{BoardError, Mark, Move},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    /// Returns `true` once the round has a winner or ended in a draw.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Core game logic: one board, the side to move and the round status.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    to_move: Mark,
    status: GameStatus,
}

impl GameEngine {
    /// X always opens a round.
    pub const FIRST_MOVER: Mark = Mark::X;

    /// Create a new engine with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Self::FIRST_MOVER,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves accepted in the current round.
    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }

    /// Apply `mv` for the side to move and evaluate the round.
    ///
    /// The win check runs before the draw check, so a ninth move that
    /// completes a line is a win. The turn passes only while the round
    /// continues; a rejected move leaves the engine untouched.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, BoardError> {
        if self.status.is_over() {
            return Err(BoardError::GameOver);
        }
        let mark = self.to_move;
        self.board.make_move(mark, mv.row, mv.col)?;

        self.status = if self.board.is_winning() {
            log::info!("{} wins after {} moves", mark, self.board.occupied());
            GameStatus::Won(mark)
        } else if self.board.is_full() {
            log::info!("round drawn");
            GameStatus::Draw
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress
        };
        Ok(self.status)
    }

    /// Clear the board and start a new round with X to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Self::FIRST_MOVER;
        self.status = GameStatus::InProgress;
        log::debug!("board cleared for a new round");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
