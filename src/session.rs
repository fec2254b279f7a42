//! Interactive turn loop: two seats, one engine, console-style output.
#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::Write;

use rand::rngs::SmallRng;

use crate::{
    common::Mark,
    game::{GameEngine, GameStatus},
    player::{cli::write_board, Player},
};

/// Index of the seat playing `mark`.
fn seat(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// A match between two players. Seat 0 plays X, seat 1 plays O.
pub struct Session {
    players: [Box<dyn Player>; 2],
    engine: GameEngine,
}

impl Session {
    pub fn new(players: [Box<dyn Player>; 2]) -> Self {
        Self {
            players,
            engine: GameEngine::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play the current round to its end and return the winner, or `None` on a draw.
    ///
    /// Refused moves are written to `out` and the same player is asked again.
    /// The board is written after every accepted move.
    pub fn play_round<W: Write>(
        &mut self,
        rng: &mut SmallRng,
        out: &mut W,
    ) -> anyhow::Result<Option<Mark>> {
        loop {
            match self.engine.status() {
                GameStatus::InProgress => {}
                GameStatus::Won(winner) => return Ok(Some(winner)),
                GameStatus::Draw => return Ok(None),
            }

            let mark = self.engine.to_move();
            let player = &mut self.players[seat(mark)];
            writeln!(out, "Player {} ({}) go!", mark, player.kind())?;
            out.flush()?;

            let mv = player.select_move(rng, self.engine.board(), mark)?;
            if let Err(e) = self.engine.play(mv) {
                log::debug!("{} ({}) move {} refused: {}", mark, player.kind(), mv, e);
                writeln!(out, "{}", e)?;
                player.handle_rejected_move(mv, e)?;
                continue;
            }
            write_board(out, self.engine.board())?;
        }
    }

    /// Play rounds until one is won and return the winner.
    ///
    /// A drawn round is announced and replayed on a cleared board with X to move.
    pub fn run<W: Write>(&mut self, rng: &mut SmallRng, out: &mut W) -> anyhow::Result<Mark> {
        write_board(out, self.engine.board())?;
        loop {
            match self.play_round(rng, out)? {
                Some(winner) => {
                    writeln!(out, "{} Win!", winner)?;
                    return Ok(winner);
                }
                None => {
                    writeln!(out, "Nobody win... Play another round")?;
                    self.engine.reset();
                    write_board(out, self.engine.board())?;
                }
            }
        }
    }
}
