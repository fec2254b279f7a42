#![cfg(feature = "std")]

use std::io::{self, BufRead, Cursor, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{BoardError, Mark, Move},
    config::BOARD_SIZE,
};
use rand::rngs::SmallRng;

use super::Player;

/// Source of whole input lines.
///
/// Standard input takes its lock for a single line only, so any number of
/// players can read from it on the same thread.
pub trait LineInput {
    /// Append the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: io::Read> LineInput for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading row and column indices line by line.
pub struct CliPlayer<R = io::Stdin> {
    input: R,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new() -> Self {
        Self { input: io::stdin() }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LineInput> CliPlayer<R> {
    /// Player reading from an arbitrary source, e.g. a scripted buffer.
    pub fn with_input(input: R) -> Self {
        Self { input }
    }

    /// Prompt for `name` until a valid index arrives.
    fn read_index(&mut self, name: &str) -> anyhow::Result<usize> {
        loop {
            print!("Enter {}: ", name);
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed while reading {}", name);
            }
            match parse_index(line.trim(), name) {
                Ok(index) => return Ok(index),
                Err(msg) => println!("{}", msg),
            }
        }
    }
}

/// Parse a zero-based row or column index.
pub fn parse_index(input: &str, name: &str) -> Result<usize, String> {
    if input.is_empty() {
        return Err(format!("{} is empty - type a number", name));
    }
    let index: usize = input
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number", name, input))?;
    if index >= BOARD_SIZE {
        return Err(format!("{} should be 0, 1, 2", name));
    }
    Ok(index)
}

/// Ask whether the second seat is taken by the computer. Only `y` or `Y` means yes.
pub fn prompt_play_with_ai<R: BufRead>(input: &mut R) -> anyhow::Result<bool> {
    print!("Do you want to play with AI? (y/n): ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

/// Write the grid followed by a separator line.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}", board)?;
    writeln!(out, "\n#############\n")
}

impl<R: LineInput> Player for CliPlayer<R> {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        _board: &Board,
        _mark: Mark,
    ) -> anyhow::Result<Move> {
        let row = self.read_index("Row")?;
        let col = self.read_index("Column")?;
        Ok(Move::new(row, col))
    }

    // The turn loop has already shown the error; ask again.
    fn handle_rejected_move(&mut self, _mv: Move, _err: BoardError) -> anyhow::Result<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "Human"
    }
}
