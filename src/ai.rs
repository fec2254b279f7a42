//! Heuristic move selection for the computer player.
//!
//! One ply only: an ordered list of independent rules, the first that yields a
//! move wins. Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{Cell, Mark, Move},
    config::{
        CENTER, COLUMN_LINES, CORNERS, FORK_GUARD, FORK_GUARD_OCCUPIED, LINES, OPPOSITE_CORNERS,
        ROW_LINES,
    },
};
use rand::{seq::SliceRandom, Rng};

/// A proposed move together with what it achieves for the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    /// Completing this cell wins immediately.
    pub wins: bool,
    /// Taking this cell stops the opponent from completing a line next turn.
    pub blocks: bool,
}

impl Candidate {
    fn plain(row: usize, col: usize) -> Self {
        Self {
            mv: Move::new(row, col),
            wins: false,
            blocks: false,
        }
    }

    fn threat(row: usize, col: usize, threat: Threat) -> Self {
        Self {
            mv: Move::new(row, col),
            wins: threat == Threat::Win,
            blocks: threat == Threat::Block,
        }
    }
}

/// Whose two-in-a-line a threat rule is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threat {
    /// Two of the mover's marks and a gap.
    Win,
    /// Two of the opponent's marks and a gap.
    Block,
}

/// A single heuristic. Each rule is a predicate plus the move it proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Take the center while it is free.
    Center,
    /// Answer the double-corner opening with an edge cell.
    ForkGuard,
    /// Finish or cut the diagonal running through the center.
    Diagonal(Threat),
    /// Finish or cut a row or column.
    Line(Threat),
    /// Take a free corner, picked at random.
    Corner,
    /// Take the first free cell in row-major order.
    FirstEmpty,
}

/// Rules in priority order. Wins on any line are tried before any block.
pub const RULES: [Rule; 8] = [
    Rule::Center,
    Rule::ForkGuard,
    Rule::Diagonal(Threat::Win),
    Rule::Line(Threat::Win),
    Rule::Diagonal(Threat::Block),
    Rule::Line(Threat::Block),
    Rule::Corner,
    Rule::FirstEmpty,
];

impl Rule {
    /// Evaluate this rule alone for `ai` on `board`.
    pub fn apply<R: Rng + ?Sized>(self, board: &Board, ai: Mark, rng: &mut R) -> Option<Candidate> {
        match self {
            Rule::Center => center(board),
            Rule::ForkGuard => fork_guard(board, ai),
            Rule::Diagonal(threat) => diagonal(board, ai, threat),
            Rule::Line(threat) => line(board, ai, threat),
            Rule::Corner => corner(board, rng),
            Rule::FirstEmpty => board
                .empty_cells()
                .next()
                .map(|mv| Candidate::plain(mv.row, mv.col)),
        }
    }
}

fn center(board: &Board) -> Option<Candidate> {
    let (r, c) = CENTER;
    board.is_empty(r, c).then(|| Candidate::plain(r, c))
}

fn fork_guard(board: &Board, ai: Mark) -> Option<Candidate> {
    if board.occupied() != FORK_GUARD_OCCUPIED {
        return None;
    }
    let (cr, cc) = CENTER;
    if board.cell(cr, cc) != Some(Cell::from(ai)) {
        return None;
    }
    let enemy = Some(Cell::from(ai.opponent()));
    let threatened = OPPOSITE_CORNERS
        .iter()
        .any(|&((r1, c1), (r2, c2))| board.cell(r1, c1) == enemy && board.cell(r2, c2) == enemy);
    let (gr, gc) = FORK_GUARD;
    (threatened && board.is_empty(gr, gc)).then(|| Candidate::plain(gr, gc))
}

fn diagonal(board: &Board, ai: Mark, threat: Threat) -> Option<Candidate> {
    let (cr, cc) = CENTER;
    let owner = board.cell(cr, cc)?.mark()?;
    let found = if owner == ai { Threat::Win } else { Threat::Block };
    if found != threat {
        return None;
    }
    OPPOSITE_CORNERS
        .iter()
        .find(|&&((r1, c1), (r2, c2))| {
            board.cell(r1, c1) == Some(Cell::from(owner)) && board.is_empty(r2, c2)
        })
        .map(|&(_, (r, c))| Candidate::threat(r, c, threat))
}

fn line(board: &Board, ai: Mark, threat: Threat) -> Option<Candidate> {
    let wanted = match threat {
        Threat::Win => ai,
        Threat::Block => ai.opponent(),
    };
    ROW_LINES.chain(COLUMN_LINES).find_map(|i| {
        let mut count = 0;
        let mut gap = None;
        for &(r, c) in LINES[i].iter() {
            match board.cell(r, c)?.mark() {
                Some(m) if m == wanted => count += 1,
                Some(_) => {}
                None => gap = Some((r, c)),
            }
        }
        match gap {
            Some((r, c)) if count == LINES[i].len() - 1 => Some(Candidate::threat(r, c, threat)),
            _ => None,
        }
    })
}

fn corner<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Candidate> {
    let mut corners = CORNERS;
    corners.shuffle(rng);
    corners
        .iter()
        .find(|&&(r, c)| board.is_empty(r, c))
        .map(|&(r, c)| Candidate::plain(r, c))
}

/// Run the rules in order and report the first one that fires.
pub fn select_candidate<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    rng: &mut R,
) -> Option<(Rule, Candidate)> {
    if board.is_full() {
        return None;
    }
    RULES
        .iter()
        .find_map(|&rule| rule.apply(board, ai, rng).map(|cand| (rule, cand)))
}

/// Pick the next cell for `ai`. Returns `None` only when the board is full.
pub fn select_move<R: Rng + ?Sized>(board: &Board, ai: Mark, rng: &mut R) -> Option<Move> {
    let (rule, cand) = select_candidate(board, ai, rng)?;
    log::debug!(
        "{} plays {} via {:?} (wins: {}, blocks: {})",
        ai,
        cand.mv,
        rule,
        cand.wins,
        cand.blocks
    );
    Some(cand.mv)
}
