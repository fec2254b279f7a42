pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The middle cell. Every diagonal passes through it.
pub const CENTER: (usize, usize) = (1, 1);

pub const CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (0, BOARD_SIZE - 1),
    (BOARD_SIZE - 1, 0),
    (BOARD_SIZE - 1, BOARD_SIZE - 1),
];

/// Diagonal corners paired with the corner on the far side of the center.
pub const OPPOSITE_CORNERS: [((usize, usize), (usize, usize)); 4] = [
    ((0, 0), (2, 2)),
    ((2, 2), (0, 0)),
    ((0, 2), (2, 0)),
    ((2, 0), (0, 2)),
];

/// Edge cell taken to break the double-corner fork.
pub const FORK_GUARD: (usize, usize) = (1, 0);

/// Number of occupied cells at the AI's second move when the AI opened in the center.
pub const FORK_GUARD_OCCUPIED: usize = 3;

pub type Line = [(usize, usize); BOARD_SIZE];

/// All eight winning lines: rows, columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Row lines come first in [`LINES`], column lines follow.
pub const ROW_LINES: core::ops::Range<usize> = 0..3;
pub const COLUMN_LINES: core::ops::Range<usize> = 3..6;
