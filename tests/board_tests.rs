use tictactoe::{Board, BoardError, Cell, Mark, BOARD_SIZE, LINES};

#[test]
fn test_make_move_sets_cell_and_counts() {
    let mut board = Board::new();
    board.make_move(Mark::X, 1, 1).unwrap();

    assert_eq!(board.cell(1, 1), Some(Cell::X));
    assert_eq!(board.occupied(), 1);

    // second move on the same cell is refused
    assert_eq!(
        board.make_move(Mark::O, 1, 1).unwrap_err(),
        BoardError::CellOccupied { row: 1, col: 1 }
    );
    assert_eq!(board.cell(1, 1), Some(Cell::X));
    assert_eq!(board.occupied(), 1);
}

#[test]
fn test_make_move_out_of_bounds_leaves_board_unchanged() {
    let mut board = Board::new();
    board.make_move(Mark::O, 0, 2).unwrap();
    let before = board;

    assert_eq!(
        board.make_move(Mark::X, 9, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 9, col: 0 }
    );
    assert_eq!(
        board.make_move(Mark::X, 0, 19).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 19 }
    );
    assert_eq!(
        board.make_move(Mark::X, BOARD_SIZE, BOARD_SIZE).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 3 }
    );
    assert_eq!(board, before);
}

#[test]
fn test_every_line_wins() {
    for line in LINES.iter() {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for &(r, c) in line.iter() {
                board.make_move(mark, r, c).unwrap();
            }
            assert!(board.is_winning(), "line {:?} with {}", line, mark);
            assert_eq!(board.winner(), Some(mark));
        }
    }
}

#[test]
fn test_incomplete_or_mixed_lines_do_not_win() {
    let cases: [&[(usize, usize)]; 3] = [
        &[(0, 2), (1, 1), (2, 1)],
        &[(0, 2)],
        &[(0, 0), (0, 1)],
    ];
    for coords in cases {
        let mut board = Board::new();
        for &(r, c) in coords {
            board.make_move(Mark::O, r, c).unwrap();
        }
        assert!(!board.is_winning(), "{:?}", coords);
    }

    let mut mixed = Board::new();
    mixed.make_move(Mark::X, 0, 0).unwrap();
    mixed.make_move(Mark::O, 0, 1).unwrap();
    mixed.make_move(Mark::X, 0, 2).unwrap();
    assert!(!mixed.is_winning());
    assert_eq!(mixed.winner(), None);
}

#[test]
fn test_is_full_only_at_nine() {
    let mut board = Board::new();
    // X O X / X O O / O X X: no line, all cells used
    let layout = [
        [Mark::X, Mark::O, Mark::X],
        [Mark::X, Mark::O, Mark::O],
        [Mark::O, Mark::X, Mark::X],
    ];
    for (r, row) in layout.iter().enumerate() {
        for (c, &mark) in row.iter().enumerate() {
            assert!(!board.is_full());
            board.make_move(mark, r, c).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(!board.is_winning());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::new();
    board.make_move(Mark::X, 0, 0).unwrap();
    board.make_move(Mark::O, 1, 1).unwrap();
    board.make_move(Mark::X, 2, 2).unwrap();

    board.clear();

    assert_eq!(board.occupied(), 0);
    assert_eq!(board, Board::new());
    assert!(board
        .rows()
        .iter()
        .flatten()
        .all(|&cell| cell == Cell::Empty));
    // cleared cells accept moves again
    board.make_move(Mark::O, 0, 0).unwrap();
}

#[test]
fn test_queries_are_idempotent() {
    let mut board = Board::new();
    for (r, c) in [(0, 0), (1, 1), (2, 2)] {
        board.make_move(Mark::X, r, c).unwrap();
    }
    let before = board;
    for _ in 0..3 {
        assert!(board.is_winning());
        assert!(!board.is_full());
    }
    assert_eq!(board, before);
}

#[test]
fn test_symbols() {
    assert_eq!(Cell::Empty.symbol(), '*');
    assert_eq!(Cell::X.symbol(), 'X');
    assert_eq!(Cell::O.symbol(), 'O');
    assert_eq!(Cell::from(Mark::O), Cell::O);
    assert_eq!(Mark::X.opponent(), Mark::O);
}

#[test]
fn test_render() {
    let empty = Board::new().to_string();
    let header = empty.lines().next().unwrap();
    assert_eq!(header, "  0   1   2");
    assert_eq!(header.len(), 11);

    let mut board = Board::new();
    board.make_move(Mark::X, 0, 0).unwrap();
    board.make_move(Mark::O, 1, 1).unwrap();
    assert_eq!(
        board.to_string(),
        "  0   1   2\n0 X | * | *\n1 * | O | *\n2 * | * | *\n"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::CellOccupied { row: 1, col: 2 }.to_string(),
        "Field row=1 col=2 is not empty"
    );
    assert_eq!(
        BoardError::OutOfBounds { row: 5, col: 5 }.to_string(),
        "row=5 and col=5 should be from 0 to 2"
    );
}
