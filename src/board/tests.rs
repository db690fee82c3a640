use super::*;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::Ai.opponent(), Cell::Opponent);
    assert_eq!(Cell::Opponent.opponent(), Cell::Ai);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_direction_opposite_is_involution() {
    for d in Direction::ALL {
        assert_ne!(d.opposite(), d, "{:?} must not be its own opposite", d);
        assert_eq!(d.opposite().opposite(), d);
    }
}

#[test]
fn test_direction_opposite_matches_index_arithmetic() {
    for i in 0..8 {
        let d = Direction::from_index(i);
        assert_eq!(d.index(), i);
        assert_eq!(d.opposite().index(), (i + 4) % 8);
    }
}

#[test]
fn test_direction_opposite_deltas_cancel() {
    for d in Direction::ALL {
        let (dx, dy) = d.delta();
        let (ox, oy) = d.opposite().delta();
        assert_eq!((dx + ox, dy + oy), (0, 0), "{:?}", d);
    }
}

#[test]
fn test_board_dimensions() {
    let board = Board::new(10, 12, 4).unwrap();
    assert_eq!(board.rows(), 10);
    assert_eq!(board.cols(), 12);
    assert_eq!(board.k(), 4);
    assert_eq!(board.empty_cells().count(), 120);

    let standard = Board::default();
    assert_eq!(standard.rows(), STANDARD_SIZE);
    assert_eq!(standard.cols(), STANDARD_SIZE);
    assert_eq!(standard.k(), STANDARD_K);
}

#[test]
fn test_board_rejects_zero_k() {
    assert_eq!(
        Board::new(15, 15, 0),
        Err(BoardError::InvalidDimensions { rows: 15, cols: 15, k: 0 })
    );
    assert!(Board::new(0, 15, 5).is_err());
    assert!(Board::new(15, 0, 5).is_err());
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::standard();
    let pos = Pos::new(3, 4);

    board.place(pos, Cell::Ai).unwrap();
    assert_eq!(board.get(pos), Cell::Ai);
    assert_eq!(board.piece_count(), 1);

    assert_eq!(board.place(pos, Cell::Opponent), Err(BoardError::Occupied(pos)));

    board.remove(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_place_rejects_bad_input() {
    let mut board = Board::standard();
    let off = Pos::new(15, 0);
    assert_eq!(board.place(off, Cell::Ai), Err(BoardError::OutOfBounds(off)));
    assert_eq!(board.place(Pos::new(0, 0), Cell::Empty), Err(BoardError::EmptyPiece));
    assert_eq!(board.get(off), Cell::Empty, "Off-board reads as empty");
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 2, 2).unwrap();
    assert!(!board.is_full());
    for (i, pos) in board.positions().collect::<Vec<_>>().into_iter().enumerate() {
        let cell = if i % 2 == 0 { Cell::Ai } else { Cell::Opponent };
        board.place(pos, cell).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
    assert_eq!(board.pieces().count(), 4);
}

#[test]
fn test_scan_visits_origin_first() {
    let board = Board::standard();
    let mut visited = Vec::new();
    board.scan(Pos::new(7, 7), Direction::East, |_, pos, dist| {
        visited.push((pos, dist));
        dist < 2
    });
    assert_eq!(
        visited,
        vec![(Pos::new(7, 7), 0), (Pos::new(8, 7), 1), (Pos::new(9, 7), 2)]
    );
}

#[test]
fn test_scan_returns_stop_distance() {
    let mut board = Board::standard();
    board.place(Pos::new(10, 7), Cell::Opponent).unwrap();

    let dist = board.scan(Pos::new(7, 7), Direction::East, |cell, _, _| cell == Cell::Empty);
    assert_eq!(dist, 3, "Should stop on the opponent piece three cells away");
}

#[test]
fn test_scan_stops_at_edge() {
    let board = Board::standard();
    let dist = board.scan(Pos::new(7, 7), Direction::North, |_, _, _| true);
    assert_eq!(dist, 8, "Rows 7..=0 are visited, the edge is at distance 8");

    let corner = board.scan(Pos::new(0, 0), Direction::NorthWest, |_, _, _| true);
    assert_eq!(corner, 1, "Only the origin fits on the board");
}

#[test]
fn test_scan_diagonal_positions() {
    let board = Board::standard();
    let mut last = None;
    board.scan(Pos::new(2, 12), Direction::NorthEast, |_, pos, _| {
        last = Some(pos);
        true
    });
    assert_eq!(last, Some(Pos::new(14, 0)));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(1, 0));
    assert!(Pos::new(14, 0) < Pos::new(0, 1));
}

#[test]
fn test_board_display() {
    let mut board = Board::new(3, 3, 3).unwrap();
    board.place(Pos::new(0, 0), Cell::Ai).unwrap();
    board.place(Pos::new(2, 1), Cell::Opponent).unwrap();
    let text = board.to_string();
    assert!(text.contains(" 0  X . ."), "got:\n{}", text);
    assert!(text.contains(" 1  . . O"), "got:\n{}", text);
}
