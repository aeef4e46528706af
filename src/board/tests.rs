use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    for stone in [Stone::Empty, Stone::Black, Stone::White] {
        assert_eq!(Stone::from_symbol(stone.symbol()), Some(stone));
    }
    assert_eq!(Stone::from_symbol('N'), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(10, 10); // Center
    assert_eq!(pos.to_index(), 10 * 20 + 10);
    assert_eq!(Pos::from_index(210), pos);
    assert_eq!(Pos::center(), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(19, 19));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 20));
    assert_eq!(Pos::try_new(20, 0), None);
    assert_eq!(Pos::try_new(4, 5), Some(Pos::new(4, 5)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 20);
    assert_eq!(TOTAL_CELLS, 400);
}

#[test]
fn test_pos_equality_ignores_nothing_but_coordinates() {
    assert_eq!(Pos::new(3, 4), Pos { row: 3, col: 4 });
    assert_ne!(Pos::new(3, 4), Pos::new(4, 3));
}

#[test]
fn test_pos_distance() {
    assert_eq!(Pos::new(0, 0).distance(Pos::new(3, 4)), 5.0);
    assert_eq!(Pos::center().distance(Pos::center()), 0.0);
}

#[test]
fn test_new_board() {
    let board = Board::new();
    assert_eq!(board.active(), Stone::Black);
    assert!(board.is_board_empty());
    assert_eq!(
        board.count_marks(),
        MarkCounts {
            black: 0,
            white: 0,
            empty: 400
        }
    );
}

#[test]
fn test_apply_flips_turn_and_leaves_original() {
    let board = Board::new();
    let pos = Pos::new(10, 10);
    let next = board.apply(pos).unwrap();

    assert_eq!(next.get(pos), Stone::Black);
    assert_eq!(next.active(), Stone::White);
    assert!(board.is_board_empty());
    assert_eq!(board.active(), Stone::Black);

    let after = next.apply(Pos::new(10, 11)).unwrap();
    assert_eq!(after.get(Pos::new(10, 11)), Stone::White);
    assert_eq!(after.active(), Stone::Black);
}

#[test]
fn test_apply_twice_on_same_cell_fails() {
    let pos = Pos::new(7, 3);
    let mut board = Board::new();
    board.play(pos).unwrap();
    let snapshot = board;

    let err = board.play(pos).unwrap_err();
    assert_eq!(err, GameError::OccupiedOrOutOfRange { row: 7, col: 3 });
    assert_eq!(board, snapshot);
    assert_eq!(board.apply(pos), Err(err));
}

#[test]
fn test_apply_out_of_range_fails() {
    let board = Board::new();
    let outside = Pos { row: 20, col: 0 };
    assert_eq!(
        board.apply(outside),
        Err(GameError::OccupiedOrOutOfRange { row: 20, col: 0 })
    );
    let outside = Pos { row: 3, col: 200 };
    assert!(board.apply(outside).is_err());
}

#[test]
fn test_off_grid_reads_do_not_panic() {
    let mut board = Board::new();
    board.play(Pos::new(0, 0)).unwrap();
    for outside in [Pos { row: 40, col: 0 }, Pos { row: 0, col: 20 }, Pos { row: 255, col: 255 }] {
        assert_eq!(board.get(outside), Stone::Empty);
        assert!(!board.is_occupied(outside));
        assert!(!board.is_empty(outside));
    }
    // (0, 200) would alias a real bit without the bounds check
    let mut set_up = Board::new();
    set_up.place_stone(Pos { row: 0, col: 200 }, Stone::White);
    assert!(set_up.is_board_empty());
    assert!(!board.is_occupied(Pos { row: 0, col: 200 }));
}

#[test]
fn test_count_marks() {
    let mut board = Board::new();
    for (r, c) in [(0, 0), (0, 1), (0, 2)] {
        board.play(Pos::new(r, c)).unwrap();
    }
    let counts = board.count_marks();
    assert_eq!(counts.black, 2);
    assert_eq!(counts.white, 1);
    assert_eq!(counts.empty, 397);
    assert_eq!(board.stone_count(), 3);
}

#[test]
fn test_empty_cells_skip_stones() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::White);
    let first = board.empty_cells().next();
    assert_eq!(first, Some(Pos::new(0, 1)));
    assert_eq!(board.empty_cells().count(), 399);
}

#[test]
fn test_place_stone_keeps_turn() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 1), Stone::White);
    assert_eq!(board.active(), Stone::Black);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_display_grid() {
    let board = Board::new().apply(Pos::new(0, 1)).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].trim_start().starts_with("0  1  2"));
    assert!(lines[1].starts_with(" 0  .  X  ."));
}
