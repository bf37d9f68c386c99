use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
    assert_eq!(pos, CENTER);
}

#[test]
#[should_panic(expected = "off the 15x15 board")]
fn test_pos_new_out_of_bounds_panics() {
    let _ = Pos::new(15, 0);
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 4), Ok(Pos::new(3, 4)));
    assert_eq!(
        Pos::try_new(-1, 4),
        Err(GameError::OutOfBounds { row: -1, col: 4 })
    );
    assert_eq!(
        Pos::try_new(0, 15),
        Err(GameError::OutOfBounds { row: 0, col: 15 })
    );
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_all_is_row_major() {
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[15], Pos::new(1, 0));
    assert_eq!(all[224], Pos::new(14, 14));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_board_get_and_place() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(4, 4), Stone::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    assert_eq!(board.get(Pos::new(5, 4)), Stone::Empty);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.occupied().count(), 2);
}

#[test]
fn test_with_stone_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_stone(CENTER, Stone::Black);
    assert!(board.is_board_empty());
    assert_eq!(next.get(CENTER), Stone::Black);
}

#[test]
fn test_empty_cells_and_full_board() {
    let mut board = Board::new();
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
    for (i, pos) in Pos::all().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}
