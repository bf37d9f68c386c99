//! Win condition checking
//!
//! A game is won by five or more stones of one colour in a contiguous
//! line through the last placed stone. Overlines count.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Furthest a scan walks from the origin in one direction
const MAX_STEPS: i32 = WIN_LENGTH as i32 - 1;

/// Count `color` stones walking from `pos` along `(dr, dc)`, stopping at
/// the first non-matching or off-board cell. Never exceeds `MAX_STEPS`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut count = 0;
    for step in 1..=MAX_STEPS {
        match pos.offset(dr, dc, step) {
            Some(p) if board.get(p) == color => count += 1,
            _ => break,
        }
    }
    count
}

/// Five-in-a-row check through a specific position.
///
/// `pos` should hold `color` (or be treated as if it did: the origin is
/// always counted). Only the four axes through `pos` are examined, so this
/// runs in constant time. Returns false for `Stone::Empty`.
#[inline]
pub fn has_five_in_line(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count =
            1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color);
        count >= WIN_LENGTH as i32
    })
}

/// Find five consecutive stones of a winning line through `pos`.
///
/// The first five stones of the run (from its negative end) are returned
/// so the UI can highlight them.
pub fn find_five_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; WIN_LENGTH]> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let forward = run_length(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH as i32 {
            continue;
        }

        let start = pos.offset(-dr, -dc, back)?;
        let mut line = [start; WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = start.offset(dr, dc, i as i32)?;
        }
        return Some(line);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn board_with(stones: &[(u8, u8)], color: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
        board
    }

    #[test]
    fn test_five_horizontal_from_every_stone() {
        let stones: Vec<(u8, u8)> = (3..8).map(|c| (7, c)).collect();
        let board = board_with(&stones, Stone::Black);
        for &(r, c) in &stones {
            assert!(has_five_in_line(&board, Pos::new(r, c), Stone::Black));
            assert!(!has_five_in_line(&board, Pos::new(r, c), Stone::White));
        }
    }

    #[test]
    fn test_five_vertical() {
        let stones: Vec<(u8, u8)> = (0..5).map(|r| (r, 9)).collect();
        let board = board_with(&stones, Stone::White);
        for &(r, c) in &stones {
            assert!(has_five_in_line(&board, Pos::new(r, c), Stone::White));
        }
    }

    #[test]
    fn test_five_diagonal() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (i + 2, i + 2)).collect();
        let board = board_with(&stones, Stone::Black);
        for &(r, c) in &stones {
            assert!(has_five_in_line(&board, Pos::new(r, c), Stone::Black));
        }
    }

    #[test]
    fn test_five_anti_diagonal() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(&stones, Stone::White);
        for &(r, c) in &stones {
            assert!(has_five_in_line(&board, Pos::new(r, c), Stone::White));
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<(u8, u8)> = (0..6).map(|c| (9, c)).collect();
        let board = board_with(&stones, Stone::Black);
        for &(r, c) in &stones {
            assert!(has_five_in_line(&board, Pos::new(r, c), Stone::Black));
        }
    }

    #[test]
    fn test_four_in_row_not_win() {
        let stones: Vec<(u8, u8)> = (5..9).map(|c| (9, c)).collect();
        let board = board_with(&stones, Stone::Black);
        for &(r, c) in &stones {
            assert!(!has_five_in_line(&board, Pos::new(r, c), Stone::Black));
        }
    }

    #[test]
    fn test_four_flush_against_edges_not_win() {
        let last = (BOARD_SIZE - 1) as u8;
        let cases: [Vec<(u8, u8)>; 6] = [
            (0..4).map(|c| (0, c)).collect(),
            ((last - 3)..=last).map(|c| (last, c)).collect(),
            (0..4).map(|r| (r, 0)).collect(),
            ((last - 3)..=last).map(|r| (r, last)).collect(),
            (0..4).map(|i| (i, i)).collect(),
            (0..4).map(|i| (i, last - i)).collect(),
        ];
        for stones in &cases {
            let board = board_with(stones, Stone::Black);
            for &(r, c) in stones {
                assert!(
                    !has_five_in_line(&board, Pos::new(r, c), Stone::Black),
                    "false five at ({r}, {c}) for {stones:?}"
                );
            }
        }
    }

    #[test]
    fn test_five_at_corner() {
        let stones: Vec<(u8, u8)> = (10..15).map(|i| (i, i)).collect();
        let board = board_with(&stones, Stone::White);
        assert!(has_five_in_line(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_broken_line_not_win() {
        // X X X _ X X
        let board = board_with(&[(4, 0), (4, 1), (4, 2), (4, 4), (4, 5)], Stone::Black);
        assert!(!has_five_in_line(&board, Pos::new(4, 2), Stone::Black));
        // Filling the gap wins
        let filled = board.with_stone(Pos::new(4, 3), Stone::Black);
        assert!(has_five_in_line(&filled, Pos::new(4, 3), Stone::Black));
    }

    #[test]
    fn test_hypothetical_origin_is_counted() {
        let board = board_with(&[(2, 2), (2, 3), (2, 5), (2, 6)], Stone::White);
        assert!(has_five_in_line(&board, Pos::new(2, 4), Stone::White));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!has_five_in_line(&board, Pos::new(7, 7), Stone::Empty));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let stones: Vec<(u8, u8)> = (3..8).map(|c| (7, c)).collect();
        let board = board_with(&stones, Stone::Black);
        let first = has_five_in_line(&board, Pos::new(7, 5), Stone::Black);
        for _ in 0..10 {
            assert_eq!(has_five_in_line(&board, Pos::new(7, 5), Stone::Black), first);
        }
    }

    #[test]
    fn test_find_five_line() {
        let stones: Vec<(u8, u8)> = (0..6).map(|i| (4 + i, 10 - i)).collect();
        let board = board_with(&stones, Stone::Black);
        let line = find_five_line(&board, Pos::new(6, 8), Stone::Black).unwrap();
        assert_eq!(
            line,
            [
                Pos::new(4, 10),
                Pos::new(5, 9),
                Pos::new(6, 8),
                Pos::new(7, 7),
                Pos::new(8, 6),
            ]
        );
    }

    #[test]
    fn test_find_five_line_none() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::Black);
        assert!(find_five_line(&board, Pos::new(0, 0), Stone::Black).is_none());
        assert!(find_five_line(&board, Pos::new(5, 5), Stone::Black).is_none());
    }
}
