//! Heuristic scoring of a single empty cell
//!
//! A candidate cell is scored by pretending a stone of the given colour
//! sits there and measuring, on each of the four axes, how long the
//! resulting run is and how many of its ends are open. The board itself
//! is never modified.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

use super::patterns::{line_score, OCCUPIED_SCORE};

/// Furthest a scan walks from the origin in one direction
const MAX_STEPS: i32 = WIN_LENGTH as i32 - 1;

/// Measurement of one axis through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Run length including the origin
    pub run: u8,
    /// Ends of the run that touch an empty cell (0..=2)
    pub open_ends: u8,
}

impl LineScan {
    #[inline]
    pub fn score(self) -> i32 {
        line_score(self.run, self.open_ends)
    }
}

/// Walk one direction. Returns (stones found, end is open).
#[inline]
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (u8, bool) {
    let mut count = 0u8;
    for step in 1..=MAX_STEPS {
        let Some(p) = pos.offset(dr, dc, step) else {
            return (count, false);
        };
        match board.get(p) {
            s if s == color => count += 1,
            Stone::Empty => return (count, true),
            _ => return (count, false),
        }
    }
    // Walked the full distance on own stones: neither open nor blocked
    (count, false)
}

/// Measure the run through `pos` along `(dr, dc)` as if `color` were there.
pub fn scan_axis(board: &Board, pos: Pos, (dr, dc): (i32, i32), color: Stone) -> LineScan {
    let (forward, forward_open) = walk(board, pos, dr, dc, color);
    let (back, back_open) = walk(board, pos, -dr, -dc, color);
    LineScan {
        run: 1 + forward + back,
        open_ends: u8::from(forward_open) + u8::from(back_open),
    }
}

/// Desirability of placing `color` at `pos`, summed over the four axes.
///
/// Returns [`OCCUPIED_SCORE`] if the cell is taken or `color` is
/// `Stone::Empty`; every other result is non-negative.
#[must_use]
pub fn score_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    if color == Stone::Empty || !board.is_empty(pos) {
        return OCCUPIED_SCORE;
    }

    DIRECTIONS
        .iter()
        .map(|&dir| scan_axis(board, pos, dir, color).score())
        .sum()
}
