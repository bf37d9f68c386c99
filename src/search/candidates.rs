//! Candidate move generation
//!
//! Only empty cells within `NEIGHBOR_RADIUS` rows and columns of an
//! existing stone are considered. This keeps the scan small on a sparse
//! board, and it also decides which moves the selector can ever see.

use crate::board::{Board, Pos, CENTER};

/// Chebyshev distance from a stone within which a cell is a candidate
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Check whether any stone lies within the neighbourhood square of `pos`.
#[inline]
pub fn has_neighbor(board: &Board, pos: Pos) -> bool {
    for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
        for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            if let Some(p) = pos.offset(dr, dc, 1) {
                if !board.is_empty(p) {
                    return true;
                }
            }
        }
    }
    false
}

/// Generate candidate moves in row-major order.
///
/// On a board without stones no cell qualifies, so the center is offered
/// as the single opening candidate. On a full board the result is empty.
#[must_use]
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    board
        .empty_cells()
        .filter(|&pos| has_neighbor(board, pos))
        .collect()
}
