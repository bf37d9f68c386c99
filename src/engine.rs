//! Greedy move selector for the automated side
//!
//! The selector looks one ply ahead only:
//!
//! 1. **Opening**: an empty board is answered with the center
//! 2. **Immediate win / block**: candidates are checked in row-major order;
//!    the first cell that completes five for either side is played
//! 3. **Heuristic**: otherwise every candidate is scored as
//!    `offense + 1.1 * defense` and the best one is played
//!
//! # Example
//!
//! ```
//! use gomoku::{choose_move, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let reply = choose_move(&board, Stone::White, Stone::Black).unwrap();
//! assert!(board.is_empty(reply));
//! ```

use crate::board::{Board, Pos, Stone, CENTER};
use crate::error::GameError;
use crate::eval::{score_position, PatternScore};
use crate::rules::has_five_in_line;
use crate::search::generate_candidates;
use std::time::Instant;

/// Weight applied to the opponent's score at a cell. Above 1.0 so that
/// equal threats are resolved in favour of blocking.
pub const DEFENSE_WEIGHT: f64 = 1.1;

/// Which step of the selector produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center played
    Opening,
    /// Move completes five for the automated side
    ImmediateWin,
    /// Move stops the opponent completing five
    Block,
    /// Best blended offense/defense score
    Heuristic,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Blended score for heuristic moves, the five score for forced moves
    pub score: f64,
    pub search_type: SearchType,
    /// Number of candidate cells considered
    pub candidates: usize,
    pub time_us: u64,
}

impl MoveResult {
    fn new(best_move: Pos, score: f64, search_type: SearchType, candidates: usize, start: Instant) -> Self {
        Self {
            best_move,
            score,
            search_type,
            candidates,
            time_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// A scored candidate
#[derive(Debug, Clone, Copy)]
struct ScoredMove {
    pos: Pos,
    total: f64,
}

fn validate_players(ai: Stone, human: Stone) -> Result<(), GameError> {
    if ai == Stone::Empty {
        return Err(GameError::InvalidPlayer(ai));
    }
    if human == Stone::Empty || human == ai {
        return Err(GameError::InvalidPlayer(human));
    }
    Ok(())
}

/// First candidate, in order, where `ai` wins or `human` would win.
fn find_forced_move(board: &Board, candidates: &[Pos], ai: Stone, human: Stone) -> Option<(Pos, SearchType)> {
    candidates.iter().find_map(|&pos| {
        if has_five_in_line(&board.with_stone(pos, ai), pos, ai) {
            Some((pos, SearchType::ImmediateWin))
        } else if has_five_in_line(&board.with_stone(pos, human), pos, human) {
            Some((pos, SearchType::Block))
        } else {
            None
        }
    })
}

/// Score every candidate and return them best first.
///
/// The sort is stable, so equal totals keep row-major order.
fn rank_candidates(board: &Board, candidates: &[Pos], ai: Stone, human: Stone) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = candidates
        .iter()
        .map(|&pos| {
            let offense = f64::from(score_position(board, pos, ai));
            let defense = f64::from(score_position(board, pos, human));
            ScoredMove {
                pos,
                total: offense + defense * DEFENSE_WEIGHT,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.total.total_cmp(&a.total));
    scored
}

/// Choose the automated side's next move with selector statistics.
///
/// # Errors
///
/// - [`GameError::InvalidPlayer`] if either colour is `Empty` or both are
///   the same
/// - [`GameError::BoardFull`] if no empty cell remains
pub fn choose_move_with_stats(board: &Board, ai: Stone, human: Stone) -> Result<MoveResult, GameError> {
    let start = Instant::now();
    validate_players(ai, human)?;

    if board.is_full() {
        return Err(GameError::BoardFull);
    }

    if board.is_board_empty() {
        log::debug!("empty board, opening at {CENTER}");
        return Ok(MoveResult::new(CENTER, 0.0, SearchType::Opening, 1, start));
    }

    let candidates = generate_candidates(board);

    if let Some((pos, search_type)) = find_forced_move(board, &candidates, ai, human) {
        log::debug!("{:?} at {pos} for {}", search_type, ai.name());
        return Ok(MoveResult::new(
            pos,
            f64::from(PatternScore::FIVE),
            search_type,
            candidates.len(),
            start,
        ));
    }

    let ranked = rank_candidates(board, &candidates, ai, human);
    // A non-empty, non-full board always has an empty neighbour of some stone
    let best = match ranked.first() {
        Some(best) => *best,
        None if board.is_empty(CENTER) => ScoredMove { pos: CENTER, total: 0.0 },
        None => ScoredMove {
            pos: board.empty_cells().next().ok_or(GameError::BoardFull)?,
            total: 0.0,
        },
    };
    let result = MoveResult::new(best.pos, best.total, SearchType::Heuristic, candidates.len(), start);

    log::debug!(
        "{} plays {} (score {:.1}, {} candidates, {}us)",
        ai.name(),
        result.best_move,
        result.score,
        result.candidates,
        result.time_us
    );
    Ok(result)
}

/// Choose the automated side's next move.
///
/// Deterministic for a given board: the same position always yields the
/// same move. The returned cell is always empty.
///
/// # Errors
///
/// See [`choose_move_with_stats`].
pub fn choose_move(board: &Board, ai: Stone, human: Stone) -> Result<Pos, GameError> {
    choose_move_with_stats(board, ai, human).map(|result| result.best_move)
}
