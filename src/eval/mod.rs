//! Evaluation for the greedy move selector
//!
//! Contains:
//! - Threat table mapping (run length, open ends) to a score
//! - Per-cell scoring over the four axes

pub mod heuristic;
pub mod patterns;

pub use heuristic::{scan_axis, score_position, LineScan};
pub use patterns::{line_score, PatternScore, OCCUPIED_SCORE};
