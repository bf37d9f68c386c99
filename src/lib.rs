//! Freestyle Gomoku with a greedy AI opponent
//!
//! A small Gomoku engine and desktop game:
//! - 15x15 board
//! - 5 or more in a row wins, on any of the four axes
//! - No captures and no forbidden moves
//! - One-ply AI: take a win, block a loss, otherwise play the best
//!   `offense + 1.1 * defense` cell
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Threat table and per-cell scoring
//! - [`search`]: Candidate generation
//! - [`engine`]: The greedy move selector
//! - [`config`]: TOML application settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{choose_move, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! let pos = choose_move(&board, Stone::White, Stone::Black).unwrap();
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at {pos}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use config::AppConfig;
pub use engine::{choose_move, choose_move_with_stats, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use eval::score_position;
pub use rules::has_five_in_line;
