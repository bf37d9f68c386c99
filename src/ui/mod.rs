//! GUI module for the Gomoku game
//!
//! A native egui/eframe front end over [`crate::engine`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use board_view::coordinate_label;
pub use game_state::{GameMode, GameResult, GameState};
