//! Game rules for freestyle Gomoku
//!
//! Five or more in a row on any axis wins. There are no captures and no
//! forbidden moves.

pub mod win;

pub use win::{find_five_line, has_five_in_line};
