//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They hold no state and
//! are cheap enough to run against every snapshot in a game's history.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};
