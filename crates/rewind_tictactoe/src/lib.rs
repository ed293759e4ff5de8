//! Tic-tac-toe game logic with a browsable history.
//!
//! The engine keeps every board snapshot of a game and a pointer to the
//! one being shown. Moves played from an earlier snapshot discard the
//! snapshots after it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStatus, Player, Position, TimeTravelGame};
//!
//! let game = TimeTravelGame::new()
//!     .attempt_move(Position::Center)
//!     .attempt_move(Position::TopLeft);
//! assert_eq!(game.status(), GameStatus::InProgress { to_move: Player::X });
//!
//! // Go back to the start and branch: the old future is dropped.
//! let branched = game.jump_to(0)?.attempt_move(Position::BottomRight);
//! assert_eq!(branched.len(), 2);
//! # Ok::<(), rewind_tictactoe::JumpError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
mod position;
mod record;
pub mod rules;
mod status;
mod types;
pub mod view;

pub use action::Move;
pub use error::{JumpError, ReplayError};
pub use game::TimeTravelGame;
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use record::GameRecord;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, StepEntry};

/// Alias for the mark a player places.
pub type Mark = Player;
