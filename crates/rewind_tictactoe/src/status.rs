//! Status of the position a game currently shows.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {to_move}")]
    InProgress {
        /// The mark placed by the next successful move.
        to_move: Player,
    },
    /// A winning line is on the board.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Board is full and nobody won.
    #[display("Draw: no winner")]
    Draw,
}

impl GameStatus {
    /// Evaluates a snapshot given the player whose turn it is.
    #[instrument(skip(board))]
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { to_move }
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True once no further move can be applied to this snapshot.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}
