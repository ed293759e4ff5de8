//! Error types for the game engine.
//!
//! Rejected moves are not errors: the engine ignores them. Only requests
//! that name something outside the game (a step past the end of history,
//! a replayed move that could never have been played) are reported.

use super::Position;

/// Error returned when jumping to a step that is not in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Requested step is past the end of the history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Error returned when a recorded move sequence cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The square was already occupied when the move was replayed.
    #[display("Move {ply} at {position} targets an occupied square")]
    SquareOccupied {
        /// One-based move number.
        ply: usize,
        /// Target position.
        position: Position,
    },
    /// The game was already won before the move was replayed.
    #[display("Move {ply} at {position} comes after the game was won")]
    GameOver {
        /// One-based move number.
        ply: usize,
        /// Target position.
        position: Position,
    },
    /// A raw cell index was outside 0-8.
    #[display("Move {ply} names cell {index}, expected 0-8")]
    InvalidCell {
        /// One-based move number.
        ply: usize,
        /// Raw index supplied.
        index: usize,
    },
    /// Recorded step pointer does not fit the replayed history.
    #[display("{_0}")]
    Jump(JumpError),
}

impl From<JumpError> for ReplayError {
    fn from(err: JumpError) -> Self {
        ReplayError::Jump(err)
    }
}
