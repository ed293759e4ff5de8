//! Compact serializable form of a game.
//!
//! Snapshots are derived data: a game is fully described by the moves in
//! its history and the step being shown. Deserializing replays the moves,
//! so a record that could not come from real play is rejected.

use super::error::ReplayError;
use super::game::TimeTravelGame;
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Moves of a game's history plus the step pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct GameRecord {
    /// Positions played, oldest first.
    pub moves: Vec<Position>,
    /// Step currently shown (0 is the empty board).
    pub step: usize,
}

impl From<&TimeTravelGame> for GameRecord {
    fn from(game: &TimeTravelGame) -> Self {
        Self {
            moves: game.moves().iter().map(|m| m.position).collect(),
            step: game.step(),
        }
    }
}

impl From<TimeTravelGame> for GameRecord {
    fn from(game: TimeTravelGame) -> Self {
        Self::from(&game)
    }
}

impl TryFrom<GameRecord> for TimeTravelGame {
    type Error = ReplayError;

    #[instrument(skip(record), fields(moves = record.moves.len(), step = record.step))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Ok(TimeTravelGame::replay(&record.moves)?.jump_to(record.step)?)
    }
}
