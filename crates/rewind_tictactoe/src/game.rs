//! Time-travel game engine.
//!
//! A [`TimeTravelGame`] is an immutable value holding every board
//! snapshot played so far plus a pointer to the one currently shown.
//! Commands never modify the value they are called on; they return the
//! next game state instead, so a front end simply replaces its copy.

use super::action::Move;
use super::error::{JumpError, ReplayError};
use super::invariants::assert_invariants;
use super::rules::check_winner;
use super::status::GameStatus;
use super::record::GameRecord;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with a browsable history of snapshots.
///
/// Invariants:
/// - `history[0]` is the empty board and the history is never empty
/// - `step < history.len()`
/// - each snapshot differs from its predecessor in exactly one square
///
/// Snapshots are shared through [`Arc`]; a successful move is the only
/// operation that allocates a new one, so observers can detect changes
/// with [`Arc::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct TimeTravelGame {
    pub(crate) history: Vec<Arc<Board>>,
    pub(crate) step: usize,
}

impl TimeTravelGame {
    /// Creates a game whose history holds only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Arc::new(Board::new())],
            step: 0,
        }
    }

    /// Index of the snapshot currently shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots in the history (moves played + 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the empty starting board is never discarded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when the pointer sits on the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Arc<Board>] {
        &self.history
    }

    /// Shared snapshot at `step`, if it exists.
    pub fn snapshot(&self, step: usize) -> Option<&Arc<Board>> {
        self.history.get(step)
    }

    /// Board at `step`, if it exists.
    pub fn board_at(&self, step: usize) -> Option<&Board> {
        self.snapshot(step).map(Arc::as_ref)
    }

    /// Shared snapshot currently shown.
    pub fn current_snapshot(&self) -> &Arc<Board> {
        &self.history[self.step]
    }

    /// Board currently shown.
    pub fn current(&self) -> &Board {
        self.current_snapshot()
    }

    /// Player whose mark the next successful move places.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the snapshot currently shown.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current(), self.to_move())
    }

    /// Status of the snapshot at `step`, if it exists.
    pub fn status_at(&self, step: usize) -> Option<GameStatus> {
        self.board_at(step)
            .map(|board| GameStatus::of(board, Player::for_step(step)))
    }

    /// Winner of the snapshot currently shown.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Attempts to place the current player's mark at `pos`.
    ///
    /// Ignored, returning an unchanged copy, when the shown snapshot
    /// already has a winner or the square is occupied. Otherwise every
    /// snapshot after the current step is discarded, the new snapshot is
    /// appended and becomes current.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn attempt_move(&self, pos: Position) -> Self {
        let board = self.current();

        if let Some(winner) = check_winner(board) {
            debug!(%winner, "Move ignored, game already won");
            return self.clone();
        }

        if !board.is_empty(pos) {
            debug!(position = %pos, "Move ignored, square occupied");
            return self.clone();
        }

        let player = self.to_move();
        let next_board = board.with_mark(pos, player);

        let mut history = self.history[..=self.step].to_vec();
        if history.len() < self.history.len() {
            debug!(
                discarded = self.history.len() - history.len(),
                "Rewriting future snapshots"
            );
        }
        history.push(Arc::new(next_board));

        let next = Self {
            step: history.len() - 1,
            history,
        };

        match next.status() {
            GameStatus::Won(winner) => info!(%winner, step = next.step, "Game won"),
            GameStatus::Draw => info!(step = next.step, "Game drawn"),
            GameStatus::InProgress { .. } => {
                debug!(%player, position = %pos, step = next.step, "Move applied")
            }
        }

        assert_invariants(&next);
        next
    }

    /// Attempts a move by raw cell index; indices outside 0-8 are ignored.
    #[instrument(skip(self))]
    pub fn attempt_move_index(&self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(pos) => self.attempt_move(pos),
            None => {
                debug!(index, "Move ignored, cell index out of range");
                self.clone()
            }
        }
    }

    /// Shows the snapshot at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] when `step` is not in the history.
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        debug!(to = step, "Jumping");
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }

    /// Move that produced the snapshot at `step` (`None` for step 0 or out of range).
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.history.get(step - 1)?;
        let after = self.history.get(step)?;
        let position = before.diff(after).into_iter().next()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// Every move in the stored history, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.history.len())
            .filter_map(|step| self.move_at(step))
            .collect()
    }

    /// Builds a game by playing `positions` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] for the first move the engine would ignore.
    #[instrument(skip(positions), fields(count = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, ReplayError> {
        let mut game = Self::new();

        for (i, &position) in positions.iter().enumerate() {
            let ply = i + 1;
            if game.winner().is_some() {
                return Err(ReplayError::GameOver { ply, position });
            }
            if !game.current().is_empty(position) {
                return Err(ReplayError::SquareOccupied { ply, position });
            }
            game = game.attempt_move(position);
        }

        Ok(game)
    }

    /// Like [`TimeTravelGame::replay`] but from raw cell indices.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::InvalidCell`] for an index outside 0-8, or
    /// any error [`TimeTravelGame::replay`] reports.
    pub fn replay_indices(indices: &[usize]) -> Result<Self, ReplayError> {
        let positions = indices
            .iter()
            .enumerate()
            .map(|(i, &index)| {
                Position::from_index(index).ok_or(ReplayError::InvalidCell { ply: i + 1, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::replay(&positions)
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game_has_single_empty_snapshot() {
        let game = TimeTravelGame::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.current(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert!(game.is_latest());
    }

    #[test]
    fn test_move_does_not_touch_previous_value() {
        let game = TimeTravelGame::new();
        let next = game.attempt_move(Position::Center);

        assert_eq!(game.len(), 1);
        assert_eq!(next.len(), 2);
        assert!(Arc::ptr_eq(game.current_snapshot(), &next.history()[0]));
        assert_eq!(next.current().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_ignored_move_keeps_snapshot_identity() {
        let game = TimeTravelGame::new().attempt_move(Position::Center);
        let same = game.attempt_move(Position::Center);

        assert_eq!(same, game);
        assert!(Arc::ptr_eq(same.current_snapshot(), game.current_snapshot()));
    }

    #[test]
    fn test_index_out_of_range_ignored() {
        let game = TimeTravelGame::new();
        assert_eq!(game.attempt_move_index(9), game);
    }

    #[test]
    fn test_move_at_recovers_moves() {
        let game = TimeTravelGame::replay(&[Position::Center, Position::TopLeft]).unwrap();
        assert_eq!(game.move_at(0), None);
        assert_eq!(game.move_at(1), Some(Move::new(Player::X, Position::Center)));
        assert_eq!(game.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(game.move_at(3), None);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = TimeTravelGame::new();
        assert_eq!(
            game.jump_to(1),
            Err(JumpError::OutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_replay_reports_offending_ply() {
        let err = TimeTravelGame::replay(&[Position::Center, Position::Center]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::SquareOccupied {
                ply: 2,
                position: Position::Center
            }
        );

        let err = TimeTravelGame::replay_indices(&[0, 3, 1, 4, 2, 5]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::GameOver {
                ply: 6,
                position: Position::MiddleRight
            }
        );

        let err = TimeTravelGame::replay_indices(&[0, 10]).unwrap_err();
        assert_eq!(err, ReplayError::InvalidCell { ply: 2, index: 10 });
    }
}
