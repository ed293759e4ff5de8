//! Absorbing win invariant: nothing is played on top of a won board.

use super::Invariant;
use crate::TimeTravelGame;
use crate::rules::check_winner;

/// Invariant: only the newest snapshot may contain a winning line.
pub struct NoPlayAfterWinInvariant;

impl Invariant<TimeTravelGame> for NoPlayAfterWinInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let len = game.history.len();
        game.history
            .iter()
            .take(len.saturating_sub(1))
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning snapshot"
    }
}
