//! Step pointer invariant: the pointer always names a stored snapshot.

use super::Invariant;
use crate::TimeTravelGame;

/// Invariant: `0 <= step < history.len()` and the history is non-empty.
pub struct StepInBoundsInvariant;

impl Invariant<TimeTravelGame> for StepInBoundsInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        !game.history.is_empty() && game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Step pointer indexes an existing snapshot"
    }
}
