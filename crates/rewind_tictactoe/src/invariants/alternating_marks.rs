//! Alternating mark invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Player, TimeTravelGame};

/// Invariant: the mark placed at step `n` belongs to the player to move
/// at step `n - 1` (X on odd steps, O on even ones).
pub struct AlternatingMarksInvariant;

impl Invariant<TimeTravelGame> for AlternatingMarksInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        (1..game.history.len()).all(|step| {
            game.move_at(step)
                .is_some_and(|mov| mov.player == Player::for_step(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
