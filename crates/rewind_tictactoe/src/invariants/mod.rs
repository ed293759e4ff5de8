//! First-class invariants for the time-travel game.
//!
//! Invariants are logical properties of a [`TimeTravelGame`] that every
//! command must preserve. They are checked after each successful move in
//! debug builds and can be tested independently.

use crate::TimeTravelGame;
use tracing::warn;

pub mod alternating_marks;
pub mod no_play_after_win;
pub mod single_cell_transitions;
pub mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use no_play_after_win::NoPlayAfterWinInvariant;
pub use single_cell_transitions::SingleCellTransitionsInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description().to_string()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StepInBoundsInvariant,
    SingleCellTransitionsInvariant,
    AlternatingMarksInvariant,
    NoPlayAfterWinInvariant,
);

/// Asserts that all history invariants hold (panics on violation in debug builds).
pub fn assert_invariants(game: &TimeTravelGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "History invariant violated");
        }
        debug_assert!(violations.is_empty(), "History invariants violated: {:?}", violations);
    }
}
