//! First-class invariants of the engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are independently testable and double as
//! documentation of what the engine guarantees; the engine asserts them
//! in debug builds after every mutation.

use crate::engine::Engine;
use crate::types::{Board, Player};

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}

/// X moves first and marks alternate, so X never trails O and never
/// leads by more than one mark.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "count(X) - count(O) is 0 or 1"
    }
}

/// Replaying the move history onto a fresh board reproduces the live
/// board, with every move landing on an empty square. Marks are never
/// overwritten or erased during real play.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut replayed = Board::new();
        for mov in engine.history() {
            if replayed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }
        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "move history replays to the live board without overwrites"
    }
}

/// Asserts every engine invariant (debug builds only).
pub(crate) fn assert_invariants(engine: &Engine) {
    debug_assert!(
        MarkBalanceInvariant::holds(engine.board()),
        "invariant violated: {}",
        MarkBalanceInvariant::description()
    );
    debug_assert!(
        HistoryConsistentInvariant::holds(engine),
        "invariant violated: {}",
        HistoryConsistentInvariant::description()
    );
}
