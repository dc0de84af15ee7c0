//! Computer move-selection policies.
//!
//! Three interchangeable policies behind one tagged enum, chosen at
//! engine construction: full-depth adversarial search, a one-ply
//! win-or-block heuristic, and uniform random.

mod heuristic;
mod optimal;
mod random;

use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Move-selection policy for the computer player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full-depth adversarial search. Never loses; self-play from an
    /// empty board always draws.
    #[default]
    Optimal,
    /// Complete a winning line, else block the opponent's, else play at
    /// random. One ply of lookahead only, so forks go unnoticed and the
    /// policy is beatable.
    Heuristic,
    /// Uniform choice among empty squares; the difficulty floor.
    Random,
}

impl Strategy {
    /// Picks a move for `mark` on `board`.
    ///
    /// Returns `None` only when no empty square remains. A returned
    /// position always addresses an empty square, and the board is never
    /// mutated.
    #[instrument(skip(rng))]
    pub fn select_move<R: Rng>(
        &self,
        board: &Board,
        mark: Player,
        rng: &mut R,
    ) -> Option<Position> {
        match self {
            Strategy::Optimal => optimal::select(board, mark),
            Strategy::Heuristic => heuristic::select(board, mark, rng),
            Strategy::Random => random::select(board, rng),
        }
    }
}
