//! Uniform random move selection.

use crate::position::Position;
use crate::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Picks uniformly among the empty squares, if any remain.
#[instrument(skip(rng))]
pub(super) fn select<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}
