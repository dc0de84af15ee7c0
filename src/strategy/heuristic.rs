//! One-ply win-or-block heuristic.

use super::random;
use crate::position::Position;
use crate::rules::WIN_LINES;
use crate::types::{Board, Player, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a move by strict priority: complete a winning line for `mark`,
/// block the opponent's completable line, otherwise play at random.
///
/// Lines are probed in [`WIN_LINES`] order (rows, columns, diagonals) and
/// the first hit wins.
#[instrument(skip(rng))]
pub(super) fn select<R: Rng>(board: &Board, mark: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_move(board, mark) {
        debug!(position = %pos, "completing a winning line");
        return Some(pos);
    }
    if let Some(pos) = completing_move(board, mark.opponent()) {
        debug!(position = %pos, "blocking the opponent");
        return Some(pos);
    }
    random::select(board, rng)
}

/// Finds the empty square of the first line holding two of `player`'s
/// marks and nothing else.
fn completing_move(board: &Board, player: Player) -> Option<Position> {
    for line in WIN_LINES {
        let mut empty = None;
        let mut owned = 0;
        for pos in line {
            match board.get(pos) {
                Square::Empty => empty = Some(pos),
                Square::Occupied(p) if p == player => owned += 1,
                Square::Occupied(_) => {}
            }
        }
        if owned == 2 {
            if let Some(pos) = empty {
                return Some(pos);
            }
        }
    }
    None
}
