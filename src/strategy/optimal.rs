//! Full-depth adversarial search.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Base score of a decided game; discounted by the ply it is reached at.
const WIN_SCORE: i32 = 10;

/// Picks the move with the best full-depth minimax score for `mark`.
///
/// Terminal positions score `+10` when `mark` has won, `-10` when the
/// opponent has won, and `0` for a draw, discounted by depth so a faster
/// win (or slower loss) is preferred. Ties between equally scored moves
/// resolve to the lowest board index, so selection is deterministic.
///
/// Worst case explores every permutation of the empty squares (9! from
/// an empty board), which is trivial at this size.
#[instrument]
pub(super) fn select(board: &Board, mark: Player) -> Option<Position> {
    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::valid_moves(board) {
        scratch.set(pos, Square::Occupied(mark));
        let value = minimax(&mut scratch, mark, mark.opponent(), 0);
        scratch.clear(pos);

        if best.is_none_or(|(_, top)| value > top) {
            best = Some((pos, value));
        }
    }

    if let Some((pos, value)) = best {
        debug!(position = %pos, value, "search settled on a move");
    }
    best.map(|(pos, _)| pos)
}

/// Scores the position for `root`, with `to_move` next to play and
/// `depth` plies already explored below the candidate move.
///
/// Alternates between maximizing plies (root's turn) and minimizing
/// plies, undoing each hypothetical placement on unwind so the scratch
/// board is restored exactly.
fn minimax(board: &mut Board, root: Player, to_move: Player, depth: i32) -> i32 {
    if rules::has_won(board, root) {
        return WIN_SCORE - depth;
    }
    if rules::has_won(board, root.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::valid_moves(board) {
        board.set(pos, Square::Occupied(to_move));
        let value = minimax(board, root, to_move.opponent(), depth + 1);
        board.clear(pos);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
