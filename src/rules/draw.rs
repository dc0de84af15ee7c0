//! Draw detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// True when the board is full and no line is complete.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
