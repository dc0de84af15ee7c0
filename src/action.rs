//! First-class move events and their error type.
//!
//! Moves are domain events rather than side effects: they can be
//! validated, logged, and replayed independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A single placement: a player's mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark lands.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Rejection of a move.
///
/// None of these are fatal: the engine stays in a valid playable (or
/// terminal) state whichever is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not address a board cell (expected 0-8).
    #[display("Index {} is outside the board", _0)]
    InvalidIndex(usize),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
