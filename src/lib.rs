//! Pure tic-tac-toe decision engine for a human-versus-computer game.
//!
//! The crate owns the board model, win/draw rules, the computer's move
//! strategies, and the turn controller: everything a UI layer needs to
//! drive a game by delivering cell-index events and rendering the
//! snapshots it gets back. It performs no rendering and holds no
//! presentation state.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Square`]s, addressed by [`Position`]
//! - **Rules**: pure win/draw/status derivation ([`rules`])
//! - **Strategy**: three interchangeable computer policies ([`Strategy`])
//! - **Engine**: the turn state machine and UI-facing surface ([`Engine`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Engine, GameStatus, HUMAN, Strategy};
//!
//! let mut engine = Engine::new(Strategy::Optimal);
//! // Human X takes the center; the computer replies within the call.
//! let snapshot = engine.on_player_move(4);
//! assert!(snapshot.active);
//! assert_eq!(snapshot.status, GameStatus::InProgress);
//! assert_eq!(snapshot.current_mark, HUMAN);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use engine::{COMPUTER, Engine, HUMAN, Phase, Snapshot};
pub use invariants::{HistoryConsistentInvariant, Invariant, MarkBalanceInvariant};
pub use position::Position;
pub use strategy::Strategy;
pub use types::{Board, GameStatus, Outcome, Player, Square};
