//! Turn controller: sequences human and computer moves.

use crate::action::{Move, MoveError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::strategy::Strategy;
use crate::types::{Board, GameStatus, Outcome, Player, Square};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The human mark. X always moves first.
pub const HUMAN: Player = Player::X;
/// The computer mark.
pub const COMPUTER: Player = Player::O;

/// Where the state machine sits between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to pick a square.
    AwaitingPlayer,
    /// A human move landed and the computer's reply is being resolved.
    ///
    /// The reply resolves synchronously inside the same event, so this
    /// phase is never observable between calls.
    AwaitingComputer,
    /// Terminal until the next reset.
    Finished(Outcome),
}

/// Render-ready view of the game for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: [Square; 9],
    /// Mark that moves next.
    pub current_mark: Player,
    /// False once the game has finished.
    pub active: bool,
    /// Win, draw, or still in progress.
    pub status: GameStatus,
}

/// Game engine for one human-versus-computer match.
///
/// Owns the board and turn state. The UI layer feeds it cell indices and
/// renders the snapshots it returns; it never mutates game state
/// directly. Everything is synchronous: the computer's reply lands
/// within the same call that delivered the human move.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    to_move: Player,
    phase: Phase,
    strategy: Strategy,
    history: Vec<Move>,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine with the given computer strategy.
    #[instrument]
    pub fn new(strategy: Strategy) -> Self {
        info!(?strategy, "starting new game");
        Self {
            board: Board::new(),
            to_move: HUMAN,
            phase: Phase::AwaitingPlayer,
            strategy,
            history: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a seeded RNG for reproducible play.
    #[instrument]
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new(strategy)
        }
    }

    /// Applies a human move at a raw cell index from the UI.
    ///
    /// Any rejection (occupied square, finished game, out-of-range
    /// index) is a logged no-op: stale or duplicate UI events are
    /// expected and must not disturb the game. The returned snapshot
    /// reflects whatever state resulted.
    #[instrument(skip(self))]
    pub fn on_player_move(&mut self, index: usize) -> Snapshot {
        if let Err(error) = self.try_player_move(index) {
            debug!(%error, index, "ignoring player move");
        }
        self.snapshot()
    }

    /// Applies a human move, surfacing rejections as typed errors.
    ///
    /// On success the computer's reply (if the game continues) has
    /// already been applied to the returned snapshot.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] when not awaiting a player move,
    /// [`MoveError::InvalidIndex`] for indices past 8, and
    /// [`MoveError::SquareOccupied`] for taken cells. The game state is
    /// untouched in every error case.
    #[instrument(skip(self))]
    pub fn try_player_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        if !matches!(self.phase, Phase::AwaitingPlayer) {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.board.place(pos, HUMAN)?;
        self.record(Move::new(HUMAN, pos));

        match rules::status(&self.board).outcome() {
            Some(outcome) => self.finish(outcome),
            None => {
                self.to_move = COMPUTER;
                self.phase = Phase::AwaitingComputer;
                self.computer_reply();
            }
        }
        Ok(self.snapshot())
    }

    /// Resolves the computer's reply for the current position.
    #[instrument(skip(self))]
    fn computer_reply(&mut self) {
        let Some(pos) = self
            .strategy
            .select_move(&self.board, COMPUTER, &mut self.rng)
        else {
            warn!("strategy produced no move on a non-full board");
            return;
        };
        if let Err(error) = self.board.place(pos, COMPUTER) {
            warn!(%error, "strategy selected an occupied square");
            return;
        }
        self.record(Move::new(COMPUTER, pos));

        match rules::status(&self.board).outcome() {
            Some(outcome) => self.finish(outcome),
            None => {
                self.to_move = HUMAN;
                self.phase = Phase::AwaitingPlayer;
            }
        }
    }

    /// Restarts the game from any state, including a finished one.
    #[instrument(skip(self))]
    pub fn on_reset(&mut self) -> Snapshot {
        info!("resetting game");
        self.board = Board::new();
        self.to_move = HUMAN;
        self.phase = Phase::AwaitingPlayer;
        self.history.clear();
        self.snapshot()
    }

    /// Current render-ready state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.board.squares(),
            current_mark: self.to_move,
            active: self.active(),
            status: rules::status(&self.board),
        }
    }

    /// True until the game finishes.
    pub fn active(&self) -> bool {
        !matches!(self.phase, Phase::Finished(_))
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves applied since the last reset, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The configured computer strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn record(&mut self, mov: Move) {
        debug!(%mov, board = %self.board, "mark placed");
        self.history.push(mov);
        invariants::assert_invariants(self);
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, board = %self.board, "game finished");
        self.phase = Phase::Finished(outcome);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
