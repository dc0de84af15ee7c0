//! Tests for the turn controller and its UI-facing surface.

use tictactoe_core::rules;
use tictactoe_core::{
    COMPUTER, Engine, GameStatus, HUMAN, HistoryConsistentInvariant, Invariant,
    MarkBalanceInvariant, MoveError, Outcome, Phase, Player, Square, Strategy,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn new_game_snapshot_is_empty_and_active() {
    init_tracing();
    let engine = Engine::new(Strategy::Optimal);
    let snapshot = engine.snapshot();
    assert!(snapshot.board.iter().all(|square| *square == Square::Empty));
    assert_eq!(snapshot.current_mark, HUMAN);
    assert!(snapshot.active);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(engine.phase(), Phase::AwaitingPlayer);
    assert_eq!(engine.strategy(), Strategy::Optimal);
}

#[test]
fn player_move_triggers_a_synchronous_reply() {
    init_tracing();
    let mut engine = Engine::new(Strategy::Optimal);
    let snapshot = engine.on_player_move(0);
    let marks = snapshot
        .board
        .iter()
        .filter(|square| **square != Square::Empty)
        .count();
    assert_eq!(marks, 2);
    assert_eq!(snapshot.current_mark, HUMAN);
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history()[0].player, HUMAN);
    assert_eq!(engine.history()[1].player, COMPUTER);
}

#[test]
fn optimal_computer_answers_a_corner_with_the_center() {
    let mut engine = Engine::new(Strategy::Optimal);
    let snapshot = engine.on_player_move(0);
    assert_eq!(snapshot.board[4], Square::Occupied(COMPUTER));
}

#[test]
fn occupied_square_is_a_no_op() {
    let mut engine = Engine::new(Strategy::Optimal);
    let after_first = engine.on_player_move(0);
    // Repeat click on the human's own square, then on the computer's.
    assert_eq!(engine.on_player_move(0), after_first);
    assert_eq!(engine.on_player_move(4), after_first);
    assert!(matches!(
        engine.try_player_move(0),
        Err(MoveError::SquareOccupied(_))
    ));
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut engine = Engine::new(Strategy::Optimal);
    let before = engine.snapshot();
    assert_eq!(engine.on_player_move(9), before);
    assert!(matches!(
        engine.try_player_move(42),
        Err(MoveError::InvalidIndex(42))
    ));
}

#[test]
fn scripted_game_against_optimal_ends_in_a_draw() {
    init_tracing();
    let mut engine = Engine::new(Strategy::Optimal);

    // Corner opening, opposite corner, then forced blocks on both sides.
    // Every computer reply is either forced or settled by the ascending
    // tie-break, so the whole line is deterministic.
    for (human, computer) in [(0, 4), (8, 1), (7, 6), (2, 5)] {
        let snapshot = engine.on_player_move(human);
        assert_eq!(snapshot.board[computer], Square::Occupied(COMPUTER));
        assert_eq!(snapshot.status, GameStatus::InProgress);
    }

    let last = engine.on_player_move(3);
    assert_eq!(last.status, GameStatus::Draw);
    assert!(!last.active);
    assert_eq!(engine.phase(), Phase::Finished(Outcome::Draw));
}

#[test]
fn optimal_computer_punishes_an_unblocked_diagonal() {
    let mut engine = Engine::new(Strategy::Optimal);
    engine.on_player_move(0); // computer takes the center
    engine.on_player_move(1); // computer blocks the top row at 2
    let snapshot = engine.on_player_move(3); // leaves the 2-4-6 diagonal open
    assert_eq!(snapshot.status, GameStatus::Won(COMPUTER));
    assert_eq!(snapshot.board[6], Square::Occupied(COMPUTER));
    assert!(!snapshot.active);
}

#[test]
fn finished_game_ignores_further_moves() {
    let mut engine = Engine::new(Strategy::Optimal);
    engine.on_player_move(0);
    engine.on_player_move(1);
    let done = engine.on_player_move(3); // computer wins on the diagonal
    assert_eq!(done.status, GameStatus::Won(COMPUTER));
    assert_eq!(engine.on_player_move(7), done);
    assert!(matches!(
        engine.try_player_move(7),
        Err(MoveError::GameOver)
    ));
}

#[test]
fn reset_restores_a_fresh_game_from_any_state() {
    let mut engine = Engine::new(Strategy::Optimal);
    engine.on_player_move(0);
    engine.on_player_move(1);
    engine.on_player_move(3); // finished: computer won
    assert!(!engine.active());

    let snapshot = engine.on_reset();
    assert!(snapshot.board.iter().all(|square| *square == Square::Empty));
    assert_eq!(snapshot.current_mark, HUMAN);
    assert!(snapshot.active);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert!(engine.history().is_empty());

    // The engine accepts moves again.
    let next = engine.on_player_move(4);
    assert_eq!(next.board[4], Square::Occupied(HUMAN));
}

#[test]
fn random_and_heuristic_play_preserves_invariants() {
    init_tracing();
    for strategy in [Strategy::Random, Strategy::Heuristic] {
        for seed in 0..10u64 {
            let mut engine = Engine::with_seed(strategy, seed);
            for index in 0..9 {
                engine.on_player_move(index);
                let board = engine.board();
                assert!(MarkBalanceInvariant::holds(board));
                assert!(
                    !(rules::has_won(board, Player::X) && rules::has_won(board, Player::O)),
                    "both marks report a win"
                );
                assert!(HistoryConsistentInvariant::holds(&engine));
            }
            // Sweeping every index always runs the game to completion.
            assert!(!engine.snapshot().active);
        }
    }
}

#[test]
fn snapshot_serializes_for_the_ui() {
    let mut engine = Engine::new(Strategy::Optimal);
    let snapshot = engine.on_player_move(4);
    let value = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(value["board"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["active"], serde_json::Value::Bool(true));
    assert_eq!(value["current_mark"], "X");
    assert_eq!(value["status"], "InProgress");
}
