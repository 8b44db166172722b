//! Tests for the tagged-variant board wrapper.

use typestate_tictactoe::{AnyBoard, Cell, Move, MoveError, Outcome, PhaseError, Player};

fn mv(player: Player, idx: usize) -> Move {
    Move::new(player, Cell::from_index(idx).expect("cell index in range"))
}

#[test]
fn test_new_board_is_start() {
    let board = AnyBoard::new();
    assert!(matches!(board, AnyBoard::Start(_)));
    assert_eq!(board.to_move(), Some(Player::First));
    assert!(board.moves().is_empty());
    assert!(!board.is_over());
}

#[test]
fn test_single_transition_function_walks_phases() {
    let board = AnyBoard::new();

    let board = board.play(mv(Player::First, 0)).expect("opening move");
    assert!(matches!(board, AnyBoard::InProgress(_)));
    assert_eq!(board.to_move(), Some(Player::Second));

    let board = board
        .play(mv(Player::Second, 4))
        .and_then(|b| b.play(mv(Player::First, 1)))
        .and_then(|b| b.play(mv(Player::Second, 5)))
        .and_then(|b| b.play(mv(Player::First, 2)))
        .expect("legal sequence");

    assert!(board.is_over());
    assert_eq!(board.to_move(), None);
    assert_eq!(
        board.who_won_or_draw().expect("game ended"),
        Outcome::Winner(Player::First)
    );
}

#[test]
fn test_opening_move_must_be_first_player() {
    let board = AnyBoard::new();
    let result = board.play(mv(Player::Second, 4));
    assert!(matches!(
        result,
        Err(PhaseError::Move(MoveError::NotYourTurn(Player::Second)))
    ));
}

#[test]
fn test_play_after_game_over_refused() {
    let board = AnyBoard::replay(&[
        mv(Player::First, 0),
        mv(Player::Second, 4),
        mv(Player::First, 1),
        mv(Player::Second, 5),
        mv(Player::First, 2),
    ])
    .expect("legal sequence");
    assert!(board.is_over());

    let result = board.play(mv(Player::Second, 8));
    assert!(matches!(result, Err(PhaseError::GameOver)));
}

#[test]
fn test_take_back_at_start_refused() {
    let board = AnyBoard::new();
    assert!(matches!(
        board.take_back(),
        Err(PhaseError::NothingToTakeBack)
    ));
}

#[test]
fn test_take_back_mid_game_returns_prior_board() {
    let board = AnyBoard::new();
    let one = board.play(mv(Player::First, 0)).expect("opening move");
    let two = one.play(mv(Player::Second, 4)).expect("second move");

    let prior = two.take_back().expect("take back mid-game");
    assert_eq!(prior, one);

    let empty = prior.take_back().expect("take back opening move");
    assert!(matches!(empty, AnyBoard::Start(_)));
}

#[test]
fn test_result_query_before_end_refused() {
    let board = AnyBoard::new();
    assert!(matches!(
        board.who_won_or_draw(),
        Err(PhaseError::NotEnded)
    ));

    let board = board.play(mv(Player::First, 0)).expect("opening move");
    assert!(matches!(
        board.who_won_or_draw(),
        Err(PhaseError::NotEnded)
    ));
}

#[test]
fn test_is_occupied_in_every_phase() {
    let board = AnyBoard::new();
    assert!(!board.is_occupied(Cell::Center));

    let board = board.play(mv(Player::First, 4)).expect("opening move");
    assert!(board.is_occupied(Cell::Center));
    assert!(!board.is_occupied(Cell::TopLeft));

    let board = board
        .play(mv(Player::Second, 1))
        .and_then(|b| b.play(mv(Player::First, 0)))
        .and_then(|b| b.play(mv(Player::Second, 2)))
        .and_then(|b| b.play(mv(Player::First, 8)))
        .expect("legal sequence");
    assert!(board.is_over(), "0-4-8 diagonal should end the game");
    assert!(board.is_occupied(Cell::BottomRight));
    assert!(!board.is_occupied(Cell::BottomLeft));
}

#[test]
fn test_replay_draw() {
    let board = AnyBoard::replay(&[
        mv(Player::First, 0),
        mv(Player::Second, 4),
        mv(Player::First, 2),
        mv(Player::Second, 1),
        mv(Player::First, 3),
        mv(Player::Second, 5),
        mv(Player::First, 7),
        mv(Player::Second, 6),
        mv(Player::First, 8),
    ])
    .expect("legal sequence");

    assert_eq!(board.who_won_or_draw().expect("game ended"), Outcome::Draw);
    assert_eq!(board.moves().len(), 9);
}

#[test]
fn test_replay_rejects_illegal_sequence() {
    let result = AnyBoard::replay(&[
        mv(Player::First, 0),
        mv(Player::Second, 0), // same cell twice
    ]);
    assert!(matches!(
        result,
        Err(PhaseError::Move(MoveError::CellOccupied(Cell::TopLeft)))
    ));
}

#[test]
fn test_status_string_per_phase() {
    let board = AnyBoard::new();
    assert_eq!(board.status_string(), "Ready to start");

    let board = board.play(mv(Player::First, 0)).expect("opening move");
    assert_eq!(board.status_string(), "In progress. player two to move.");
}

#[test]
fn test_serde_round_trip() {
    let board = AnyBoard::replay(&[
        mv(Player::First, 0),
        mv(Player::Second, 4),
        mv(Player::First, 1),
    ])
    .expect("legal sequence");

    let json = serde_json::to_string(&board).expect("serialize");
    let restored: AnyBoard = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, board);
    assert_eq!(restored.to_move(), Some(Player::Second));

    // The restored board keeps playing by the same rules.
    let result = restored.play(mv(Player::Second, 1));
    assert!(matches!(
        result,
        Err(PhaseError::Move(MoveError::CellOccupied(_)))
    ));
}
