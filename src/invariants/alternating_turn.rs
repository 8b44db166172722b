//! Alternating turn invariant: symbols strictly alternate from the
//! first player.

use super::Invariant;
use crate::types::Player;
use crate::typestate::BoardInProgress;

/// Invariant: players alternate turns.
///
/// The move sequence must open with the first player, never show the
/// same player twice in a row, and never exceed 9 moves. The player on
/// turn must be the one the sequence length implies.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardInProgress> for AlternatingTurnInvariant {
    fn holds(board: &BoardInProgress) -> bool {
        let moves = board.moves();

        if moves.len() > 9 {
            return false;
        }

        if let Some(first) = moves.first()
            && first.player != Player::First
        {
            return false;
        }

        for window in moves.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if moves.len() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        };

        board.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Symbols strictly alternate starting with the first player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::cell::Cell;
    use crate::typestate::{BoardStart, Transition};

    #[test]
    fn test_opening_move_holds() {
        let board = BoardStart::new().play(Cell::Center);
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.to_move(), Player::Second);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let board = BoardStart::new().play(Cell::TopLeft);
        let board = match board.play(Move::new(Player::Second, Cell::Center)) {
            Ok(Transition::InProgress(b)) => b,
            other => panic!("unexpected transition: {:?}", other),
        };
        let board = match board.play(Move::new(Player::First, Cell::TopRight)) {
            Ok(Transition::InProgress(b)) => b,
            other => panic!("unexpected transition: {:?}", other),
        };

        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.to_move(), Player::Second);
    }

    #[test]
    fn test_holds_after_take_back() {
        use crate::typestate::TakeBack;

        let board = BoardStart::new().play(Cell::TopLeft);
        let board = match board.play(Move::new(Player::Second, Cell::Center)) {
            Ok(Transition::InProgress(b)) => b,
            other => panic!("unexpected transition: {:?}", other),
        };

        match board.take_back() {
            TakeBack::InProgress(prior) => {
                assert!(AlternatingTurnInvariant::holds(&prior));
                assert_eq!(prior.to_move(), Player::Second);
            }
            TakeBack::Start(_) => panic!("expected in-progress state"),
        }
    }
}
