//! Monotonic grid invariant: cells never change once claimed.

use super::Invariant;
use crate::types::{Grid, Square};
use crate::typestate::BoardInProgress;

/// Invariant: no cell reference appears twice in the move sequence.
///
/// Replaying the sequence from an empty grid must claim each cell at
/// most once and reproduce the current grid exactly.
pub struct MonotonicGridInvariant;

impl Invariant<BoardInProgress> for MonotonicGridInvariant {
    fn holds(board: &BoardInProgress) -> bool {
        let mut reconstructed = Grid::new();

        for mov in board.moves() {
            if reconstructed.get(mov.cell) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.cell, Square::Occupied(mov.player));
        }

        reconstructed == *board.grid()
    }

    fn description() -> &'static str {
        "No cell is claimed twice and the grid matches the move sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::cell::Cell;
    use crate::types::Player;
    use crate::typestate::{BoardStart, Transition};

    #[test]
    fn test_opening_move_holds() {
        let board = BoardStart::new().play(Cell::Center);
        assert!(MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let board = BoardStart::new().play(Cell::TopLeft);
        let board = match board.play(Move::new(Player::Second, Cell::Center)) {
            Ok(Transition::InProgress(b)) => b,
            other => panic!("unexpected transition: {:?}", other),
        };

        assert!(MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut board = BoardStart::new().play(Cell::Center);

        // Overwrite the claimed cell with the other player's mark.
        board
            .grid
            .set(Cell::Center, Square::Occupied(Player::Second));

        assert!(!MonotonicGridInvariant::holds(&board));
    }
}
