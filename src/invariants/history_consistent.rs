//! History consistency invariant: the move sequence matches occupied
//! cells.

use super::Invariant;
use crate::types::Square;
use crate::typestate::BoardInProgress;

/// Invariant: move sequence length equals the number of occupied cells.
///
/// Every move corresponds to exactly one occupied cell. No moves are
/// missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardInProgress> for HistoryConsistentInvariant {
    fn holds(board: &BoardInProgress) -> bool {
        let occupied = board
            .grid()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        board.moves().len() == occupied
    }

    fn description() -> &'static str {
        "Move sequence length matches number of occupied cells"
    }
}
