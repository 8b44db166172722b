//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and
//! postconditions, formalizing Hoare-style reasoning: {P} action {Q}.

use crate::action::{Move, MoveError};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::typestate::BoardInProgress;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying
///   the action.
/// - Postcondition: {Q(before, after)} - must hold after applying
///   the action.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the cell targeted by the move must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition for a move against a board.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &BoardInProgress) -> Result<(), MoveError> {
        if board.is_occupied(mov.cell) {
            Err(MoveError::CellOccupied(mov.cell))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition for a move against a board.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &BoardInProgress) -> Result<(), MoveError> {
        if mov.player != board.to_move() {
            Err(MoveError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal when the cell is empty and
/// the mover is on turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &BoardInProgress) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, board)?;
        PlayersTurn::check(mov, board)?;
        Ok(())
    }
}

/// Contract for move transitions.
///
/// Preconditions: cell empty, mover on turn.
/// Postconditions: turns still alternate, move sequence stays
/// consistent with the grid, no cell was overwritten.
pub struct MoveContract;

impl Contract<BoardInProgress, Move> for MoveContract {
    fn pre(board: &BoardInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(_before: &BoardInProgress, after: &BoardInProgress) -> Result<(), MoveError> {
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
