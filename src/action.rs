//! First-class move values for the board.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use crate::cell::Cell;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark on a cell.
///
/// Moves are first-class values that can be validated before
/// application, serialized for replay, and reasoned about by contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player claims.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.cell)
    }
}

/// Error raised when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// It is not this player's turn.
    #[display("It is not {}'s turn", _0)]
    NotYourTurn(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
