//! Phase-specific typestate structs for the board.
//!
//! Each phase is its own distinct type exposing only the operations
//! legal in that phase. A `BoardEnded` ALWAYS has an outcome, not
//! `Option<Outcome>`, and only `BoardInProgress` offers `take_back`.
//!
//! Transitions borrow the current state and return the next state as a
//! fresh value, so a rejected move leaves the caller's board untouched
//! and taking a move back reproduces the prior state exactly.

use crate::action::{Move, MoveError};
use crate::cell::Cell;
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::rules;
use crate::types::{Grid, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Start Phase
// ─────────────────────────────────────────────────────────────

/// Board with no moves yet.
///
/// The grid is always empty. The only transition is the opening move,
/// which belongs to the first player by definition and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStart {
    grid: Grid,
}

impl BoardStart {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Checks whether a cell is occupied (always false at start).
    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.grid.is_empty(cell)
    }

    /// Plays the opening move for the first player.
    ///
    /// One move cannot end the game, so this always yields an
    /// in-progress board awaiting the second player.
    #[instrument(skip(self))]
    pub fn play(&self, cell: Cell) -> BoardInProgress {
        let mut grid = self.grid.clone();
        grid.set(cell, Square::Occupied(Player::First));
        BoardInProgress {
            grid,
            moves: vec![Move::new(Player::First, cell)],
            to_move: Player::Second,
        }
    }
}

impl Default for BoardStart {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Board awaiting the next player's move.
///
/// Invariants enforced by construction:
/// - the move sequence is never empty and strictly alternates from
///   the first player;
/// - `to_move` is the opponent of the last mover;
/// - no terminal condition holds yet (terminal boards are `BoardEnded`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInProgress {
    pub(crate) grid: Grid,
    pub(crate) moves: Vec<Move>,
    pub(crate) to_move: Player,
}

impl BoardInProgress {
    /// Applies a move, returning the next state.
    ///
    /// Rejects out-of-turn and occupied-cell moves with an explicit
    /// error; the borrowed board is left unchanged either way.
    ///
    /// Contract enforcement:
    /// - preconditions checked always (`LegalMove`)
    /// - postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn play(&self, action: Move) -> Result<Transition, MoveError> {
        MoveContract::pre(self, &action)?;

        let mut board = self.clone();
        board.grid.set(action.cell, Square::Occupied(action.player));
        board.moves.push(action);

        if let Some(winner) = rules::check_winner(&board.grid) {
            return Ok(Transition::Ended(BoardEnded {
                grid: board.grid,
                moves: board.moves,
                outcome: Outcome::Winner(winner),
            }));
        }

        if rules::is_full(&board.grid) {
            return Ok(Transition::Ended(BoardEnded {
                grid: board.grid,
                moves: board.moves,
                outcome: Outcome::Draw,
            }));
        }

        board.to_move = board.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &board)?;

        Ok(Transition::InProgress(board))
    }

    /// Removes the most recent move, returning the prior state.
    ///
    /// Yields `BoardStart` when the only move is taken back. This
    /// operation is deliberately not offered on `BoardStart`.
    #[instrument(skip(self))]
    pub fn take_back(&self) -> TakeBack {
        let mut board = self.clone();
        match board.moves.pop() {
            Some(last) => {
                board.grid.set(last.cell, Square::Empty);
                if board.moves.is_empty() {
                    TakeBack::Start(BoardStart::new())
                } else {
                    board.to_move = last.player;
                    TakeBack::InProgress(board)
                }
            }
            // Unreachable by construction: in-progress boards hold at
            // least one move.
            None => TakeBack::Start(BoardStart::new()),
        }
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the move sequence.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Checks whether a cell already appears in the move sequence.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.grid.is_empty(cell)
    }

    /// Returns the cells still open for play.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::open_cells(&self.grid)
    }

    /// Constructs a board directly from parts (verification only).
    ///
    /// Bypasses normal construction so model checking can explore
    /// states the transition functions would never produce.
    #[cfg(kani)]
    pub fn from_parts(grid: Grid, moves: Vec<Move>, to_move: Player) -> Self {
        Self {
            grid,
            moves,
            to_move,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Ended Phase
// ─────────────────────────────────────────────────────────────

/// Board in a terminal state.
///
/// The outcome is ALWAYS present. No further moves are offered;
/// only result inspection remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEnded {
    grid: Grid,
    moves: Vec<Move>,
    outcome: Outcome,
}

impl BoardEnded {
    /// Returns the outcome.
    ///
    /// Never returns `Option` - the outcome is guaranteed by the type.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the move sequence.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Checks whether a cell already appears in the move sequence.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.grid.is_empty(cell)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Results
// ─────────────────────────────────────────────────────────────

/// Result of applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Game continues.
    InProgress(BoardInProgress),
    /// Terminal condition reached.
    Ended(BoardEnded),
}

/// Result of taking the most recent move back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeBack {
    /// The only move was removed; the board is empty again.
    Start(BoardStart),
    /// Moves remain; the prior player is on turn again.
    InProgress(BoardInProgress),
}
