//! Typestate tic-tac-toe board.
//!
//! A board state machine where the game phase determines which
//! operations exist at all:
//!
//! - **`BoardStart`**: empty board; only the opening move is offered.
//! - **`BoardInProgress`**: alternating turns; moves are validated
//!   against the 8 winning triples and the 9-move draw bound, and the
//!   most recent move can be taken back.
//! - **`BoardEnded`**: terminal; only the outcome can be inspected.
//!
//! Transitions borrow the current board and return the next state as a
//! fresh value, so rejected moves leave the board untouched and every
//! prior state stays reachable.
//!
//! [`AnyBoard`] wraps the phases in a serializable tagged enum with a
//! single transition function for callers that cannot track the phase
//! in the type system; illegal operations surface as [`PhaseError`]s.
//!
//! # Example
//!
//! ```
//! use typestate_tictactoe::{BoardStart, Cell, Move, Player, Transition};
//!
//! let board = BoardStart::new().play(Cell::Center);
//! match board.play(Move::new(Player::Second, Cell::TopLeft))? {
//!     Transition::InProgress(board) => assert_eq!(board.to_move(), Player::First),
//!     Transition::Ended(_) => unreachable!("two moves cannot end the game"),
//! }
//! # Ok::<(), typestate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod contracts;
mod invariants;
mod kani_support;
mod outcome;
mod rules;
mod types;
mod typestate;
mod wrapper;

pub use action::{Move, MoveError};
pub use cell::Cell;
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn};
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicGridInvariant,
};
pub use outcome::Outcome;
pub use rules::{check_winner, is_draw, is_full, winning_triple};
pub use types::{Grid, Player, Square};
pub use typestate::{BoardEnded, BoardInProgress, BoardStart, TakeBack, Transition};
pub use wrapper::{AnyBoard, PhaseError};
