//! Tagged-variant wrapper over the board phases.
//!
//! The typestate structs cannot be handled uniformly or serialized as
//! one value, so this enum wraps all phases behind a single transition
//! function that switches on the current tag. Operations illegal for
//! the current phase return explicit errors instead of transitioning.

use crate::action::{Move, MoveError};
use crate::cell::Cell;
use crate::outcome::Outcome;
use crate::types::Player;
use crate::typestate::{BoardEnded, BoardInProgress, BoardStart, TakeBack, Transition};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Board in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyBoard {
    /// No moves yet.
    Start(BoardStart),
    /// Mid-game, awaiting the next player.
    InProgress(BoardInProgress),
    /// Terminal state with a defined outcome.
    Ended(BoardEnded),
}

/// Error for an operation that is illegal in the current phase.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum PhaseError {
    /// A move failed legality checks.
    #[display("Illegal move: {}", _0)]
    #[from]
    Move(MoveError),

    /// The game has already ended; no further moves are accepted.
    #[display("The game is already over")]
    GameOver,

    /// There is no move to take back at the start state.
    #[display("No move to take back")]
    NothingToTakeBack,

    /// The result is undefined while the game is still running.
    #[display("The game has not ended yet")]
    NotEnded,
}

impl std::error::Error for PhaseError {}

impl AnyBoard {
    /// Creates a board at the start state.
    pub fn new() -> Self {
        AnyBoard::Start(BoardStart::new())
    }

    /// Applies a move - the single transition function over all tags.
    ///
    /// The opening move must come from the first player; mid-game
    /// moves go through the full legality checks; moves after the end
    /// are refused outright. The borrowed board is never modified.
    #[instrument(skip(self))]
    pub fn play(&self, action: Move) -> Result<Self, PhaseError> {
        match self {
            AnyBoard::Start(board) => {
                if action.player != Player::First {
                    warn!(%action, "opening move out of turn");
                    return Err(MoveError::NotYourTurn(action.player).into());
                }
                debug!(%action, "opening move accepted");
                Ok(AnyBoard::InProgress(board.play(action.cell)))
            }
            AnyBoard::InProgress(board) => {
                let next = board.play(action).inspect_err(|error| {
                    warn!(%action, %error, "move rejected");
                })?;
                Ok(next.into())
            }
            AnyBoard::Ended(_) => {
                warn!(%action, "move after game over");
                Err(PhaseError::GameOver)
            }
        }
    }

    /// Takes the most recent move back, returning the prior board.
    ///
    /// Refused at the start state, where no prior move exists. After
    /// the game has ended only result inspection remains, so take-back
    /// is refused there as well.
    #[instrument(skip(self))]
    pub fn take_back(&self) -> Result<Self, PhaseError> {
        match self {
            AnyBoard::Start(_) => Err(PhaseError::NothingToTakeBack),
            AnyBoard::InProgress(board) => Ok(board.take_back().into()),
            AnyBoard::Ended(_) => Err(PhaseError::GameOver),
        }
    }

    /// Returns the outcome of an ended game.
    #[instrument(skip(self))]
    pub fn who_won_or_draw(&self) -> Result<Outcome, PhaseError> {
        match self {
            AnyBoard::Ended(board) => Ok(board.outcome()),
            _ => Err(PhaseError::NotEnded),
        }
    }

    /// Checks whether a cell already appears in the move sequence.
    ///
    /// Available in every phase.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        match self {
            AnyBoard::Start(board) => board.is_occupied(cell),
            AnyBoard::InProgress(board) => board.is_occupied(cell),
            AnyBoard::Ended(board) => board.is_occupied(cell),
        }
    }

    /// Returns the move sequence for any phase.
    pub fn moves(&self) -> &[Move] {
        match self {
            AnyBoard::Start(_) => &[],
            AnyBoard::InProgress(board) => board.moves(),
            AnyBoard::Ended(board) => board.moves(),
        }
    }

    /// Returns the player on turn, if the game accepts moves.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyBoard::Start(_) => Some(Player::First),
            AnyBoard::InProgress(board) => Some(board.to_move()),
            AnyBoard::Ended(_) => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyBoard::Ended(_))
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyBoard::Start(_) => "Ready to start".to_string(),
            AnyBoard::InProgress(board) => {
                format!("In progress. {} to move.", board.to_move())
            }
            AnyBoard::Ended(board) => format!("Game over. {}.", board.outcome()),
        }
    }

    /// Replays a move sequence from an empty board.
    ///
    /// Every move goes through the same legality checks as live play.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, PhaseError> {
        let mut board = AnyBoard::new();
        for action in moves {
            board = board.play(*action)?;
        }
        debug!(move_count = moves.len(), "replay complete");
        Ok(board)
    }
}

impl Default for AnyBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BoardStart> for AnyBoard {
    fn from(board: BoardStart) -> Self {
        AnyBoard::Start(board)
    }
}

impl From<BoardInProgress> for AnyBoard {
    fn from(board: BoardInProgress) -> Self {
        AnyBoard::InProgress(board)
    }
}

impl From<BoardEnded> for AnyBoard {
    fn from(board: BoardEnded) -> Self {
        AnyBoard::Ended(board)
    }
}

impl From<Transition> for AnyBoard {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::InProgress(board) => board.into(),
            Transition::Ended(board) => board.into(),
        }
    }
}

impl From<TakeBack> for AnyBoard {
    fn from(taken: TakeBack) -> Self {
        match taken {
            TakeBack::Start(board) => board.into(),
            TakeBack::InProgress(board) => board.into(),
        }
    }
}
