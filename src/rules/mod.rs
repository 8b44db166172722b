//! Game rules for the board.
//!
//! Pure functions for evaluating grid state. Rules are separated from
//! grid storage so they compose into contracts and invariants.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_triple};
