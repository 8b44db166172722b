//! Draw detection.

use super::win::check_winner;
use crate::types::{Grid, Square};
use tracing::instrument;

/// Checks if the grid is full (all 9 cells occupied).
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the grid is a draw: full with no winning triple.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
