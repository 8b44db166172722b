//! Win detection.

use crate::cell::Cell;
use crate::types::{Grid, Player, Square};
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Finds a completed winning triple, if any.
///
/// Returns the owning player together with the triple's cells.
#[instrument(skip(grid))]
pub fn winning_triple(grid: &Grid) -> Option<(Player, [Cell; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = grid.get(a);
        if sq != Square::Empty && sq == grid.get(b) && sq == grid.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }
    None
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` if that player holds three in a row,
/// `None` otherwise.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Player> {
    winning_triple(grid).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new();
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = Grid::new();
        grid.set(Cell::TopLeft, Square::Occupied(Player::First));
        grid.set(Cell::TopCenter, Square::Occupied(Player::First));
        grid.set(Cell::TopRight, Square::Occupied(Player::First));
        assert_eq!(check_winner(&grid), Some(Player::First));
    }

    #[test]
    fn test_winner_column() {
        let mut grid = Grid::new();
        grid.set(Cell::TopCenter, Square::Occupied(Player::Second));
        grid.set(Cell::Center, Square::Occupied(Player::Second));
        grid.set(Cell::BottomCenter, Square::Occupied(Player::Second));
        assert_eq!(check_winner(&grid), Some(Player::Second));
    }

    #[test]
    fn test_winner_diagonal_reports_triple() {
        let mut grid = Grid::new();
        grid.set(Cell::TopLeft, Square::Occupied(Player::Second));
        grid.set(Cell::Center, Square::Occupied(Player::Second));
        grid.set(Cell::BottomRight, Square::Occupied(Player::Second));

        let (player, triple) = winning_triple(&grid).expect("diagonal complete");
        assert_eq!(player, Player::Second);
        assert_eq!(triple, [Cell::TopLeft, Cell::Center, Cell::BottomRight]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut grid = Grid::new();
        grid.set(Cell::TopLeft, Square::Occupied(Player::First));
        grid.set(Cell::TopCenter, Square::Occupied(Player::First));
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut grid = Grid::new();
        grid.set(Cell::TopLeft, Square::Occupied(Player::First));
        grid.set(Cell::TopCenter, Square::Occupied(Player::Second));
        grid.set(Cell::TopRight, Square::Occupied(Player::First));
        assert_eq!(check_winner(&grid), None);
    }
}
