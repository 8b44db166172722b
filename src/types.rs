//! Core domain types for the board.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// A player's symbol.
///
/// The first player always opens the game; grid rendering shows
/// `First` as `X` and `Second` as `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Single-character mark used when rendering the grid.
    pub fn mark(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "player one"),
            Player::Second => write!(f, "player two"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

/// 3x3 grid storage, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    squares: [Square; 9],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares as an array.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Constructs a grid directly from squares (verification only).
    #[cfg(kani)]
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty cells render as their row-major index.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    Square::Occupied(player) => result.push(player.mark()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        for cell in Cell::ALL {
            assert!(grid.is_empty(cell));
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        grid.set(Cell::Center, Square::Occupied(Player::First));
        assert_eq!(grid.get(Cell::Center), Square::Occupied(Player::First));
        assert!(!grid.is_empty(Cell::Center));
        assert!(grid.is_empty(Cell::TopLeft));
    }

    #[test]
    fn test_display_shows_marks_and_indices() {
        let mut grid = Grid::new();
        grid.set(Cell::TopLeft, Square::Occupied(Player::First));
        grid.set(Cell::Center, Square::Occupied(Player::Second));
        let rendered = grid.display();
        assert!(rendered.starts_with("X|1|2"));
        assert!(rendered.contains("3|O|5"));
    }
}
