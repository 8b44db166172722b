//! Kani arbitrary implementations for board types.
//!
//! These implementations allow Kani to explore all possible values of
//! our types during model checking.

#[cfg(kani)]
use crate::{BoardInProgress, Cell, Grid, Move, Player, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::First
        } else {
            Player::Second
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Cell::from_index(index).unwrap()
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Grid {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Grid::from_squares(squares)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for BoardInProgress {
    fn any() -> Self {
        let grid: Grid = kani::any();
        let to_move: Player = kani::any();

        let len: usize = kani::any();
        kani::assume(len <= 9);

        let mut moves = Vec::with_capacity(len);
        for _ in 0..len {
            moves.push(kani::any());
        }

        // Bypasses normal construction, allowing Kani to explore
        // invalid states.
        BoardInProgress::from_parts(grid, moves, to_move)
    }
}
