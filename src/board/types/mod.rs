//! Core chess types.
//!
//! This module contains the value types shared by the board and its rules:
//! - `Team` and `PieceKind` - sides and piece kinds
//! - `Square` - a (row, col) cell of the grid
//! - `Move` and `MoveList` - move records

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{PieceKind, Team};
pub use square::{Square, BOARD_SIZE};
