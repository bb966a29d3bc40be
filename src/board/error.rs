//! Error types for board operations.

use std::fmt;

use super::types::Square;

/// Error type for placement, lookup and move failures.
///
/// Every variant is recoverable; an operation that fails leaves the board as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { row: usize, col: usize },
    /// Move requested from an unoccupied cell
    EmptyCell { square: Square },
    /// Placement onto an already occupied cell
    OccupiedCell { square: Square },
    /// Destination violates the piece's movement rule or holds a piece of
    /// the same team
    IllegalMove { from: Square, to: Square },
    /// Invalid algebraic square notation
    InvalidSquare { notation: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) is outside the board (must be 0-7)")
            }
            BoardError::EmptyCell { square } => {
                write!(f, "No piece on {square}")
            }
            BoardError::OccupiedCell { square } => {
                write!(f, "Square {square} is already occupied")
            }
            BoardError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from} to {to}")
            }
            BoardError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for BoardError {}
