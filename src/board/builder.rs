//! Fluent builder for setting up positions.
//!
//! Allows creating positions piece by piece instead of placing them one call
//! at a time on a live board.
//!
//! # Example
//! ```
//! use chess_board::board::{BoardBuilder, PieceKind, Square, Team};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Team::White, PieceKind::King)
//!     .piece(Square(0, 4), Team::Black, PieceKind::King)
//!     .piece(Square(6, 0), Team::White, PieceKind::Pawn)
//!     .build()
//!     .expect("all squares are on the board");
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, BoardError, PieceKind, Square, Team};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Team, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = Self::new();
        for team in Team::BOTH {
            for (col, &kind) in PieceKind::BACK_ROW.iter().enumerate() {
                builder.pieces.push((Square(team.back_row(), col), team, kind));
            }
            for col in 0..8 {
                builder
                    .pieces
                    .push((Square(team.pawn_start_row(), col), team, PieceKind::Pawn));
            }
        }
        builder
    }

    /// Put a piece on a square, replacing any earlier entry for it.
    #[must_use]
    pub fn piece(mut self, square: Square, team: Team, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, team, kind));
        self
    }

    /// Remove any entry for a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, placing pieces in the order they were added.
    ///
    /// Fails with `OutOfBounds` if any entry names a square off the grid.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (square, team, kind) in self.pieces {
            board.place(team, kind, square.row(), square.col())?;
        }
        Ok(board)
    }
}
