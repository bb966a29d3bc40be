//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_board::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.team_pieces(Team::White).count(), 16);
//! ```

pub use super::{Board, BoardBuilder, BoardError, Move, Piece, PieceId, PieceKind, Square, Team};
