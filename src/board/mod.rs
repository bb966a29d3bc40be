//! Chess board representation and movement rules.
//!
//! The board owns an 8x8 grid over an arena of pieces. Each piece validates
//! its own moves against a read-only view of the board; `Board::move_piece`
//! is the single entry point that changes occupancy. Turn order, check and
//! the special moves (castling, en passant, promotion) are left to callers.
//!
//! # Example
//! ```
//! use chess_board::board::{Board, PieceKind, Square, Team};
//!
//! let mut board = Board::empty();
//! board.place(Team::White, PieceKind::Pawn, 6, 4).unwrap();
//! let mv = board.move_piece(Square(6, 4), Square(4, 4)).unwrap();
//! assert_eq!(mv.to_string(), "pe2-e4");
//! ```

mod attack_tables;
mod builder;
mod consistency;
mod error;
mod movegen;
mod pieces;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::BoardError;
pub use pieces::{Piece, PieceId};
pub use state::{Board, PieceStatus};
pub use types::{Move, MoveList, PieceKind, Square, Team, BOARD_SIZE};
