pub mod board;

pub use board::{Board, BoardError, Move, Piece, PieceKind, Square, Team};
