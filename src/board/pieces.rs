//! The piece entity and its movement contract.

use std::fmt;

use log::trace;

use super::{Board, BoardError, MoveList, PieceKind, Square, Team};

/// Stable handle to a piece in the board's arena.
///
/// Ids are handed out by `Board::place` and never reused, so an id stays
/// valid after the piece it names has been captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One chess piece: its team, kind and current square.
///
/// A piece carries the id the board gave it, so two pieces of the same team
/// and kind that end up on the same square never compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    team: Team,
    kind: PieceKind,
    position: Square,
    move_count: u32,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(id: PieceId, team: Team, kind: PieceKind, position: Square) -> Self {
        Piece {
            id,
            team,
            kind,
            position,
            move_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    /// Number of moves this piece has made
    #[inline]
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Display symbol: the kind letter, lowercase for White and uppercase
    /// for Black.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.team)
    }

    /// Returns true if this piece may move from `from` to `to` on `board`
    /// under its own movement rule.
    ///
    /// Check and pins are not considered. `from` must be the piece's own
    /// position and `board` must still hold this piece there, so captured
    /// and removed pieces have no valid moves. Both squares must be on the
    /// grid and distinct, and `to` must not hold a piece of the same team.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square, board: &Board) -> bool {
        if from != self.position || !to.is_on_board() || from == to {
            return false;
        }
        if board.occupant(from) != Some(self.id) {
            return false;
        }
        if board.piece_on(to).is_some_and(|target| target.team == self.team) {
            return false;
        }
        board.reaches(self.kind, self.team, from, to)
    }

    /// Moves this piece to `to`, updating only its own position.
    ///
    /// The grid is left untouched; `Board::move_piece` commits the
    /// occupancy change once this succeeds.
    pub fn move_to(&mut self, to: Square, board: &Board) -> Result<(), BoardError> {
        let from = self.position;
        if !self.is_valid_move(from, to, board) {
            trace!("{} {} rejected {from} -> {to}", self.team, self.kind);
            return Err(BoardError::IllegalMove { from, to });
        }
        self.position = to;
        self.move_count += 1;
        Ok(())
    }

    /// Every move this piece could make on `board` from its position
    #[must_use]
    pub fn destinations(&self, board: &Board) -> MoveList {
        board.generate_piece_moves(self)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
