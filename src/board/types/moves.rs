//! Move record and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{PieceKind, Team};
use super::square::Square;

/// A move made (or available) on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub team: Team,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.piece.symbol(self.team),
            self.from,
            sep,
            self.to
        )
    }
}

/// Upper bound on destinations of a single piece (a centred queen has 27).
pub(crate) const MAX_MOVES: usize = 32;

pub(crate) const EMPTY_MOVE: Move = Move {
    from: Square(0, 0),
    to: Square(0, 0),
    team: Team::White,
    piece: PieceKind::Pawn,
    captured: None,
};

/// Fixed-size list of moves for one piece, avoiding heap allocation.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// True if some move in the list lands on `to`
    #[must_use]
    pub fn contains_target(&self, to: Square) -> bool {
        self.iter().any(|m| m.to == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(to: Square) -> Move {
        Move {
            from: Square(6, 4),
            to,
            team: Team::White,
            piece: PieceKind::Pawn,
            captured: None,
        }
    }

    #[test]
    fn test_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(quiet(Square(5, 4)));
        list.push(quiet(Square(4, 4)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].to, Square(4, 4));
        assert!(list.contains_target(Square(5, 4)));
        assert!(!list.contains_target(Square(3, 4)));
    }

    #[test]
    fn test_display_marks_captures() {
        let mut mv = quiet(Square(4, 4));
        assert_eq!(mv.to_string(), "pe2-e4");
        mv.captured = Some(PieceKind::Knight);
        mv.team = Team::Black;
        assert_eq!(mv.to_string(), "Pe2xe4");
    }
}
