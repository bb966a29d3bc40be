//! Team and piece kind types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Order of the back row from column 0 to column 7
    pub const BACK_ROW: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Parse a kind from its letter (p, n, b, r, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Display symbol for a piece of this kind: lowercase for White,
    /// uppercase for Black.
    #[inline]
    #[must_use]
    pub fn symbol(self, team: Team) -> char {
        let c = self.to_char();
        match team {
            Team::White => c,
            Team::Black => c.to_ascii_uppercase(),
        }
    }

    /// Returns true for kinds that move any distance along a line
    /// (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn moves_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn moves_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// Both teams, White first
    pub const BOTH: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    /// Returns the opposing team
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Back row for this team (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }

    /// Row pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Team::White => 6,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_follow_team_case() {
        assert_eq!(PieceKind::Pawn.symbol(Team::White), 'p');
        assert_eq!(PieceKind::Pawn.symbol(Team::Black), 'P');
        assert_eq!(PieceKind::Knight.symbol(Team::Black), 'N');
        assert_eq!(PieceKind::King.symbol(Team::White), 'k');
    }

    #[test]
    fn test_from_char_accepts_both_cases() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
            assert_eq!(
                PieceKind::from_char(kind.to_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn test_slider_classification() {
        assert!(PieceKind::Queen.moves_diagonally() && PieceKind::Queen.moves_straight());
        assert!(PieceKind::Bishop.moves_diagonally() && !PieceKind::Bishop.moves_straight());
        assert!(!PieceKind::Rook.moves_diagonally() && PieceKind::Rook.moves_straight());
        assert!(!PieceKind::Knight.is_slider());
        assert!(!PieceKind::King.is_slider());
    }

    #[test]
    fn test_team_geometry() {
        assert_eq!(Team::White.opponent(), Team::Black);
        assert_eq!(Team::White.pawn_start_row(), 6);
        assert_eq!(Team::Black.pawn_start_row(), 1);
        assert_eq!(Team::White.back_row(), 7);
        assert_eq!(Team::Black.pawn_direction(), 1);
        assert_eq!(Team::Black.to_string(), "Black");
    }
}
