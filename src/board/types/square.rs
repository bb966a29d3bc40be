//! Square type and grid geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Side length of the board grid.
pub const BOARD_SIZE: usize = 8;

/// A cell of the grid, represented as (row, col).
///
/// Row 0 is Black's back row and row 7 is White's. The fields are public so a
/// square may name a cell off the grid; `is_on_board` tells the two apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Index in 0..64, row-major (a8=0, h8=7, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from an index in 0..64
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// The square `(dr, dc)` away, if it is on the grid
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Signed (row, col) distance from `self` to `other`
    #[inline]
    #[must_use]
    pub(crate) fn delta_to(self, other: Square) -> (isize, isize) {
        (
            other.0 as isize - self.0 as isize,
            other.1 as isize - self.1 as isize,
        )
    }

    /// Bounds check that yields the board error
    pub(crate) fn checked(self) -> Result<Self, BoardError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(BoardError::OutOfBounds {
                row: self.0,
                col: self.1,
            })
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                (self.1 as u8 + b'a') as char,
                BOARD_SIZE - self.0
            )
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square(row, col).checked()
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Parse algebraic notation such as `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::InvalidSquare {
                notation: s.to_string(),
            });
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => {
                return Err(BoardError::InvalidSquare {
                    notation: s.to_string(),
                })
            }
        };
        let row = match bytes[1] {
            b'1'..=b'8' => BOARD_SIZE - (bytes[1] - b'0') as usize,
            _ => {
                return Err(BoardError::InvalidSquare {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_ranks_from_white_side() {
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(7, 7).to_string(), "h1");
        assert_eq!(Square(8, 0).to_string(), "(8, 0)");
    }

    #[test]
    fn test_parse_algebraic() {
        assert_eq!("e2".parse::<Square>(), Ok(Square(6, 4)));
        assert_eq!("a8".parse::<Square>(), Ok(Square(0, 0)));
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_grid() {
        assert_eq!(Square(0, 0).offset(1, 2), Some(Square(1, 2)));
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_bounds() {
        assert_eq!(Square::try_from((3, 4)), Ok(Square(3, 4)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(BoardError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_index_roundtrip_covers_grid() {
        assert_eq!(Square::all().count(), 64);
        assert!(Square::all().all(|sq| Square::from_index(sq.as_index()) == sq));
    }
}
