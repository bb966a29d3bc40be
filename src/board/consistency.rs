use super::attack_tables::bit;
use super::state::PieceStatus;
use super::{Board, Square};

impl Board {
    /// Checks that the grid, the arena and the occupancy masks agree.
    ///
    /// Returns a description of the first disagreement found.
    pub fn check_consistency(&self) -> Result<(), String> {
        let mut seen = 0u64;
        for square in Square::all() {
            let Some(id) = self.grid[square.row()][square.col()] else {
                continue;
            };
            let Some(slot) = self.slots.get(id.0) else {
                return Err(format!("{square} holds unknown piece {id}"));
            };
            if slot.status != PieceStatus::OnBoard {
                return Err(format!("{square} holds {:?} piece {id}", slot.status));
            }
            if slot.piece.position() != square {
                return Err(format!(
                    "piece {id} on {square} believes it is on {}",
                    slot.piece.position()
                ));
            }
            if self.occupied_by(slot.piece.team()) & bit(square) == 0 {
                return Err(format!("{square} missing from {} mask", slot.piece.team()));
            }
            seen |= bit(square);
        }

        if self.all_occupied() != seen || self.occupied[0] & self.occupied[1] != 0 {
            return Err(format!(
                "occupancy masks {:#018x}/{:#018x} disagree with grid {seen:#018x}",
                self.occupied[0], self.occupied[1]
            ));
        }

        let on_board = self
            .slots
            .iter()
            .filter(|slot| slot.status == PieceStatus::OnBoard)
            .count();
        if on_board != seen.count_ones() as usize {
            return Err(format!(
                "{on_board} pieces marked on board but {} cells occupied",
                seen.count_ones()
            ));
        }

        for id in &self.captured {
            if self.slots[id.0].status != PieceStatus::Captured {
                return Err(format!("captured list holds live piece {id}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Team};

    #[test]
    fn test_fresh_boards_are_consistent() {
        assert_eq!(Board::empty().check_consistency(), Ok(()));
        assert_eq!(Board::new().check_consistency(), Ok(()));
    }

    #[test]
    fn test_detects_ghost_position() {
        let mut board = Board::empty();
        let id = board.place(Team::White, PieceKind::Rook, 7, 0).unwrap();
        board.slots[id.0].piece = Piece::new(id, Team::White, PieceKind::Rook, Square(5, 0));
        assert!(board.check_consistency().is_err());
    }

    #[test]
    fn test_detects_stale_mask() {
        let mut board = Board::empty();
        board.place(Team::Black, PieceKind::King, 0, 4).unwrap();
        board.occupied[1] = 0;
        assert!(board.check_consistency().is_err());
    }
}
