use super::super::attack_tables::{bit, pop_lsb, KNIGHT_TARGETS};
use super::super::{Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
        KNIGHT_TARGETS[from.as_index()] & bit(to) != 0
    }

    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let own_occ = self.occupied_by(knight.team());
        let mut targets = KNIGHT_TARGETS[knight.position().as_index()] & !own_occ;

        while targets != 0 {
            let to = pop_lsb(&mut targets);
            moves.push(self.create_move(knight, to));
        }
        moves
    }
}
