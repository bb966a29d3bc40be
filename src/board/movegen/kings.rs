use super::super::attack_tables::{bit, pop_lsb, KING_TARGETS};
use super::super::{Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
        KING_TARGETS[from.as_index()] & bit(to) != 0
    }

    pub(crate) fn generate_king_moves(&self, king: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let own_occ = self.occupied_by(king.team());
        let mut targets = KING_TARGETS[king.position().as_index()] & !own_occ;

        while targets != 0 {
            let to = pop_lsb(&mut targets);
            moves.push(self.create_move(king, to));
        }
        moves
    }
}
