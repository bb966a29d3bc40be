use super::super::attack_tables::{BETWEEN, BISHOP_DIRS, ROOK_DIRS};
use super::super::{Board, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Line check plus an empty path strictly between `from` and `to`.
    pub(crate) fn slider_reaches(&self, kind: PieceKind, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta_to(to);
        let straight = (dr == 0) != (dc == 0);
        let diagonal = dr != 0 && dr.abs() == dc.abs();

        let on_line = (kind.moves_straight() && straight) || (kind.moves_diagonally() && diagonal);
        on_line && BETWEEN[from.as_index()][to.as_index()] & self.all_occupied() == 0
    }

    pub(crate) fn generate_slider_moves(&self, slider: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let kind = slider.kind();

        let straight: &[(isize, isize)] = if kind.moves_straight() { &ROOK_DIRS } else { &[] };
        let diagonal: &[(isize, isize)] = if kind.moves_diagonally() {
            &BISHOP_DIRS
        } else {
            &[]
        };

        for &(dr, dc) in straight.iter().chain(diagonal) {
            let mut cur = slider.position();
            while let Some(next) = cur.offset(dr, dc) {
                match self.piece_on(next) {
                    None => moves.push(self.create_move(slider, next)),
                    Some(blocker) => {
                        if blocker.team() != slider.team() {
                            moves.push(self.create_move(slider, next));
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
        moves
    }
}
