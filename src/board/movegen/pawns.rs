use super::super::{Board, MoveList, Piece, Square, Team};

impl Board {
    pub(crate) fn pawn_reaches(&self, team: Team, from: Square, to: Square) -> bool {
        let dir = team.pawn_direction();
        let (dr, dc) = from.delta_to(to);

        match dc {
            0 if dr == dir => self.is_empty(to),
            0 if dr == 2 * dir && from.row() == team.pawn_start_row() => {
                from.offset(dir, 0).is_some_and(|mid| self.is_empty(mid)) && self.is_empty(to)
            }
            -1 | 1 if dr == dir => self
                .piece_on(to)
                .is_some_and(|target| target.team() != team),
            _ => false,
        }
    }

    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let team = pawn.team();
        let from = pawn.position();
        let dir = team.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(self.create_move(pawn, forward));
                if from.row() == team.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(self.create_move(pawn, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target_sq) = from.offset(dir, dc) {
                if self
                    .piece_on(target_sq)
                    .is_some_and(|target| target.team() != team)
                {
                    moves.push(self.create_move(pawn, target_sq));
                }
            }
        }

        moves
    }
}
