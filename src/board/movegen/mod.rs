mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveList, Piece, PieceKind, Square, Team};

impl Board {
    /// Dispatches the movement rule for `kind`.
    ///
    /// Callers have already checked bounds, `from != to` and that `to` does
    /// not hold a piece of `team`.
    pub(crate) fn reaches(&self, kind: PieceKind, team: Team, from: Square, to: Square) -> bool {
        match kind {
            PieceKind::Pawn => self.pawn_reaches(team, from, to),
            PieceKind::Knight => Board::knight_reaches(from, to),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_reaches(kind, from, to)
            }
            PieceKind::King => Board::king_reaches(from, to),
        }
    }

    /// Moves for `piece` from its position; empty unless the board still
    /// holds it there.
    pub(crate) fn generate_piece_moves(&self, piece: &Piece) -> MoveList {
        if self.occupant(piece.position()) != Some(piece.id()) {
            return MoveList::new();
        }
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(piece),
            PieceKind::Knight => self.generate_knight_moves(piece),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_slider_moves(piece)
            }
            PieceKind::King => self.generate_king_moves(piece),
        }
    }

    fn create_move(&self, piece: &Piece, to: Square) -> Move {
        Move {
            from: piece.position(),
            to,
            team: piece.team(),
            piece: piece.kind(),
            captured: self.piece_on(to).map(Piece::kind),
        }
    }

    /// Every move available to `team`, ignoring check.
    #[must_use]
    pub fn team_moves(&self, team: Team) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.team_pieces(team) {
            moves.extend(self.generate_piece_moves(piece).iter().copied());
        }
        moves
    }
}
