use std::fmt;

use log::{debug, trace};

use super::attack_tables::bit;
use super::{BoardError, Move, MoveList, Piece, PieceId, PieceKind, Square, Team, BOARD_SIZE};

/// Where a piece in the arena currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceStatus {
    OnBoard,
    /// Taken by an opposing piece; listed by `Board::captured`
    Captured,
    /// Lifted off with `Board::remove`
    Removed,
}

#[derive(Clone, Debug)]
pub(crate) struct Slot {
    pub(crate) piece: Piece,
    pub(crate) status: PieceStatus,
}

/// The 8x8 grid and the pieces on it.
///
/// Pieces live in an arena indexed by `PieceId`; each grid cell holds at
/// most one id. Every on-board piece's position names the cell holding its
/// id, and no cell holds the id of a captured or removed piece.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) slots: Vec<Slot>,
    pub(crate) grid: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) occupied: [u64; 2], // [white, black]
    pub(crate) captured: Vec<PieceId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for team in Team::BOTH {
            let back = team.back_row();
            let pawns = team.pawn_start_row();
            for (col, &kind) in PieceKind::BACK_ROW.iter().enumerate() {
                board.insert(team, kind, Square(back, col));
                board.insert(team, PieceKind::Pawn, Square(pawns, col));
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            slots: Vec::new(),
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            occupied: [0, 0],
            captured: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Looks up the piece at (row, col).
    pub fn piece_at(&self, row: usize, col: usize) -> Result<Option<&Piece>, BoardError> {
        let square = Square(row, col).checked()?;
        Ok(self.piece_on(square))
    }

    /// Looks up the piece on `square`; `None` when empty or off the grid.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).map(|id| &self.slots[id.0].piece)
    }

    /// Id of the piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        if square.is_on_board() {
            self.grid[square.row()][square.col()]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// The piece behind `id`, wherever it is now.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).map(|slot| &slot.piece)
    }

    #[must_use]
    pub fn status(&self, id: PieceId) -> Option<PieceStatus> {
        self.slots.get(id.0).map(|slot| slot.status)
    }

    /// Places a new piece on (row, col) and hands its ownership to the board.
    pub fn place(
        &mut self,
        team: Team,
        kind: PieceKind,
        row: usize,
        col: usize,
    ) -> Result<PieceId, BoardError> {
        let square = Square(row, col).checked()?;
        if !self.is_empty(square) {
            return Err(BoardError::OccupiedCell { square });
        }
        Ok(self.insert(team, kind, square))
    }

    fn insert(&mut self, team: Team, kind: PieceKind, square: Square) -> PieceId {
        let id = PieceId(self.slots.len());
        self.slots.push(Slot {
            piece: Piece::new(id, team, kind, square),
            status: PieceStatus::OnBoard,
        });
        self.grid[square.row()][square.col()] = Some(id);
        self.occupied[team.index()] |= bit(square);
        debug!("placed {team} {kind} {id} on {square}");
        id
    }

    /// Lifts the piece off (row, col). This is not a capture.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<Piece, BoardError> {
        let square = Square(row, col).checked()?;
        let id = self
            .occupant(square)
            .ok_or(BoardError::EmptyCell { square })?;

        let slot = &mut self.slots[id.0];
        slot.status = PieceStatus::Removed;
        let piece = slot.piece;
        self.grid[square.row()][square.col()] = None;
        self.occupied[piece.team().index()] &= !bit(square);
        debug!("removed {} {} {id} from {square}", piece.team(), piece.kind());
        Ok(piece)
    }

    /// Moves the piece on `from` to `to`, capturing any opposing piece there.
    ///
    /// This is the only way a placed piece changes square. The piece
    /// validates and updates its own position first; the grid is committed
    /// only after that succeeds, so a failed call leaves the board as it was.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Move, BoardError> {
        let from = from.checked()?;
        let to = to.checked()?;
        let id = self
            .occupant(from)
            .ok_or(BoardError::EmptyCell { square: from })?;

        let mut moved = self.slots[id.0].piece;
        moved.move_to(to, self)?;

        let team = moved.team();
        let mut captured = None;
        if let Some(victim) = self.occupant(to) {
            let slot = &mut self.slots[victim.0];
            slot.status = PieceStatus::Captured;
            let taken = slot.piece;
            self.captured.push(victim);
            self.occupied[taken.team().index()] &= !bit(to);
            trace!("{} {} {victim} captured on {to}", taken.team(), taken.kind());
            captured = Some(taken.kind());
        }

        self.grid[from.row()][from.col()] = None;
        self.grid[to.row()][to.col()] = Some(id);
        self.occupied[team.index()] = (self.occupied[team.index()] & !bit(from)) | bit(to);
        self.slots[id.0].piece = moved;

        let mv = Move {
            from,
            to,
            team,
            piece: moved.kind(),
            captured,
        };
        debug!("{team} {mv}");
        debug_assert!(self.check_consistency().is_ok());
        Ok(mv)
    }

    /// Every move available to the piece on `square`.
    pub fn legal_moves_from(&self, square: Square) -> Result<MoveList, BoardError> {
        let square = square.checked()?;
        let piece = self
            .piece_on(square)
            .ok_or(BoardError::EmptyCell { square })?;
        Ok(piece.destinations(self))
    }

    /// On-board pieces, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.status == PieceStatus::OnBoard)
            .map(|(idx, slot)| (PieceId(idx), &slot.piece))
    }

    /// On-board pieces of `team`, in placement order.
    pub fn team_pieces(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces()
            .map(|(_, piece)| piece)
            .filter(move |piece| piece.team() == team)
    }

    /// Captured pieces, oldest capture first.
    pub fn captured(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().map(|id| &self.slots[id.0].piece)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        (self.occupied[0] | self.occupied[1]).count_ones() as usize
    }

    /// Grid symbols rotated half a turn, as seen from Black's side.
    #[must_use]
    pub fn flipped(&self) -> [[Option<char>; BOARD_SIZE]; BOARD_SIZE] {
        let mut view = [[None; BOARD_SIZE]; BOARD_SIZE];
        for square in Square::all() {
            view[BOARD_SIZE - 1 - square.row()][BOARD_SIZE - 1 - square.col()] =
                self.piece_on(square).map(Piece::symbol);
        }
        view
    }

    #[inline]
    pub(crate) fn occupied_by(&self, team: Team) -> u64 {
        self.occupied[team.index()]
    }

    #[inline]
    pub(crate) fn all_occupied(&self) -> u64 {
        self.occupied[0] | self.occupied[1]
    }
}

impl fmt::Display for Board {
    /// One line per row, row 0 (Black's back row) first; `.` marks an empty
    /// cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_on(Square(row, col)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
