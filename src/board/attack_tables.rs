//! Precomputed reach tables indexed by `Square::as_index`.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub(crate) const fn bit(sq: Square) -> u64 {
    1u64 << sq.as_index()
}

pub(crate) fn pop_lsb(bb: &mut u64) -> Square {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Square::from_index(idx)
}

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut targets = [0u64; 64];
    for from in Square::all() {
        let mut mask = 0u64;
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                mask |= bit(to);
            }
        }
        targets[from.as_index()] = mask;
    }
    targets
}

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Squares strictly between two squares on a shared row, column or
/// diagonal; zero when the squares are not aligned or are adjacent.
pub(crate) static BETWEEN: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut between = Box::new([[0u64; 64]; 64]);
    for from in Square::all() {
        for &(dr, dc) in ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()) {
            let mut path = 0u64;
            let mut cur = from;
            while let Some(next) = cur.offset(dr, dc) {
                between[from.as_index()][next.as_index()] = path;
                path |= bit(next);
                cur = next;
            }
        }
    }
    between
});
