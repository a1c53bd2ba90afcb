//! Per-piece attack sets.
//!
//! A piece "threatens" every square it could move to: empty squares it can
//! reach and squares holding an enemy piece. Friendly pieces stop sliding rays
//! without being included. Pawns are the exception: they capture diagonally
//! forward and only advance straight onto empty squares.

use std::collections::BTreeSet;

use crate::board::{Board, PieceKind, Side, Square};

pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// (column, row) deltas. Shared with the checkmate test and move ordering.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (-2, 1),
    (1, 2),
    (-1, 2),
    (2, -1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

pub type SquareSet = BTreeSet<Square>;

/// Union of the attack sets of a `kind` piece standing on each of `origins`.
pub fn attacks_from(kind: PieceKind, origins: &[Square], board: &Board, side: Side) -> SquareSet {
    let mut out = SquareSet::new();
    for &origin in origins {
        out.extend(piece_attacks(kind, origin, board, side));
    }
    out
}

/// Attack set of a single piece.
pub fn piece_attacks(kind: PieceKind, origin: Square, board: &Board, side: Side) -> SquareSet {
    match kind {
        PieceKind::Rook => slide(origin, &ROOK_RAYS, board, side),
        PieceKind::Bishop => slide(origin, &BISHOP_RAYS, board, side),
        PieceKind::Queen => {
            let mut set = slide(origin, &ROOK_RAYS, board, side);
            set.extend(slide(origin, &BISHOP_RAYS, board, side));
            set
        }
        PieceKind::King => leap(origin, &KING_OFFSETS, board, side),
        PieceKind::Knight => leap(origin, &KNIGHT_OFFSETS, board, side),
        PieceKind::Pawn => pawn(origin, board, side),
    }
}

fn slide(origin: Square, rays: &[(i8, i8)], board: &Board, side: Side) -> SquareSet {
    let mut set = SquareSet::new();
    for &(dc, dr) in rays {
        let mut cur = origin;
        while let Some(next) = cur.offset(dc, dr) {
            match board.get(next) {
                None => {
                    set.insert(next);
                    cur = next;
                }
                Some(p) => {
                    if p.side != side {
                        set.insert(next);
                    }
                    break;
                }
            }
        }
    }
    set
}

fn leap(origin: Square, offsets: &[(i8, i8)], board: &Board, side: Side) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dc, dr)| origin.offset(dc, dr))
        .filter(|&sq| board.is_targetable(sq, side))
        .collect()
}

fn pawn(origin: Square, board: &Board, side: Side) -> SquareSet {
    let fwd = side.pawn_forward();
    let mut set = SquareSet::new();
    for dc in [-1, 1] {
        if let Some(sq) = origin.offset(dc, fwd) {
            if board.get(sq).is_some_and(|p| p.side != side) {
                set.insert(sq);
            }
        }
    }
    if let Some(sq) = origin.offset(0, fwd) {
        if board.is_empty_at(sq) {
            set.insert(sq);
        }
    }
    set
}
