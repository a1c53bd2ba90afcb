#![allow(dead_code)]

use minichess::board::{Piece, PieceKind, Position, Side, Square};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub fn position(pieces: &[(&str, PieceKind, Side)]) -> Position {
    Position::from_pieces(pieces.iter().map(|&(s, k, side)| (sq(s), Piece::new(k, side)))).expect("valid position")
}

/// Random legal-looking placement: kings always present unless `kings` is false,
/// each other single-slot piece with probability 0.6, up to three pawns per side.
pub fn random_position(seed: u64, kings: bool) -> Position {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(&mut rng);
    let mut free = squares.into_iter();
    let mut pieces = Vec::new();
    for side in Side::BOTH {
        for kind in PieceKind::ALL {
            let wanted = match kind {
                PieceKind::King => kings,
                PieceKind::Pawn => false,
                _ => rng.gen_bool(0.6),
            };
            if wanted {
                if let Some(s) = free.next() { pieces.push((s, Piece::new(kind, side))); }
            }
        }
        for _ in 0..rng.gen_range(0..=3) {
            if let Some(s) = free.next() { pieces.push((s, Piece::new(PieceKind::Pawn, side))); }
        }
    }
    Position::from_pieces(pieces).expect("distinct squares")
}
