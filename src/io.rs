//! JSON boards and scoring profiles.
//!
//! A board is an object keyed by square text with `[kind, side]` values:
//! `{"a0": ["Rook", "White"], "e4": ["King", "Black"]}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::board::{Piece, PieceKind, Position, Side, Square};
use crate::error::Result;
use crate::search::scoring::Scoring;

type BoardJson = BTreeMap<String, (PieceKind, Side)>;

/// Parses a board object. Squares are bounds-checked before placement.
pub fn parse_board(json: &str) -> Result<Position> {
    let raw: BoardJson = serde_json::from_str(json)?;
    let mut pieces = Vec::with_capacity(raw.len());
    for (key, (kind, side)) in raw {
        let sq: Square = key.parse()?;
        pieces.push((sq, Piece::new(kind, side)));
    }
    Position::from_pieces(pieces)
}

pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Position> {
    parse_board(&fs::read_to_string(path)?)
}

pub fn board_to_json(position: &Position) -> Result<String> {
    let raw: BoardJson = position
        .board()
        .iter()
        .map(|(sq, p)| (sq.to_string(), (p.kind, p.side)))
        .collect();
    Ok(serde_json::to_string(&raw)?)
}

pub fn load_scoring<P: AsRef<Path>>(path: P) -> Result<Scoring> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}
