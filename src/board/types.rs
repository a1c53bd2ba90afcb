use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Files and ranks per side of the board.
pub const BOARD_SIZE: u8 = 5;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// +1 for White, -1 for Black. Scores are always from White's point of view.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::White => 1.0,
            Side::Black => -1.0,
        }
    }

    /// Row delta of a pawn step. White pawns climb towards row 4, Black pawns descend to row 0.
    #[inline]
    pub fn pawn_forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            other => Err(format!("invalid side `{other}`: use 'white' or 'black'")),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Non-king, non-pawn kinds, most valuable first.
    pub const VALUABLE: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// A square on the 5x5 board. Columns `a..=e` map to 0..=4, rows are 0..=4.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Builds a square from the external `(column letter, row)` convention.
    pub fn from_coords(col: char, row: i64) -> Result<Self> {
        let c = (col as u32).wrapping_sub('a' as u32);
        if c >= BOARD_SIZE as u32 || !(0..BOARD_SIZE as i64).contains(&row) {
            return Err(Error::InvalidSquare { col, row });
        }
        Ok(Self { col: c as u8, row: row as u8 })
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    fn col_char(self) -> char {
        (b'a' + self.col) as char
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    #[inline]
    pub(crate) fn from_index(idx: usize) -> Self {
        Self { col: (idx % BOARD_SIZE as usize) as u8, row: (idx / BOARD_SIZE as usize) as u8 }
    }

    /// Shift by `(dc, dr)`; `None` once the result leaves the board.
    #[inline]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let c = self.col as i8 + dc;
        let r = self.row as i8 + dr;
        if (0..BOARD_SIZE as i8).contains(&c) && (0..BOARD_SIZE as i8).contains(&r) {
            Some(Self { col: c as u8, row: r as u8 })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::MalformedSquare(s.to_string()));
        };
        let row = row.to_digit(10).ok_or_else(|| Error::MalformedSquare(s.to_string()))?;
        Square::from_coords(col, row as i64)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An (origin, destination) pair. The moving piece is whatever stands on `from`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(Error::MalformedMove(s.to_string()));
        }
        Ok(Move::new(s[0..2].parse()?, s[2..4].parse()?))
    }
}
