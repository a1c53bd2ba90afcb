use thiserror::Error;

use crate::board::{Move, PieceKind, Side, Square};

/// Errors surfaced by board construction, move execution and I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("square ({col}, {row}) is off the 5x5 board")]
    InvalidSquare { col: char, row: i64 },
    #[error("malformed square `{0}`")]
    MalformedSquare(String),
    #[error("malformed move `{0}`")]
    MalformedMove(String),
    #[error("square {0} holds more than one piece")]
    DuplicateSquare(Square),
    #[error("{side} already has a {kind}")]
    DuplicatePiece { side: Side, kind: PieceKind },
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
    #[error("piece on {square} belongs to {owner}, not the side to move")]
    WrongSide { square: Square, owner: Side },
    #[error("move {0} lands on a friendly piece")]
    FriendlyCapture(Move),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
