//! Board representation for 5x5 minichess.

pub mod position;
pub mod types;

pub use position::{Board, PieceIndex, Played, Position};
pub use types::{Move, Piece, PieceKind, Side, Square, BOARD_SIZE};
