//! 5x5 minichess engine: threat-map move generation and alpha-beta search.
pub mod board;
pub mod error;
pub mod io;
pub mod perft;
pub mod protocol;
pub mod render;
pub mod search;
pub mod selfplay;

pub use error::{Error, Result};
pub use search::select_move;
