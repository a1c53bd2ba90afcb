pub mod alphabeta;
pub mod eval;
pub mod movegen;
pub mod scoring;
pub mod state;
pub mod threats;

pub use alphabeta::{select_move, SearchParams, SearchResult, Searcher};
pub use state::{is_checkmate, BoardState, Outcome, ThreatMap};
