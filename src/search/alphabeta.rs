use log::{debug, trace};
use serde::Serialize;

use crate::board::{Move, Position, Side};
use crate::error::Result;
use crate::search::eval::{evaluate, FIFTY_MOVE_LIMIT};
use crate::search::movegen::generate_moves;
use crate::search::scoring::Scoring;
use crate::search::state::BoardState;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    /// `false` runs plain minimax over the same tree.
    pub use_pruning: bool,
    pub scoring: Scoring,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 4, use_pruning: true, scoring: Scoring::default() }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: f32,
    pub nodes: u64,
}

#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
    params: SearchParams,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { nodes: 0, params }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for `side` in `position`, with a fresh no-capture clock.
    pub fn search(&mut self, position: &Position, side: Side) -> Result<SearchResult> {
        let state = BoardState::with_scoring(position.clone(), side, self.params.scoring);
        self.search_state(&state, 0)
    }

    pub fn search_state(&mut self, state: &BoardState, moves_without_capture: u32) -> Result<SearchResult> {
        self.nodes = 0;
        let depth = self.params.depth;
        let (score, bestmove) =
            self.alphabeta(state, moves_without_capture, depth, f32::NEG_INFINITY, f32::INFINITY)?;
        debug!(
            "search depth={} side={} pruning={} -> {:?} score={} nodes={}",
            depth,
            state.side_to_move(),
            self.params.use_pruning,
            bestmove.map(|m| m.to_string()),
            score,
            self.nodes
        );
        Ok(SearchResult { bestmove, score, nodes: self.nodes })
    }

    fn alphabeta(
        &mut self,
        state: &BoardState,
        clock: u32,
        depth: u32,
        mut alpha: f32,
        mut beta: f32,
    ) -> Result<(f32, Option<Move>)> {
        self.nodes += 1;
        if depth == 0 || state.is_terminal() || clock >= FIFTY_MOVE_LIMIT {
            return Ok((evaluate(state, clock), None));
        }
        let moves = generate_moves(state);
        if moves.is_empty() {
            return Ok((evaluate(state, clock), None));
        }

        let maximizing = state.side_to_move() == Side::White;
        let mut best = if maximizing { f32::NEG_INFINITY } else { f32::INFINITY };
        let mut best_move: Option<Move> = None;
        let root = depth == self.params.depth;

        for mv in moves {
            let (child, child_clock) = state.play(mv, clock)?;
            let (score, _) = self.alphabeta(&child, child_clock, depth - 1, alpha, beta)?;
            if root {
                trace!("root {} -> {}", mv, score);
            }
            let improves = if maximizing { score > best } else { score < best };
            if best_move.is_none() || improves {
                best = score;
                best_move = Some(mv);
            }
            if !self.params.use_pruning {
                continue;
            }
            // Fail-hard: cut on the child's score, not on the running best.
            if maximizing {
                alpha = alpha.max(best);
                if beta <= score {
                    break;
                }
            } else {
                beta = beta.min(best);
                if score <= alpha {
                    break;
                }
            }
        }
        Ok((best, best_move))
    }
}

/// Entry point: searches `position` for `side` with the classic profile.
pub fn select_move(position: &Position, side: Side, depth: u32) -> Result<Option<Move>> {
    let mut searcher = Searcher::new(SearchParams { depth, ..SearchParams::default() });
    Ok(searcher.search(position, side)?.bestmove)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn takes_hanging_king() {
        let pos = Position::from_pieces([
            (sq("a0"), Piece::new(PieceKind::Rook, Side::White)),
            (sq("c0"), Piece::new(PieceKind::King, Side::White)),
            (sq("a4"), Piece::new(PieceKind::King, Side::Black)),
            (sq("e4"), Piece::new(PieceKind::Queen, Side::Black)),
        ])
        .unwrap();
        let mut s = Searcher::new(SearchParams { depth: 2, ..SearchParams::default() });
        let r = s.search(&pos, Side::White).unwrap();
        assert_eq!(r.bestmove, Some(Move::new(sq("a0"), sq("a4"))));
        assert_eq!(r.score, crate::search::scoring::WIN_SCORE);
        assert!(r.nodes > 1);
    }

    #[test]
    fn depth_zero_returns_no_move() {
        let mut s = Searcher::new(SearchParams { depth: 0, ..SearchParams::default() });
        let r = s.search(&Position::startpos(), Side::White).unwrap();
        assert_eq!(r.bestmove, None);
        assert_eq!(r.nodes, 1);
    }
}
