use std::collections::HashSet;

use crate::board::{Move, PieceKind, Square};
use crate::search::state::BoardState;
use crate::search::threats::KING_OFFSETS;

/// Ordered, deduplicated moves for the side to move:
/// king attacks first, then captures by victim value, then everything else.
pub fn generate_moves(state: &BoardState) -> Vec<Move> {
    let side = state.side_to_move();
    let ours = state.threats(side);
    let mut out = MoveList::default();

    // Phase 1: the enemy king's square and its neighbourhood.
    if let Some(king) = state.position().king(side.opponent()) {
        let ring = std::iter::once(king).chain(KING_OFFSETS.iter().filter_map(|&(dc, dr)| king.offset(dc, dr)));
        for dest in ring {
            out.expand(state, dest);
        }
    }

    // Phase 2: captures, most valuable victim first, pawns last.
    for kind in PieceKind::VALUABLE {
        if let Some(dest) = state.capturable(side, kind) {
            out.expand(state, dest);
        }
    }
    for &pawn in &state.position().pieces(side.opponent()).pawns {
        if state.capture_candidates(side).contains(&pawn) {
            out.expand(state, pawn);
        }
    }

    // Phase 3: everything the threat map still holds.
    for dest in ours.destinations() {
        out.expand(state, dest);
    }
    out.moves
}

#[derive(Default)]
struct MoveList {
    moves: Vec<Move>,
    seen: HashSet<Move>,
}

impl MoveList {
    fn expand(&mut self, state: &BoardState, dest: Square) {
        let Some(origins) = state.threats(state.side_to_move()).origins(dest) else {
            return;
        };
        for &from in origins {
            let mv = Move::new(from, dest);
            if self.seen.insert(mv) {
                self.moves.push(mv);
            }
        }
    }
}
