use crate::error::Result;
use crate::search::movegen::generate_moves;
use crate::search::state::BoardState;

// Counts leaves of the generated-move tree. Terminal states are leaves.
pub fn perft(state: &BoardState, depth: u32) -> Result<u64> {
    if depth == 0 || state.is_terminal() { return Ok(1); }
    let mut nodes = 0u64;
    for m in generate_moves(state) {
        let (child, _) = state.play(m, 0)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Per-root-move breakdown, in generator order.
pub fn divide(state: &BoardState, depth: u32) -> Result<Vec<(String, u64)>> {
    let mut out = Vec::new();
    if depth == 0 || state.is_terminal() { return Ok(out); }
    for m in generate_moves(state) {
        let (child, _) = state.play(m, 0)?;
        out.push((m.to_string(), perft(&child, depth - 1)?));
    }
    Ok(out)
}
