use crate::board::Side;
use crate::search::state::{BoardState, Outcome};

pub const DRAW_SCORE: f32 = 0.0;

/// Quiet moves in a row after which a game with both kings is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Static score from White's point of view.
///
/// Decisive terminal states return `±win_score`, the no-capture rule and bare
/// kings return a draw, anything else the material (plus threat) balance.
pub fn evaluate(state: &BoardState, moves_without_capture: u32) -> f32 {
    let win = state.scoring().win_score;
    let outcome = if state.is_terminal() { state.outcome() } else { None };
    if let Some(Outcome::Win(side)) = outcome {
        return match side {
            Side::White => win,
            Side::Black => -win,
        };
    }
    let both_kings = Side::BOTH.iter().all(|&s| !state.king_captured(s));
    if moves_without_capture >= FIFTY_MOVE_LIMIT && both_kings {
        return DRAW_SCORE;
    }
    if outcome == Some(Outcome::Draw) {
        return DRAW_SCORE;
    }
    balance(state)
}

/// Material balance, plus the threat balance when the profile asks for it.
pub fn balance(state: &BoardState) -> f32 {
    if state.scoring().include_threats {
        state.material_score() + state.threat_score()
    } else {
        state.material_score()
    }
}
