mod common;

use common::random_position;
use minichess::board::{Position, Side};
use minichess::perft::{divide, perft};
use minichess::search::movegen::generate_moves;
use minichess::search::BoardState;

fn start(side: Side) -> BoardState {
    BoardState::new(Position::startpos(), side)
}

#[test]
fn startpos_depth_one_matches_generator() {
    let st = start(Side::White);
    assert_eq!(perft(&st, 0).unwrap(), 1);
    assert_eq!(perft(&st, 1).unwrap(), 7);
    assert_eq!(perft(&st, 1).unwrap() as usize, generate_moves(&st).len());
}

#[test]
fn startpos_depth_two() {
    assert_eq!(perft(&start(Side::White), 2).unwrap(), 53);
}

#[test]
fn divide_sums_to_perft() {
    for seed in 0..10u64 {
        let st = BoardState::new(random_position(500 + seed, true), Side::White);
        let total: u64 = divide(&st, 2).unwrap().iter().map(|(_, n)| n).sum();
        if st.is_terminal() {
            assert_eq!(total, 0);
            assert_eq!(perft(&st, 2).unwrap(), 1);
        } else {
            assert_eq!(total, perft(&st, 2).unwrap(), "seed {seed}");
        }
    }
}

#[test]
fn terminal_state_is_single_leaf() {
    let pos = Position::from_pieces(
        Position::startpos().board().iter().filter(|(_, p)| p.kind == minichess::board::PieceKind::King),
    )
    .unwrap();
    let st = BoardState::new(pos, Side::White);
    assert!(st.is_terminal());
    assert_eq!(perft(&st, 3).unwrap(), 1);
}
