mod common;

use common::{position, random_position, sq};
use minichess::board::{Move, PieceKind, Position, Side};
use minichess::search::{select_move, SearchParams, Searcher};

fn search(pos: &Position, side: Side, depth: u32, use_pruning: bool) -> minichess::search::SearchResult {
    let mut s = Searcher::new(SearchParams { depth, use_pruning, ..SearchParams::default() });
    s.search(pos, side).expect("search")
}

#[test]
fn search_returns_sane_move_startpos() {
    let pos = Position::startpos();
    let res = search(&pos, Side::White, 1, true);
    let mv = res.bestmove.expect("no move found at depth 1");
    assert_eq!(pos.piece_at(mv.from).map(|p| p.side), Some(Side::White));
    assert_ne!(pos.piece_at(mv.to).map(|p| p.side), Some(Side::White));
}

#[test]
fn black_search_moves_black_piece() {
    let pos = Position::startpos();
    let mv = select_move(&pos, Side::Black, 2).unwrap().expect("black has moves");
    assert_eq!(pos.piece_at(mv.from).map(|p| p.side), Some(Side::Black));
}

#[test]
fn search_prefers_winning_queen_capture() {
    let pos = position(&[
        ("c0", PieceKind::Rook, Side::White),
        ("e0", PieceKind::King, Side::White),
        ("c3", PieceKind::Queen, Side::Black),
        ("e4", PieceKind::King, Side::Black),
    ]);
    for depth in [1, 2] {
        let res = search(&pos, Side::White, depth, true);
        assert_eq!(res.bestmove, Some(Move::new(sq("c0"), sq("c3"))), "depth {depth}");
    }
}

#[test]
fn terminal_root_returns_no_move() {
    let pos = position(&[("a4", PieceKind::King, Side::White), ("b3", PieceKind::King, Side::Black)]);
    let res = search(&pos, Side::Black, 4, true);
    assert_eq!(res.bestmove, None);
    assert_eq!(res.score, 0.0);
    assert_eq!(res.nodes, 1);
}

#[test]
fn alphabeta_matches_minimax_startpos() {
    let pos = Position::startpos();
    for side in Side::BOTH {
        for depth in 1..=3 {
            let pruned = search(&pos, side, depth, true);
            let full = search(&pos, side, depth, false);
            assert_eq!(pruned.bestmove, full.bestmove, "side {side} depth {depth}");
            assert_eq!(pruned.score, full.score, "side {side} depth {depth}");
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn alphabeta_matches_minimax_random_positions() {
    for seed in 0..25u64 {
        let pos = random_position(1000 + seed, true);
        let side = if seed % 2 == 0 { Side::White } else { Side::Black };
        let pruned = search(&pos, side, 3, true);
        let full = search(&pos, side, 3, false);
        assert_eq!(pruned.bestmove, full.bestmove, "seed {seed}");
        assert_eq!(pruned.score, full.score, "seed {seed}");
    }
}

#[test]
fn heavy_king_profile_still_finds_capture() {
    use minichess::search::scoring::Scoring;
    let pos = position(&[
        ("a0", PieceKind::Rook, Side::White),
        ("c0", PieceKind::King, Side::White),
        ("a4", PieceKind::King, Side::Black),
        ("e4", PieceKind::Queen, Side::Black),
    ]);
    let mut s = Searcher::new(SearchParams { depth: 3, use_pruning: true, scoring: Scoring::HEAVY_KING });
    let r = s.search(&pos, Side::White).unwrap();
    assert_eq!(r.bestmove, Some(Move::new(sq("a0"), sq("a4"))));
}

#[test]
fn exhausted_capture_clock_stops_search_at_root() {
    use minichess::search::eval::FIFTY_MOVE_LIMIT;
    use minichess::search::BoardState;
    let st = BoardState::new(Position::startpos(), Side::White);
    assert!(!st.is_terminal());
    let mut s = Searcher::new(SearchParams { depth: 3, ..SearchParams::default() });

    let r = s.search_state(&st, FIFTY_MOVE_LIMIT).unwrap();
    assert_eq!(r.bestmove, None);
    assert_eq!(r.score, 0.0);
    assert_eq!(r.nodes, 1);

    // One quiet move short of the limit: the root still searches, every child is a draw leaf.
    let r = s.search_state(&st, FIFTY_MOVE_LIMIT - 1).unwrap();
    assert!(r.bestmove.is_some());
    assert_eq!(r.score, 0.0);
}
