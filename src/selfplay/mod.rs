use crate::board::{Move, Position, Side};
use crate::error::Result;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::FIFTY_MOVE_LIMIT;
use crate::search::movegen::generate_moves;
use crate::search::scoring::Scoring;
use crate::search::state::{BoardState, Outcome};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub depth: u32,
    pub seed: u64,
    pub random_black: bool,          // Black plays uniformly random moves
    pub random_opening_plies: usize, // both sides play random moves for the first N plies
    pub scoring: Scoring,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, depth: 3, seed: 42, random_black: false, random_opening_plies: 2, scoring: Scoring::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    KingCaptured,
    Checkmate,
    BareKings,
    NoMoves,
    FiftyMoves,
    MaxPlies,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw, -1 black win
    pub termination: Termination,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// Plays `params.games` independent games in parallel. Each game owns its own
/// RNG seeded from `seed ^ index`, so output is reproducible and ordered.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    (0..params.games)
        .into_par_iter()
        .map(|gi| {
            let rec = play_game(params, gi)?;
            on_game(&rec);
            Ok(rec)
        })
        .collect()
}

pub fn play_game(params: &SelfPlayParams, index: usize) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ index as u64);
    let mut searcher = Searcher::new(SearchParams { depth: params.depth, use_pruning: true, scoring: params.scoring });
    let mut state = BoardState::with_scoring(Position::startpos(), Side::White, params.scoring);
    let mut clock = 0u32;
    let mut moves: Vec<String> = Vec::new();

    let (termination, result) = loop {
        if let Some(end) = termination(&state, clock) { break end; }
        if moves.len() >= params.max_plies { break (Termination::MaxPlies, 0); }
        let random = moves.len() < params.random_opening_plies
            || (params.random_black && state.side_to_move() == Side::Black);
        let mv = if random { select_random_move(&state, &mut rng) } else { searcher.search_state(&state, clock)?.bestmove };
        let Some(mv) = mv else { break (Termination::NoMoves, 0) };
        moves.push(mv.to_string());
        (state, clock) = state.play(mv, clock)?;
    };
    debug!("game {} ended after {} plies: {:?} result={}", index, moves.len(), termination, result);
    Ok(GameRecord { moves, result, termination })
}

fn termination(state: &BoardState, clock: u32) -> Option<(Termination, i8)> {
    match state.outcome() {
        Some(Outcome::Win(side)) => {
            let how = if state.king_captured(side.opponent()) { Termination::KingCaptured } else { Termination::Checkmate };
            let result = if side == Side::White { 1 } else { -1 };
            return Some((how, result));
        }
        Some(Outcome::Draw) => return Some((Termination::BareKings, 0)),
        None => {}
    }
    if clock >= FIFTY_MOVE_LIMIT { return Some((Termination::FiftyMoves, 0)); }
    if state.is_terminal() { return Some((Termination::NoMoves, 0)); }
    None
}

fn select_random_move(state: &BoardState, rng: &mut SmallRng) -> Option<Move> {
    generate_moves(state).choose(rng).copied()
}

pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut s = Summary::default();
    for g in games {
        match g.result {
            1 => s.white_wins += 1,
            -1 => s.black_wins += 1,
            _ => s.draws += 1,
        }
    }
    s
}

/// One JSON record per line.
pub fn write_games<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_games<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
