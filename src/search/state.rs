use std::collections::btree_map::{self, BTreeMap};

use crate::board::{Move, PieceKind, Position, Side, Square};
use crate::error::Result;
use crate::search::scoring::Scoring;
use crate::search::threats::{piece_attacks, SquareSet, KING_OFFSETS};

/// Destination -> origins for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreatMap {
    entries: BTreeMap<Square, SquareSet>,
}

impl ThreatMap {
    pub fn insert(&mut self, dest: Square, origin: Square) {
        self.entries.entry(dest).or_default().insert(origin);
    }

    #[inline]
    pub fn contains(&self, dest: Square) -> bool {
        self.entries.contains_key(&dest)
    }

    pub fn origins(&self, dest: Square) -> Option<&SquareSet> {
        self.entries.get(&dest)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Square, SquareSet> {
        self.entries.iter()
    }

    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.entries.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True iff the king stands attacked and every on-board neighbour is attacked too.
///
/// Ignores captures of the checking piece, interpositions and whether the
/// neighbour is occupied by a friendly piece.
pub fn is_checkmate(king: Square, enemy: &ThreatMap) -> bool {
    enemy.contains(king)
        && KING_OFFSETS
            .iter()
            .filter_map(|&(dc, dr)| king.offset(dc, dr))
            .all(|sq| enemy.contains(sq))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// Read-only analysis of a position with a side to move. Never mutated; a
/// move produces a new `BoardState` built from scratch.
#[derive(Clone, Debug)]
pub struct BoardState {
    position: Position,
    side_to_move: Side,
    scoring: Scoring,
    threats: [ThreatMap; 2],
    capture_candidates: [SquareSet; 2],
    material: f32,
    threat_score: f32,
    terminal: bool,
}

impl BoardState {
    pub fn new(position: Position, side_to_move: Side) -> Self {
        Self::with_scoring(position, side_to_move, Scoring::default())
    }

    pub fn with_scoring(position: Position, side_to_move: Side, scoring: Scoring) -> Self {
        let mut threats = [ThreatMap::default(), ThreatMap::default()];
        let mut capture_candidates = [SquareSet::new(), SquareSet::new()];
        let mut material = 0.0f32;
        let mut threat_score = 0.0f32;

        let board = position.board();
        for (origin, piece) in board.iter() {
            let side = piece.side;
            material += side.sign() * scoring.material.value(piece.kind);
            for dest in piece_attacks(piece.kind, origin, board, side) {
                if let Some(target) = board.get(dest) {
                    threat_score += side.sign() * scoring.threatened.value(target.kind);
                    capture_candidates[side.index()].insert(dest);
                }
                threats[side.index()].insert(dest, origin);
            }
        }

        let mut state = Self {
            position,
            side_to_move,
            scoring,
            threats,
            capture_candidates,
            material,
            threat_score,
            terminal: false,
        };
        state.terminal = state.outcome().is_some() || state.threats(side_to_move).is_empty();
        state
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn threats(&self, side: Side) -> &ThreatMap {
        &self.threats[side.index()]
    }

    /// Enemy-occupied squares that `side` currently attacks.
    pub fn capture_candidates(&self, side: Side) -> &SquareSet {
        &self.capture_candidates[side.index()]
    }

    /// Sum of side-signed material values, positive favouring White.
    pub fn material_score(&self) -> f32 {
        self.material
    }

    pub fn threat_score(&self) -> f32 {
        self.threat_score
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn king_captured(&self, side: Side) -> bool {
        self.position.king(side).is_none()
    }

    pub fn is_checkmated(&self, side: Side) -> bool {
        match self.position.king(side) {
            Some(k) => is_checkmate(k, self.threats(side.opponent())),
            None => false,
        }
    }

    /// Only the two kings remain; nobody can ever deliver mate.
    pub fn bare_kings(&self) -> bool {
        self.position.piece_count() == 2
            && Side::BOTH.iter().all(|&s| self.position.king(s).is_some())
    }

    /// Decisive or dead-drawn result, if any. The side to move is examined first.
    pub fn outcome(&self) -> Option<Outcome> {
        let stm = self.side_to_move;
        for side in [stm, stm.opponent()] {
            if self.king_captured(side) {
                return Some(Outcome::Win(side.opponent()));
            }
        }
        for side in [stm, stm.opponent()] {
            if self.is_checkmated(side) {
                return Some(Outcome::Win(side.opponent()));
            }
        }
        if self.bare_kings() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Applies `mv` for the side to move and analyses the successor.
    /// Returns the new state and the updated no-capture clock.
    pub fn play(&self, mv: Move, moves_without_capture: u32) -> Result<(BoardState, u32)> {
        let played = self.position.play(mv, self.side_to_move)?;
        let clock = played.clock_after(moves_without_capture);
        let next = BoardState::with_scoring(played.position, self.side_to_move.opponent(), self.scoring);
        Ok((next, clock))
    }

    /// Square of an enemy piece of `kind` if `side` can capture it right now.
    pub(crate) fn capturable(&self, side: Side, kind: PieceKind) -> Option<Square> {
        self.position
            .pieces(side.opponent())
            .square_of(kind)
            .filter(|sq| self.capture_candidates(side).contains(sq))
    }
}
