use crate::board::types::{Move, Piece, PieceKind, Side, Square, BOARD_SIZE};
use crate::error::{Error, Result};

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Square -> piece placement. At most one piece per square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; CELLS] }
    }
}

impl Board {
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Empty or holding a piece of the other side, relative to an attacker of `side`.
    #[inline]
    pub fn is_targetable(&self, sq: Square, side: Side) -> bool {
        match self.get(sq) {
            None => true,
            Some(p) => p.side != side,
        }
    }

    /// Occupied pieces in square-index order (a0, b0, ..., e4).
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|p| (Square::from_index(i), p)))
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }
}

/// Where one side's pieces stand. Non-pawn kinds occupy a single slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceIndex {
    pub king: Option<Square>,
    pub queen: Option<Square>,
    pub rook: Option<Square>,
    pub bishop: Option<Square>,
    pub knight: Option<Square>,
    pub pawns: Vec<Square>,
}

impl PieceIndex {
    /// Square of a single-slot piece. Always `None` for pawns; use `pawns` instead.
    pub fn square_of(&self, kind: PieceKind) -> Option<Square> {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => None,
        }
    }

    fn slot_mut(&mut self, kind: PieceKind) -> Option<&mut Option<Square>> {
        match kind {
            PieceKind::King => Some(&mut self.king),
            PieceKind::Queen => Some(&mut self.queen),
            PieceKind::Rook => Some(&mut self.rook),
            PieceKind::Bishop => Some(&mut self.bishop),
            PieceKind::Knight => Some(&mut self.knight),
            PieceKind::Pawn => None,
        }
    }

    fn insert(&mut self, kind: PieceKind, sq: Square, side: Side) -> Result<()> {
        match self.slot_mut(kind) {
            Some(slot) if slot.is_some() => Err(Error::DuplicatePiece { side, kind }),
            Some(slot) => {
                *slot = Some(sq);
                Ok(())
            }
            None => {
                self.pawns.push(sq);
                Ok(())
            }
        }
    }

    fn remove(&mut self, kind: PieceKind, sq: Square) {
        match self.slot_mut(kind) {
            Some(slot) => *slot = None,
            None => self.pawns.retain(|&p| p != sq),
        }
    }

    fn relocate(&mut self, kind: PieceKind, from: Square, to: Square) {
        match self.slot_mut(kind) {
            Some(slot) => *slot = Some(to),
            None => {
                self.pawns.retain(|&p| p != from);
                self.pawns.push(to);
            }
        }
    }
}

/// Immutable snapshot of a minichess position: placement plus per-side indices.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Position {
    board: Board,
    index: [PieceIndex; 2],
}

/// Result of executing a move: the successor position and what it captured.
#[derive(Clone, Debug)]
pub struct Played {
    pub position: Position,
    pub captured: Option<Piece>,
}

impl Played {
    /// Quiet moves advance the no-capture clock, captures reset it.
    pub fn clock_after(&self, moves_without_capture: u32) -> u32 {
        if self.captured.is_some() { 0 } else { moves_without_capture + 1 }
    }
}

const BACK_RANK: [PieceKind; 5] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    /// White on rows 0-1, Black on rows 3-4, kings on the e-file.
    pub fn startpos() -> Self {
        let mut pos = Self::empty();
        for (side, back, front) in [(Side::White, 0u8, 1u8), (Side::Black, 4, 3)] {
            for col in 0..BOARD_SIZE {
                let (Some(b), Some(f)) = (Square::new(col, back), Square::new(col, front)) else {
                    continue;
                };
                pos.place(b, Piece::new(BACK_RANK[col as usize], side));
                pos.place(f, Piece::new(PieceKind::Pawn, side));
            }
        }
        pos
    }

    fn place(&mut self, sq: Square, piece: Piece) {
        self.board.put(sq, piece);
        let index = &mut self.index[piece.side.index()];
        match index.slot_mut(piece.kind) {
            Some(slot) => *slot = Some(sq),
            None => index.pawns.push(sq),
        }
    }

    /// Builds a position, rejecting doubled squares and duplicate single-slot pieces.
    pub fn from_pieces<I>(pieces: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut pos = Self::empty();
        for (sq, piece) in pieces {
            if !pos.board.is_empty_at(sq) {
                return Err(Error::DuplicateSquare(sq));
            }
            pos.index[piece.side.index()].insert(piece.kind, sq, piece.side)?;
            pos.board.put(sq, piece);
        }
        Ok(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn pieces(&self, side: Side) -> &PieceIndex {
        &self.index[side.index()]
    }

    pub fn king(&self, side: Side) -> Option<Square> {
        self.index[side.index()].king
    }

    pub fn piece_count(&self) -> usize {
        self.board.occupied()
    }

    /// Executes `mv` for `side`, returning a new position. `self` is left untouched.
    pub fn play(&self, mv: Move, side: Side) -> Result<Played> {
        let mover = self.board.get(mv.from).ok_or(Error::EmptyOrigin(mv.from))?;
        if mover.side != side {
            return Err(Error::WrongSide { square: mv.from, owner: mover.side });
        }
        let target = self.board.get(mv.to);
        if target.is_some_and(|t| t.side == side) || mv.from == mv.to {
            return Err(Error::FriendlyCapture(mv));
        }

        let mut next = self.clone();
        if let Some(captured) = target {
            next.index[captured.side.index()].remove(captured.kind, mv.to);
        }
        next.index[side.index()].relocate(mover.kind, mv.from, mv.to);
        next.board.take(mv.from);
        next.board.put(mv.to, mover);
        Ok(Played { position: next, captured: target })
    }

    /// Plays a sequence of text moves with alternating sides, starting with `first`.
    /// Returns the resulting position, the side to move after the sequence and
    /// the no-capture clock, counted from zero.
    pub fn play_moves<S: AsRef<str>>(&self, moves: &[S], first: Side) -> Result<(Self, Side, u32)> {
        let mut pos = self.clone();
        let mut side = first;
        let mut clock = 0;
        for m in moves {
            let mv: Move = m.as_ref().parse()?;
            let played = pos.play(mv, side)?;
            clock = played.clock_after(clock);
            pos = played.position;
            side = side.opponent();
        }
        Ok((pos, side, clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn startpos_layout() {
        let p = Position::startpos();
        assert_eq!(p.piece_count(), 20);
        assert_eq!(p.king(Side::White), Some(sq("e0")));
        assert_eq!(p.king(Side::Black), Some(sq("e4")));
        assert_eq!(p.piece_at(sq("a0")), Some(Piece::new(PieceKind::Rook, Side::White)));
        assert_eq!(p.piece_at(sq("b4")), Some(Piece::new(PieceKind::Knight, Side::Black)));
        assert_eq!(p.piece_at(sq("d4")), Some(Piece::new(PieceKind::Queen, Side::Black)));
        assert_eq!(p.pieces(Side::Black).pawns.len(), 5);
    }

    #[test]
    fn play_updates_indices_without_touching_parent() {
        let p = Position::startpos();
        let played = p.play(Move::new(sq("a1"), sq("a2")), Side::White).unwrap();
        assert!(played.captured.is_none());
        assert_eq!(played.clock_after(3), 4);
        assert!(played.position.pieces(Side::White).pawns.contains(&sq("a2")));
        assert!(!played.position.pieces(Side::White).pawns.contains(&sq("a1")));
        assert!(p.piece_at(sq("a1")).is_some());
        assert!(p.piece_at(sq("a2")).is_none());
    }

    #[test]
    fn play_moves_threads_the_clock() {
        let p = Position::startpos();
        let (_, side, clock) = p.play_moves(&["b0c2", "b4a2", "c2b0"], Side::White).unwrap();
        assert_eq!((side, clock), (Side::Black, 3));
        let (pos, side, clock) = p.play_moves(&["a1a2", "b3a2", "b0c2"], Side::White).unwrap();
        assert_eq!((side, clock), (Side::Black, 1));
        assert_eq!(pos.piece_count(), 19);
    }

    #[test]
    fn capture_removes_from_opponent_index() {
        let p = Position::from_pieces([
            (sq("c2"), Piece::new(PieceKind::Rook, Side::White)),
            (sq("c4"), Piece::new(PieceKind::Queen, Side::Black)),
        ])
        .unwrap();
        let played = p.play(Move::new(sq("c2"), sq("c4")), Side::White).unwrap();
        assert_eq!(played.captured, Some(Piece::new(PieceKind::Queen, Side::Black)));
        assert_eq!(played.clock_after(7), 0);
        assert_eq!(played.position.pieces(Side::Black).queen, None);
        assert_eq!(played.position.pieces(Side::White).rook, Some(sq("c4")));
    }

    #[test]
    fn contract_violations_are_errors() {
        let p = Position::startpos();
        assert!(matches!(p.play(Move::new(sq("c2"), sq("c3")), Side::White), Err(Error::EmptyOrigin(_))));
        assert!(matches!(p.play(Move::new(sq("a3"), sq("a2")), Side::White), Err(Error::WrongSide { .. })));
        assert!(matches!(p.play(Move::new(sq("a0"), sq("a1")), Side::White), Err(Error::FriendlyCapture(_))));
    }

    #[test]
    fn duplicate_pieces_rejected() {
        let err = Position::from_pieces([
            (sq("a0"), Piece::new(PieceKind::Queen, Side::White)),
            (sq("b0"), Piece::new(PieceKind::Queen, Side::White)),
        ]);
        assert!(matches!(err, Err(Error::DuplicatePiece { side: Side::White, kind: PieceKind::Queen })));
        let err = Position::from_pieces([
            (sq("a0"), Piece::new(PieceKind::Pawn, Side::White)),
            (sq("a0"), Piece::new(PieceKind::Pawn, Side::Black)),
        ]);
        assert!(matches!(err, Err(Error::DuplicateSquare(_))));
    }
}
