use std::fmt;

use crate::board::{Piece, PieceKind, Position, Side, Square, BOARD_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Unicode,
    Ascii,
}

/// Filled glyphs for White, outlined for Black (readable on dark terminals).
pub fn symbol(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::King) => '♚',
        (Side::White, PieceKind::Queen) => '♛',
        (Side::White, PieceKind::Rook) => '♜',
        (Side::White, PieceKind::Bishop) => '♝',
        (Side::White, PieceKind::Knight) => '♞',
        (Side::White, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Queen) => '♕',
        (Side::Black, PieceKind::Rook) => '♖',
        (Side::Black, PieceKind::Bishop) => '♗',
        (Side::Black, PieceKind::Knight) => '♘',
        (Side::Black, PieceKind::Pawn) => '♙',
    }
}

/// Upper case for White, lower case for Black.
pub fn letter(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };
    match piece.side {
        Side::White => c,
        Side::Black => c.to_ascii_lowercase(),
    }
}

/// Grid with row 4 on top and the file letters underneath.
pub fn render(position: &Position, glyphs: Glyphs) -> String {
    let n = BOARD_SIZE as usize;
    let rule = format!("  {}\n", "-".repeat(n * 4 + 1));
    let mut out = String::new();
    out.push_str(&rule);
    for row in (0..BOARD_SIZE).rev() {
        out.push_str(&format!("{} |", row));
        for col in 0..BOARD_SIZE {
            let cell = Square::new(col, row)
                .and_then(|sq| position.piece_at(sq))
                .map(|p| match glyphs {
                    Glyphs::Unicode => symbol(p),
                    Glyphs::Ascii => letter(p),
                })
                .unwrap_or(' ');
            out.push_str(&format!(" {} |", cell));
        }
        out.push('\n');
        out.push_str(&rule);
    }
    let files: Vec<String> = (0..BOARD_SIZE).map(|c| ((b'a' + c) as char).to_string()).collect();
    out.push_str(&format!("    {}\n", files.join("   ")));
    out
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, Glyphs::Ascii))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_startpos_rows() {
        let s = render(&Position::startpos(), Glyphs::Ascii);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[1], "4 | r | n | b | q | k |");
        assert_eq!(lines[3], "3 | p | p | p | p | p |");
        assert_eq!(lines[5], "2 |   |   |   |   |   |");
        assert_eq!(lines[9], "0 | R | N | B | Q | K |");
        assert_eq!(lines.last().copied(), Some("    a   b   c   d   e"));
    }
}
