use serde::{Deserialize, Serialize};

use crate::board::PieceKind;

/// One value per piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceTable {
    pub king: f32,
    pub queen: f32,
    pub rook: f32,
    pub bishop: f32,
    pub knight: f32,
    pub pawn: f32,
}

impl PieceTable {
    #[inline]
    pub const fn value(&self, kind: PieceKind) -> f32 {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }
}

/// Scoring profile: material values, the smaller "threatened" values and the
/// decisive-result magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub material: PieceTable,
    pub threatened: PieceTable,
    /// Add the threat balance to the material balance at leaves.
    #[serde(default = "default_true")]
    pub include_threats: bool,
    #[serde(default = "default_win")]
    pub win_score: f32,
}

fn default_true() -> bool {
    true
}

fn default_win() -> f32 {
    WIN_SCORE
}

/// Magnitude returned for a captured or mated king.
pub const WIN_SCORE: f32 = 400.0;

const THREATENED: PieceTable = PieceTable {
    king: 9.0,
    queen: 4.5,
    rook: 3.0,
    bishop: 2.0,
    knight: 2.0,
    pawn: 0.5,
};

impl Scoring {
    pub const CLASSIC: Scoring = Scoring {
        material: PieceTable { king: 100.0, queen: 9.0, rook: 5.0, bishop: 4.0, knight: 4.0, pawn: 1.0 },
        threatened: THREATENED,
        include_threats: true,
        win_score: WIN_SCORE,
    };

    pub const HEAVY_KING: Scoring = Scoring {
        material: PieceTable { king: 150.0, queen: 9.0, rook: 5.0, bishop: 4.0, knight: 4.0, pawn: 1.0 },
        threatened: THREATENED,
        include_threats: true,
        win_score: WIN_SCORE,
    };

    /// Looks up a built-in profile by name (`classic`, `heavy-king`).
    pub fn named(name: &str) -> Option<Scoring> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::CLASSIC),
            "heavy-king" | "heavy_king" => Some(Self::HEAVY_KING),
            _ => None,
        }
    }

    pub fn material_only(mut self) -> Self {
        self.include_threats = false;
        self
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_outweighs_everything() {
        for s in [Scoring::CLASSIC, Scoring::HEAVY_KING] {
            let others: f32 = PieceKind::ALL
                .iter()
                .filter(|&&k| k != PieceKind::King)
                .map(|&k| s.material.value(k) * if k == PieceKind::Pawn { 5.0 } else { 1.0 })
                .sum();
            assert!(s.material.king > others);
        }
    }

    #[test]
    fn profile_json_defaults() {
        let json = r#"{
            "material": {"king": 120, "queen": 9, "rook": 5, "bishop": 3, "knight": 3, "pawn": 1},
            "threatened": {"king": 9, "queen": 4.5, "rook": 3, "bishop": 2, "knight": 2, "pawn": 0.5}
        }"#;
        let s: Scoring = serde_json::from_str(json).unwrap();
        assert!(s.include_threats);
        assert_eq!(s.win_score, WIN_SCORE);
        assert_eq!(s.material.value(PieceKind::King), 120.0);
        assert_eq!(Scoring::named("Heavy-King"), Some(Scoring::HEAVY_KING));
    }
}
