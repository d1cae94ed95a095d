use crate::types::*;
use super::Board;
use std::collections::HashSet;

/// Every cell one color currently threatens.
pub type AttackedSquares = HashSet<Coord>;

impl Board {
    /// Union of the threatened cells of every piece of `color`.
    ///
    /// Always recomputed from the current position: a single relocation can
    /// open or close a slider's ray anywhere along it.
    pub fn attacked_squares(&self, color: Color) -> AttackedSquares {
        let mut attacked = AttackedSquares::new();
        for piece in self.pieces_of(color) {
            attacked.extend(self.available_destinations(piece, GenerationMode::Threatened));
        }
        attacked
    }

    /// Whether `color`'s king stands on a cell the other side attacks.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.attacked_squares(color.opposite()).contains(&king.position),
            None => false,
        }
    }

    /// Whether any piece of `by_color` attacks `square`.
    pub fn is_under_threat(&self, square: Coord, by_color: Color) -> bool {
        self.attacked_squares(by_color).contains(&square)
    }

    /// Cells the side owning `id` may pick for that piece.
    ///
    /// While that side is in check only its king may move; every other
    /// piece gets an empty list.
    pub fn selectable_destinations(&self, id: &PieceId) -> Vec<Coord> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        if piece.kind != PieceKind::King && self.is_in_check(piece.color) {
            return Vec::new();
        }
        self.available_destinations(piece, GenerationMode::Playable)
    }
}
