use engine::{Board, Color, Coord, GenerationMode, PieceKind};
use serde::{Deserialize, Serialize};
use crate::types::*;

/// Static scoring of a position.
pub trait Evaluator {
    /// Score `board` for the side `perspective`; larger is better for the
    /// color the evaluator favours.
    fn evaluate(&self, board: &Board, perspective: Color) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Color) -> i32,
{
    fn evaluate(&self, board: &Board, perspective: Color) -> i32 {
        self(board, perspective)
    }
}

/// Tunable weights of [`HeuristicEvaluator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per opposing piece still on the board.
    pub capture_bonus: i32,
    /// Per playable destination.
    pub mobility_bonus: i32,
    /// Per occupied center cell.
    pub center_control_bonus: i32,
    /// Per non-king piece attacking the opponent king.
    pub king_safety_penalty: i32,
    /// Flattened 0-based cell indices treated as the center.
    pub center_indices: [u8; 4],
    /// Color whose point of view keeps the sign; other perspectives are negated.
    pub favored: Color,
    /// The only color whose moves are counted for mobility.
    pub mobility_color: Color,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            capture_bonus: 100,
            mobility_bonus: 1,
            center_control_bonus: 10,
            king_safety_penalty: 50,
            center_indices: [28, 29, 36, 37],
            favored: Color::White,
            mobility_color: Color::Black,
        }
    }
}

/// Every term of one evaluation, before the final sign flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    pub material: i32,
    pub capture: i32,
    pub mobility: i32,
    pub center: i32,
    pub king_safety: i32,
    /// Signed result as returned by [`Evaluator::evaluate`].
    pub total: i32,
}

/// Material, mobility, center and king-pressure heuristic.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEvaluator {
    pub weights: EvalWeights,
}

impl HeuristicEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn evaluate_detailed(&self, board: &Board, perspective: Color) -> EvalBreakdown {
        let w = &self.weights;

        let material = evaluate_material(board, perspective);

        let opposing = board.pieces().filter(|p| p.color != perspective).count() as i32;
        let capture = opposing * w.capture_bonus;

        let mobility = w.mobility_bonus
            * (self.mobility_count(board, Color::White) - self.mobility_count(board, Color::Black));

        let center = self.center_control(board);
        let king_safety = self.king_pressure(board, perspective);

        let sum = material + capture + mobility + center + king_safety;
        let total = if perspective == w.favored { sum } else { -sum };

        EvalBreakdown {
            material,
            capture,
            mobility,
            center,
            king_safety,
            total,
        }
    }

    fn mobility_count(&self, board: &Board, color: Color) -> i32 {
        if color != self.weights.mobility_color {
            return 0;
        }
        board.moves_for(color).len() as i32
    }

    /// +bonus per white piece and -bonus per black piece on a center cell.
    fn center_control(&self, board: &Board) -> i32 {
        self.weights
            .center_indices
            .iter()
            .filter_map(|&index| Coord::from_index(index))
            .filter_map(|cell| board.piece_at(cell))
            .map(|piece| match piece.color {
                Color::White => self.weights.center_control_bonus,
                Color::Black => -self.weights.center_control_bonus,
            })
            .sum()
    }

    /// Bonus for each of our non-king pieces that hits the enemy king.
    fn king_pressure(&self, board: &Board, perspective: Color) -> i32 {
        let Some(king) = board.find_king(perspective.opposite()) else {
            return 0;
        };
        let attackers = board
            .pieces_of(perspective)
            .filter(|p| p.kind != PieceKind::King)
            .filter(|p| {
                board
                    .available_destinations(p, GenerationMode::Threatened)
                    .contains(&king.position)
            })
            .count() as i32;
        attackers * self.weights.king_safety_penalty
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> i32 {
        self.evaluate_detailed(board, perspective).total
    }
}

/// Perspective side's material minus the other side's.
pub fn evaluate_material(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|p| {
            let value = piece_value(p.kind);
            if p.color == perspective { value } else { -value }
        })
        .sum()
}
