use engine::{MoveCandidate, PieceKind};

/// Search result containing best move and evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `None` when the searched color had no move at the root.
    pub best_move: Option<MoveCandidate>,
    pub score: i32,
    pub depth: u32,
    pub nodes_searched: u64,
}

/// Material value of each piece kind
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Stands in for infinity in scores; kept symmetric so negation is safe.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Maximum search depth
pub const MAX_DEPTH: u32 = 6;

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 3;
