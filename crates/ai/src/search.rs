use engine::{Board, Color, GenerationMode, MoveCandidate};
use crate::{evaluation::*, types::*};

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every ply expands moves of the single color handed to
/// [`SearchEngine::choose_move`]; levels only alternate between maximizing
/// and minimizing. The other side's replies are never generated.
pub struct SearchEngine {
    pub nodes_searched: u64,
    advanced_logging_enabled: bool,
    log_callback: Option<Box<dyn FnMut(&str)>>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            nodes_searched: 0,
            advanced_logging_enabled: false,
            log_callback: None,
        }
    }

    pub fn set_advanced_logging<F>(&mut self, enabled: bool, callback: Option<F>)
    where
        F: FnMut(&str) + 'static,
    {
        self.advanced_logging_enabled = enabled;
        self.log_callback = callback.map(|f| Box::new(f) as Box<dyn FnMut(&str)>);
    }

    /// Pick a move for `color`, looking `depth` plies ahead.
    ///
    /// Depth 0 returns no move and the static score of `board`. A `None`
    /// move at higher depth means `color` had nothing to play; the score is
    /// then `-SCORE_INFINITY`.
    pub fn choose_move<E>(&mut self, board: &Board, depth: u32, color: Color, evaluator: &E) -> SearchResult
    where
        E: Evaluator + ?Sized,
    {
        self.nodes_searched = 0;

        if self.advanced_logging_enabled {
            self.log(&format!("Starting search for {} at depth {}", color, depth));
        }

        let (best_move, score) =
            self.minimax(board, depth, true, -SCORE_INFINITY, SCORE_INFINITY, color, evaluator, 0);

        if self.advanced_logging_enabled {
            self.log(&format!(
                "Search completed. Best move: {}, Score: {}, Nodes: {}",
                best_move.as_ref().map(|m| m.to_string()).unwrap_or("None".to_string()),
                score,
                self.nodes_searched
            ));
        }

        SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: self.nodes_searched,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax<E>(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        color: Color,
        evaluator: &E,
        ply: u32,
    ) -> (Option<MoveCandidate>, i32)
    where
        E: Evaluator + ?Sized,
    {
        self.nodes_searched += 1;

        if depth == 0 {
            return (None, evaluator.evaluate(board, color));
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

        'pieces: for piece in board.pieces_of(color) {
            for to in board.available_destinations(piece, GenerationMode::Playable) {
                // Hypothetical position: the mover is repositioned, nothing is captured
                let child = board.relocated(&piece.id, to);
                let (_, score) =
                    self.minimax(&child, depth - 1, !maximizing, alpha, beta, color, evaluator, ply + 1);

                // Strict comparison: the first move seen keeps ties
                let improved = if maximizing { score > best_score } else { score < best_score };
                if improved {
                    best_score = score;
                    best_move = Some(MoveCandidate::new(piece.id.clone(), to));
                }
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }

                if self.advanced_logging_enabled && ply == 0 {
                    self.log(&format!(
                        "  {} -> {} scored {}{} (alpha {}, beta {})",
                        piece.id,
                        to,
                        score,
                        if improved { " NEW BEST" } else { "" },
                        alpha,
                        beta
                    ));
                }

                if beta <= alpha {
                    if self.advanced_logging_enabled && ply <= 1 {
                        self.log(&format!(
                            "{}cutoff at ply {} after {} -> {} (alpha {} >= beta {})",
                            "  ".repeat(ply as usize + 1),
                            ply,
                            piece.id,
                            to,
                            alpha,
                            beta
                        ));
                    }
                    break 'pieces;
                }
            }
        }

        (best_move, best_score)
    }

    fn log(&mut self, message: &str) {
        if let Some(ref mut callback) = self.log_callback {
            callback(message);
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot search with a fresh engine and no logging.
pub fn choose_move<E>(board: &Board, depth: u32, color: Color, evaluator: &E) -> SearchResult
where
    E: Evaluator + ?Sized,
{
    SearchEngine::new().choose_move(board, depth, color, evaluator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Coord, Piece, PieceKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    /// White rook and king against a lone black king.
    fn rook_endgame() -> Board {
        Board::from_pieces([
            Piece::new("wk", PieceKind::King, Color::White, at(8, 1)),
            Piece::new("wr", PieceKind::Rook, Color::White, at(1, 1)),
            Piece::new("bk", PieceKind::King, Color::Black, at(5, 8)),
        ])
        .unwrap()
    }

    /// Plain minimax over the same generator, no pruning.
    fn full_minimax(board: &Board, depth: u32, maximizing: bool, color: Color, evaluator: &dyn Evaluator) -> i32 {
        if depth == 0 {
            return evaluator.evaluate(board, color);
        }
        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        for mv in board.moves_for(color) {
            let child = board.relocated(&mv.piece_id, mv.to);
            let score = full_minimax(&child, depth - 1, !maximizing, color, evaluator);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    #[test]
    fn depth_zero_returns_static_score() {
        let board = Board::new();
        let evaluator = HeuristicEvaluator::default();
        let result = choose_move(&board, 0, Color::Black, &evaluator);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluator.evaluate(&board, Color::Black));
        assert_eq!(result.nodes_searched, 1);
    }

    #[test]
    fn pruning_keeps_the_minimax_score() {
        let evaluator = HeuristicEvaluator::default();

        let endgame = rook_endgame();
        for depth in 1..=3 {
            let pruned = choose_move(&endgame, depth, Color::White, &evaluator);
            let full = full_minimax(&endgame, depth, true, Color::White, &evaluator);
            assert_eq!(pruned.score, full, "depth {}", depth);
        }

        let start = Board::new();
        let pruned = choose_move(&start, 2, Color::Black, &evaluator);
        assert_eq!(pruned.score, full_minimax(&start, 2, true, Color::Black, &evaluator));
    }

    #[test]
    fn pruning_skips_nodes() {
        let evaluator = HeuristicEvaluator::default();
        let board = rook_endgame();
        let mut engine = SearchEngine::new();
        let result = engine.choose_move(&board, 2, Color::White, &evaluator);

        let root_moves = board.moves_for(Color::White).len() as u64;
        let unpruned: u64 = 1 + root_moves
            + board
                .moves_for(Color::White)
                .iter()
                .map(|mv| board.relocated(&mv.piece_id, mv.to).moves_for(Color::White).len() as u64)
                .sum::<u64>();
        assert!(result.nodes_searched < unpruned);
        assert_eq!(engine.nodes_searched, result.nodes_searched);
    }

    #[test]
    fn ties_go_to_the_first_enumerated_move() {
        let flat = |_: &Board, _: Color| 0;
        let board = Board::new();
        for depth in 1..=2 {
            let first = choose_move(&board, depth, Color::White, &flat);
            let again = choose_move(&board, depth, Color::White, &flat);
            assert_eq!(first, again);
            // bishops and the king come first in id order but cannot move
            assert_eq!(
                first.best_move,
                Some(MoveCandidate::new("white-knight-2-1".into(), at(3, 3)))
            );
            assert_eq!(first.score, 0);
        }
    }

    #[test]
    fn prefers_pressure_on_the_enemy_king() {
        let evaluator = HeuristicEvaluator::default();
        let result = choose_move(&rook_endgame(), 1, Color::White, &evaluator);
        // 1-8 and 5-1 both hit the king and leave it four squares; 1-8 is
        // generated first
        assert_eq!(result.best_move, Some(MoveCandidate::new("wr".into(), at(1, 8))));
        assert_eq!(result.score, 500 + 100 - 4 + 50);
    }

    #[test]
    fn search_only_moves_the_requested_color() {
        // Black never replies: every evaluated board still has the black
        // king on its starting cell, even two plies deep.
        let seen = RefCell::new(0u32);
        let watcher = |board: &Board, _: Color| {
            let king = board.find_king(Color::Black).unwrap();
            assert_eq!(king.position, at(5, 8));
            *seen.borrow_mut() += 1;
            board.piece(&"wr".into()).unwrap().position.y() as i32
        };
        let result = choose_move(&rook_endgame(), 2, Color::White, &watcher);
        assert!(*seen.borrow() > 0);
        let best = result.best_move.unwrap();
        assert!(best.piece_id.as_str().starts_with('w'));
    }

    #[test]
    fn captures_are_not_removed_during_search() {
        // The queen is "taken" on the hypothetical board but still counted
        let board = Board::from_pieces([
            Piece::new("wr", PieceKind::Rook, Color::White, at(1, 1)),
            Piece::new("bq", PieceKind::Queen, Color::Black, at(1, 8)),
        ])
        .unwrap();
        let material = |b: &Board, c: Color| evaluate_material(b, c);
        let result = choose_move(&board, 1, Color::White, &material);
        assert_eq!(result.score, 500 - 900);
    }

    #[test]
    fn no_pieces_means_no_move() {
        let board = Board::from_pieces([Piece::new("bk", PieceKind::King, Color::Black, at(5, 8))]).unwrap();
        let evaluator = HeuristicEvaluator::default();
        let result = choose_move(&board, 2, Color::White, &evaluator);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -SCORE_INFINITY);
        assert_eq!(result.nodes_searched, 1);
    }

    #[test]
    fn advanced_logging_reports_root_moves() {
        let lines = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&lines);

        let mut engine = SearchEngine::new();
        engine.set_advanced_logging(true, Some(move |line: &str| sink.borrow_mut().push(line.to_string())));
        let result = engine.choose_move(&rook_endgame(), 1, Color::White, &HeuristicEvaluator::default());

        let lines = lines.borrow();
        assert!(lines[0].starts_with("Starting search for white at depth 1"));
        assert!(lines.iter().any(|l| l.contains("wr -> 1-8 scored 646 NEW BEST")));
        assert!(lines.last().unwrap().contains(&format!("Score: {}", result.score)));
    }
}
