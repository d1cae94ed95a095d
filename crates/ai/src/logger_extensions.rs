use engine::{ChessLogger, Color};
use crate::evaluation::EvalBreakdown;
use crate::types::SearchResult;

pub trait SearchLogExtensions {
    fn log_search_result(&mut self, color: Color, result: &SearchResult, time_ms: u64);
    fn log_evaluation_breakdown(&mut self, perspective: Color, breakdown: &EvalBreakdown);
}

impl SearchLogExtensions for ChessLogger {
    fn log_search_result(&mut self, color: Color, result: &SearchResult, time_ms: u64) {
        match &result.best_move {
            Some(mv) => self.log(&format!(
                "Search for {} (depth {}): {} | Score: {} | Nodes: {} | {}ms",
                color, result.depth, mv, result.score, result.nodes_searched, time_ms
            )),
            None => self.log_no_move(color, result.depth),
        }
    }

    fn log_evaluation_breakdown(&mut self, perspective: Color, breakdown: &EvalBreakdown) {
        if !self.should_log_advanced() {
            return;
        }
        self.log_with_indent(&format!("EVALUATION BREAKDOWN ({}):", perspective));
        self.increase_indent();
        self.log_with_indent(&format!("├─ Material: {:+}", breakdown.material));
        self.log_with_indent(&format!("├─ Capture bonus: {:+}", breakdown.capture));
        self.log_with_indent(&format!("├─ Mobility: {:+}", breakdown.mobility));
        self.log_with_indent(&format!("├─ Center: {:+}", breakdown.center));
        self.log_with_indent(&format!("├─ King pressure: {:+}", breakdown.king_safety));
        self.log_with_indent(&format!("└─ Final Eval: {:+}", breakdown.total));
        self.decrease_indent();
    }
}
