use std::time::Instant;
use ai::{HeuristicEvaluator, SearchConfig, SearchEngine, SearchLogExtensions};
use engine::{Board, ChessLogger};

const MAX_PLIES: usize = 12;

fn main() {
    println!("Testing search from the starting position");
    println!("{}", "=".repeat(50));

    let config = SearchConfig::from_env();
    let evaluator = HeuristicEvaluator::new(config.weights.clone());
    let mut search_engine = SearchEngine::new();
    let mut logger = ChessLogger::new();
    logger.enable_advanced_logging();

    let mut board = Board::new();
    logger.log_board(&board);

    for _ in 0..MAX_PLIES {
        let color = board.current_turn;
        let start = Instant::now();
        let result = search_engine.choose_move(&board, config.depth, color, &evaluator);
        let elapsed = start.elapsed().as_millis() as u64;
        logger.log_search_result(color, &result, elapsed);

        let Some(mv) = result.best_move else {
            println!("No move found for {} at depth {}", color, config.depth);
            break;
        };

        match board.apply_candidate(&mv) {
            Ok(record) => {
                println!("{} plays {} (score {}, {} nodes)", color, record, result.score, result.nodes_searched);
                logger.log_ai_move(&record, elapsed, result.score);
                logger.log_evaluation_breakdown(color, &evaluator.evaluate_detailed(&board, color));
                if board.is_in_check(board.current_turn) {
                    logger.log_check(board.current_turn);
                }
            }
            Err(e) => {
                println!("Engine produced an unplayable move {}: {}", mv, e);
                logger.log_game_aborted(&e.to_string());
                break;
            }
        }

        if let Some(winner) = board.winner() {
            println!("{} wins", winner);
            break;
        }
    }

    println!();
    for line in board.to_ascii() {
        println!("{}", line);
    }
    logger.log_board(&board);

    match logger.save_to_file("logs", "demo finished") {
        Ok(path) => println!("Log saved to {}", path.display()),
        Err(e) => println!("Could not save log: {}", e),
    }
}
