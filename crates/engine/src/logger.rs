use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::{Board, Color, MoveRecord};

/// In-memory game log, written out when a game ends.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    move_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            move_count: 0,
            indent_level: 0,
        };

        logger.log("=== Chess Engine Game Log Started ===");
        logger.log(&format!("Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled - search traces active");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&indent);
        self.log(message);
    }

    pub fn increase_indent(&mut self) { self.indent_level += 1; }
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 { self.indent_level -= 1; }
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    // MOVE LOGGING
    pub fn log_ai_move(&mut self, record: &MoveRecord, time_ms: u64, score: i32) {
        self.move_count += 1;
        self.log(&format!(
            "{}. {} (AI move - {}ms) Eval: {}",
            self.move_count, record, time_ms, score
        ));
        self.log_move_consequences(record);
    }

    fn log_move_consequences(&mut self, record: &MoveRecord) {
        if let Some(taken) = &record.captured {
            self.log_with_indent(&format!(
                "captured {} {} on {}",
                taken.color, taken.kind, taken.position
            ));
        }
        if let Some(winner) = record.winner {
            self.log_game_over(winner);
        }
    }

    pub fn log_check(&mut self, color: Color) {
        self.log_with_indent(&format!("{} is in check", color));
    }

    pub fn log_no_move(&mut self, color: Color, depth: u32) {
        self.log(&format!("No move found for {} at depth {}", color, depth));
    }

    pub fn log_board(&mut self, board: &Board) {
        for line in board.to_ascii() {
            self.log_with_indent(&line);
        }
    }

    pub fn log_game_over(&mut self, winner: Color) {
        self.log(&format!("Game over: {} wins by capturing the king", winner));
    }

    pub fn log_game_aborted(&mut self, reason: &str) {
        self.log(&format!("Game finished abruptly - {}", reason));
    }

    /// Write the buffer to `<dir>/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, dir: impl AsRef<Path>, reason: &str) -> Result<PathBuf, String> {
        let dir = dir.as_ref();
        if let Err(e) = fs::create_dir_all(dir) {
            return Err(format!("Failed to create logs directory: {}", e));
        }

        // Generate filename with current date/time
        let now = chrono::Local::now();
        let filename = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("Game ended: {} - Saving log", reason));

        match File::create(&filename) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log file: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}
