use crate::types::*;
use super::Board;

impl Board {
    /// Debug game state information
    pub fn debug_game_state(&self) -> Vec<String> {
        let mut debug_info = Vec::new();

        debug_info.push(format!("Current turn: {}", self.current_turn));
        debug_info.push(format!("Game status: {:?}", self.game_status));
        debug_info.push(format!(
            "Pieces: {} white, {} black",
            self.pieces_of(Color::White).count(),
            self.pieces_of(Color::Black).count()
        ));

        for color in [Color::White, Color::Black] {
            match self.find_king(color) {
                Some(king) => debug_info.push(format!(
                    "{} king on {}{}",
                    color,
                    king.position,
                    if self.is_in_check(color) { " (in check)" } else { "" }
                )),
                None => debug_info.push(format!("{} king: None", color)),
            }
        }

        debug_info
    }

    /// Text diagram, row 8 at the top. Uppercase is white, `.` is empty.
    pub fn to_ascii(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(BOARD_SIZE as usize + 1);
        for y in (1..=BOARD_SIZE).rev() {
            let mut line = format!("{} ", y);
            for x in 1..=BOARD_SIZE {
                let symbol = Coord::new(x, y)
                    .and_then(|c| self.piece_at(c))
                    .map(Piece::symbol)
                    .unwrap_or('.');
                line.push(symbol);
                line.push(' ');
            }
            lines.push(line.trim_end().to_string());
        }
        lines.push("  a b c d e f g h".to_string());
        lines
    }

    /// Destinations of one piece in both modes
    pub fn debug_piece_moves(&self, id: &PieceId) -> Vec<String> {
        let mut debug_info = Vec::new();
        let Some(piece) = self.piece(id) else {
            debug_info.push(format!("No piece with id {}", id));
            return debug_info;
        };

        debug_info.push(format!("{} {} on {}", piece.color, piece.kind, piece.position));
        for mode in [GenerationMode::Playable, GenerationMode::Threatened] {
            let keys: Vec<String> = self
                .available_destinations(piece, mode)
                .iter()
                .map(Coord::to_string)
                .collect();
            debug_info.push(format!("{:?} ({}): {}", mode, keys.len(), keys.join(" ")));
        }
        debug_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_of_starting_position() {
        let lines = Board::new().to_ascii();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
    }

    #[test]
    fn piece_report_lists_both_modes() {
        let board = Board::new();
        let report = board.debug_piece_moves(&"white-pawn-1-2".into());
        assert_eq!(report[0], "white pawn on 1-2");
        assert_eq!(report[1], "Playable (2): 1-3 1-4");
        assert_eq!(report[2], "Threatened (1): 2-3");

        let state = board.debug_game_state();
        assert!(state.iter().any(|l| l == "white king on 5-1"));
    }
}
