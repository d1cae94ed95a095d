use crate::types::*;
use super::Board;

impl Board {
    /// Execute a real move and update game state.
    ///
    /// Removes an enemy on the destination, repositions the mover, ends the
    /// game when a king was taken and hands the turn to the other side.
    /// Nothing changes when the move is rejected.
    pub fn apply_move(&mut self, id: &PieceId, to: Coord) -> Result<MoveRecord, ChessError> {
        if let GameStatus::Won(winner) = self.game_status {
            return Err(ChessError::GameOver(winner));
        }

        let piece = self
            .piece(id)
            .cloned()
            .ok_or_else(|| ChessError::UnknownPiece(id.clone()))?;

        if piece.color != self.current_turn {
            return Err(ChessError::NotYourTurn {
                piece: id.clone(),
                turn: self.current_turn,
            });
        }

        if !self
            .available_destinations(&piece, GenerationMode::Playable)
            .contains(&to)
        {
            return Err(ChessError::IllegalMove {
                piece: id.clone(),
                to,
            });
        }

        let captured_id = self
            .piece_at(to)
            .filter(|occupant| occupant.color != piece.color)
            .map(|occupant| occupant.id.clone());
        let captured = captured_id.and_then(|taken| self.remove(&taken));

        self.relocate(id, to);

        let winner = match &captured {
            Some(taken) if taken.kind == PieceKind::King => Some(taken.color.opposite()),
            _ => None,
        };
        if let Some(color) = winner {
            self.game_status = GameStatus::Won(color);
        }

        self.current_turn = self.current_turn.opposite();

        Ok(MoveRecord {
            piece_id: piece.id,
            kind: piece.kind,
            color: piece.color,
            from: piece.position,
            to,
            captured,
            winner,
        })
    }

    /// Same as [`Board::apply_move`] for a search result.
    pub fn apply_candidate(&mut self, mv: &MoveCandidate) -> Result<MoveRecord, ChessError> {
        self.apply_move(&mv.piece_id, mv.to)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.game_status, GameStatus::Won(_))
    }

    pub fn winner(&self) -> Option<Color> {
        match self.game_status {
            GameStatus::Won(color) => Some(color),
            GameStatus::InProgress => None,
        }
    }
}
