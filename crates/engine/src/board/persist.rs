use crate::types::*;
use super::Board;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stored piece, in the flat shape the application store keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: PieceId,
    #[serde(rename = "name")]
    pub kind: PieceKind,
    pub color: Color,
    pub x: u8,
    pub y: u8,
}

/// Serializable snapshot of a board: pieces keyed by id plus game flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub turn: Color,
    #[serde(default = "in_progress")]
    pub status: GameStatus,
    pub pieces: BTreeMap<PieceId, PieceRecord>,
}

fn in_progress() -> GameStatus {
    GameStatus::InProgress
}

impl From<&Piece> for PieceRecord {
    fn from(piece: &Piece) -> Self {
        Self {
            id: piece.id.clone(),
            kind: piece.kind,
            color: piece.color,
            x: piece.position.x(),
            y: piece.position.y(),
        }
    }
}

impl TryFrom<PieceRecord> for Piece {
    type Error = ChessError;

    fn try_from(record: PieceRecord) -> Result<Self, Self::Error> {
        let position = Coord::new(record.x, record.y)
            .ok_or_else(|| ChessError::InvalidCoordinate(format!("{}-{}", record.x, record.y)))?;
        Ok(Piece::new(record.id, record.kind, record.color, position))
    }
}

impl Board {
    pub fn to_state(&self) -> BoardState {
        BoardState {
            turn: self.current_turn,
            status: self.game_status,
            pieces: self
                .pieces()
                .map(|p| (p.id.clone(), PieceRecord::from(p)))
                .collect(),
        }
    }

    /// Rehydrate a board, validating coordinates, keys and occupancy.
    pub fn from_state(state: BoardState) -> Result<Self, ChessError> {
        let mut board = Board::empty();
        for (key, record) in state.pieces {
            if key != record.id {
                return Err(ChessError::IdMismatch { key, id: record.id });
            }
            board.insert(Piece::try_from(record)?)?;
        }
        board.current_turn = state.turn;
        board.game_status = state.status;
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, ChessError> {
        Ok(serde_json::to_string_pretty(&self.to_state())?)
    }

    pub fn from_json(json: &str) -> Result<Self, ChessError> {
        let state: BoardState = serde_json::from_str(json)?;
        Self::from_state(state)
    }
}
