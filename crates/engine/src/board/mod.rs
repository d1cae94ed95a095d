use crate::types::*;
use std::collections::{BTreeMap, HashMap};
// Declare submodules
pub mod moves;
pub mod attacks;
pub mod state;
pub mod persist;
pub mod debug;

pub use attacks::AttackedSquares;

/// Home row layout of the non-pawn pieces, column 1 to 8.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone)]
pub struct Board {
    /// Authoritative piece set, iterated in id order.
    pieces: BTreeMap<PieceId, Piece>,
    /// Derived cell index. Patched by every mutation, never edited on its own.
    cells: HashMap<Coord, PieceId>,
    pub current_turn: Color,
    pub game_status: GameStatus,
}

impl Board {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            pieces: BTreeMap::new(),
            cells: HashMap::new(),
            current_turn: Color::White,
            game_status: GameStatus::InProgress,
        }
    }

    /// Build a board from loose pieces, rejecting two pieces on one square.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, ChessError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Self::empty();
        for piece in pieces {
            board.insert(piece)?;
        }
        Ok(board)
    }

    fn setup_starting_position(&mut self) {
        for (color, home_row, pawn_row) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
            for (column, &kind) in (1u8..).zip(BACK_RANK.iter()) {
                self.place_setup_piece(kind, color, column, home_row);
            }
            for column in 1..=BOARD_SIZE {
                self.place_setup_piece(PieceKind::Pawn, color, column, pawn_row);
            }
        }
    }

    fn place_setup_piece(&mut self, kind: PieceKind, color: Color, x: u8, y: u8) {
        if let Some(home) = Coord::new(x, y) {
            let piece = Piece::new(PieceId::for_setup(color, kind, home), kind, color, home);
            self.cells.insert(home, piece.id.clone());
            self.pieces.insert(piece.id.clone(), piece);
        }
    }

    /// Add a piece to an empty square. Re-inserting an existing id moves it.
    pub fn insert(&mut self, piece: Piece) -> Result<(), ChessError> {
        if let Some(occupant) = self.cells.get(&piece.position) {
            if *occupant != piece.id {
                return Err(ChessError::DuplicateSquare {
                    square: piece.position,
                    first: occupant.clone(),
                    second: piece.id,
                });
            }
        }
        if let Some(old) = self.pieces.get(&piece.id) {
            self.cells.remove(&old.position);
        }
        self.cells.insert(piece.position, piece.id.clone());
        self.pieces.insert(piece.id.clone(), piece);
        Ok(())
    }

    /// Drop a piece and its cell entry.
    pub fn remove(&mut self, id: &PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(id)?;
        if self.cells.get(&piece.position) == Some(id) {
            self.cells.remove(&piece.position);
        }
        Some(piece)
    }

    // Basic board operations
    pub fn piece(&self, id: &PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.cells.get(&coord).and_then(|id| self.pieces.get(id))
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        !self.cells.contains_key(&coord)
    }

    /// All pieces in stored (id) order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn find_king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Copy of this board with one piece repositioned and nothing removed.
    ///
    /// Used to build hypothetical positions during search: an occupant of
    /// `to` stays in the piece set (and keeps counting towards material)
    /// but loses its cell to the mover. Unknown ids return an unchanged copy.
    pub fn relocated(&self, id: &PieceId, to: Coord) -> Board {
        let mut next = self.clone();
        next.relocate(id, to);
        next
    }

    fn relocate(&mut self, id: &PieceId, to: Coord) {
        let Some(piece) = self.pieces.get_mut(id) else {
            return;
        };
        let from = piece.position;
        piece.position = to;
        if self.cells.get(&from) == Some(id) {
            self.cells.remove(&from);
        }
        self.cells.insert(to, id.clone());
    }

    /// Whether every piece sits on its own cell and the index has no extras.
    pub fn index_is_consistent(&self) -> bool {
        self.cells.len() == self.pieces.len()
            && self
                .pieces
                .values()
                .all(|p| self.cells.get(&p.position) == Some(&p.id))
    }

    /// Cell index in the shared `"x-y"` key form.
    pub fn cell_keys(&self) -> BTreeMap<String, PieceId> {
        self.cells
            .iter()
            .map(|(coord, id)| (coord.to_string(), id.clone()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 32);
        assert!(board.index_is_consistent());

        let king = board.find_king(Color::White).unwrap();
        assert_eq!(king.id.as_str(), "white-king-5-1");
        assert_eq!(king.position, at(5, 1));
        assert_eq!(board.find_king(Color::Black).unwrap().position, at(5, 8));

        let queen = board.piece_at(at(4, 8)).unwrap();
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert!(board.is_empty_at(at(4, 4)));
    }

    #[test]
    fn insert_rejects_shared_square() {
        let mut board = Board::empty();
        board
            .insert(Piece::new("a", PieceKind::Rook, Color::White, at(1, 1)))
            .unwrap();
        let err = board
            .insert(Piece::new("b", PieceKind::Rook, Color::Black, at(1, 1)))
            .unwrap_err();
        assert!(matches!(err, ChessError::DuplicateSquare { .. }));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn reinsert_moves_index_entry() {
        let mut board = Board::empty();
        board
            .insert(Piece::new("n", PieceKind::Knight, Color::White, at(2, 1)))
            .unwrap();
        board
            .insert(Piece::new("n", PieceKind::Knight, Color::White, at(3, 3)))
            .unwrap();
        assert!(board.is_empty_at(at(2, 1)));
        assert_eq!(board.piece_at(at(3, 3)).unwrap().id.as_str(), "n");
        assert!(board.index_is_consistent());
    }

    #[test]
    fn relocated_keeps_the_occupant() {
        let board = Board::from_pieces([
            Piece::new("wr", PieceKind::Rook, Color::White, at(1, 1)),
            Piece::new("bn", PieceKind::Knight, Color::Black, at(1, 5)),
        ])
        .unwrap();

        let next = board.relocated(&PieceId::from("wr"), at(1, 5));
        assert_eq!(next.piece_count(), 2);
        assert_eq!(next.piece_at(at(1, 5)).unwrap().id.as_str(), "wr");
        assert!(next.is_empty_at(at(1, 1)));
        assert_eq!(next.piece(&"bn".into()).unwrap().position, at(1, 5));

        // the source board is untouched
        assert_eq!(board.piece_at(at(1, 5)).unwrap().id.as_str(), "bn");
        assert!(board.index_is_consistent());
    }

    #[test]
    fn cell_keys_use_contract_format() {
        let board = Board::from_pieces([Piece::new("wk", PieceKind::King, Color::White, at(5, 1))]).unwrap();
        let keys = board.cell_keys();
        assert_eq!(keys.get("5-1").map(PieceId::as_str), Some("wk"));
    }
}
