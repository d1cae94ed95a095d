use crate::types::*;
use super::Board;

// Empty cells and captures are walked in separate passes; search ties go to
// whatever these tables list first.
const ROOK_QUIET_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const ROOK_CAPTURE_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (-1, 2), (2, 1), (2, -1),
    (1, -2), (-1, -2), (-2, -1), (-2, 1),
];

const KING_QUIET_OFFSETS: [(i8, i8); 8] = [
    (0, -1), (0, 1), (-1, 0), (1, 0),
    (1, 1), (1, -1), (-1, -1), (-1, 1),
];
const KING_CAPTURE_OFFSETS: [(i8, i8); 8] = [
    (1, 1), (1, -1), (-1, -1), (-1, 1),
    (1, 0), (-1, 0), (0, 1), (0, -1),
];

impl Board {
    /// Destinations for `piece` in the given mode.
    ///
    /// The list is duplicate-free. Empty cells come first, then captures:
    /// a queen lists its diagonals before its files and ranks.
    ///
    /// `Playable` and `Threatened` differ for pawns and kings. A pawn
    /// threatens both forward diagonals whatever stands there. A playable
    /// king drops every cell the opponent currently attacks; a threatening
    /// king keeps all its steps.
    pub fn available_destinations(&self, piece: &Piece, mode: GenerationMode) -> Vec<Coord> {
        match piece.kind {
            PieceKind::Pawn => self.get_pawn_moves(piece, mode),
            PieceKind::Knight => self.get_offset_moves(piece, &KNIGHT_OFFSETS, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.get_sliding_moves(piece, &BISHOP_DIRECTIONS, &BISHOP_DIRECTIONS),
            PieceKind::Rook => {
                self.get_sliding_moves(piece, &ROOK_QUIET_DIRECTIONS, &ROOK_CAPTURE_DIRECTIONS)
            }
            PieceKind::Queen => {
                let mut moves = self.get_sliding_moves(piece, &BISHOP_DIRECTIONS, &BISHOP_DIRECTIONS);
                moves.extend(self.get_sliding_moves(piece, &ROOK_QUIET_DIRECTIONS, &ROOK_CAPTURE_DIRECTIONS));
                moves
            }
            PieceKind::King => self.get_king_moves(piece, mode),
        }
    }

    /// Same as [`Board::available_destinations`], looked up by id.
    pub fn destinations_of(&self, id: &PieceId, mode: GenerationMode) -> Vec<Coord> {
        match self.piece(id) {
            Some(piece) => self.available_destinations(piece, mode),
            None => Vec::new(),
        }
    }

    /// Every playable move of one color, pieces in board order and
    /// destinations in generation order.
    pub fn moves_for(&self, color: Color) -> Vec<MoveCandidate> {
        let mut all_moves = Vec::new();
        for piece in self.pieces_of(color) {
            for to in self.available_destinations(piece, GenerationMode::Playable) {
                all_moves.push(MoveCandidate::new(piece.id.clone(), to));
            }
        }
        all_moves
    }

    fn is_enemy_at(&self, target: Coord, color: Color) -> bool {
        self.piece_at(target).is_some_and(|occupant| occupant.color != color)
    }

    /// First piece met walking from `from` in one direction.
    fn first_on_ray(&self, from: Coord, (dx, dy): (i8, i8)) -> Option<&Piece> {
        let mut current = from;
        while let Some(target) = current.offset(dx, dy) {
            if let Some(occupant) = self.piece_at(target) {
                return Some(occupant);
            }
            current = target;
        }
        None
    }

    /// Empty cells along each quiet ray, then the enemy (if any) closing
    /// each capture ray.
    fn get_sliding_moves(&self, piece: &Piece, quiet: &[(i8, i8)], captures: &[(i8, i8)]) -> Vec<Coord> {
        let mut moves = Vec::new();

        for &(dx, dy) in quiet {
            let mut current = piece.position;
            while let Some(target) = current.offset(dx, dy) {
                if !self.is_empty_at(target) {
                    break;
                }
                moves.push(target);
                current = target;
            }
        }

        for &direction in captures {
            if let Some(blocker) = self.first_on_ray(piece.position, direction) {
                if blocker.color != piece.color {
                    moves.push(blocker.position);
                }
            }
        }

        moves
    }

    fn get_offset_moves(&self, piece: &Piece, quiet: &[(i8, i8)], captures: &[(i8, i8)]) -> Vec<Coord> {
        let empty = quiet
            .iter()
            .filter_map(|&(dx, dy)| piece.position.offset(dx, dy))
            .filter(|&target| self.is_empty_at(target));
        let taken = captures
            .iter()
            .filter_map(|&(dx, dy)| piece.position.offset(dx, dy))
            .filter(|&target| self.is_enemy_at(target, piece.color));
        empty.chain(taken).collect()
    }

    /// King steps, minus cells the opponent attacks when playing for real.
    ///
    /// The attacked set comes from the current position; the king is not
    /// lifted off its square first, so a slider aiming through the king does
    /// not mark the cell behind it.
    fn get_king_moves(&self, piece: &Piece, mode: GenerationMode) -> Vec<Coord> {
        let moves = self.get_offset_moves(piece, &KING_QUIET_OFFSETS, &KING_CAPTURE_OFFSETS);
        match mode {
            GenerationMode::Threatened => moves,
            GenerationMode::Playable => {
                let dangerous = self.attacked_squares(piece.color.opposite());
                moves.into_iter().filter(|m| !dangerous.contains(m)).collect()
            }
        }
    }

    fn get_pawn_moves(&self, piece: &Piece, mode: GenerationMode) -> Vec<Coord> {
        let forward = piece.color.forward();
        let diagonals = [-1, 1]
            .into_iter()
            .filter_map(|dx| piece.position.offset(dx, forward));

        if mode == GenerationMode::Threatened {
            return diagonals.collect();
        }

        let mut moves = Vec::new();

        // Up to two empty squares straight ahead, from any row
        let mut current = piece.position;
        for _ in 0..2 {
            match current.offset(0, forward) {
                Some(next) if self.is_empty_at(next) => {
                    moves.push(next);
                    current = next;
                }
                _ => break,
            }
        }

        // Diagonal captures
        moves.extend(diagonals.filter(|&target| self.is_enemy_at(target, piece.color)));

        moves
    }
}
