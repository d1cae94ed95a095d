use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Single letter used in board diagrams, uppercase for white.
    pub fn symbol(self, color: Color) -> char {
        let ch = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board cell: column `x` and row `y`, both in 1..=8.
///
/// The text form `"<x>-<y>"` is the key format shared with callers that
/// persist or rebuild board state, so `Display` and `FromStr` must stay
/// exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Step by `(dx, dy)`; `None` when the result leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 1 || y < 1 {
            return None;
        }
        Self::new(x as u8, y as u8)
    }

    /// Cell for a 0-based flattened index, `index = (y - 1) * 8 + (x - 1)`.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        Self::new(index % BOARD_SIZE + 1, index / BOARD_SIZE + 1)
    }

    pub fn index(&self) -> u8 {
        (self.y - 1) * BOARD_SIZE + (self.x - 1)
    }

    /// Algebraic name such as `e4`, used in log output.
    pub fn algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.x - 1) as char, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ChessError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidCoordinate(key.to_string());
        let (x, y) = key.split_once('-').ok_or_else(invalid)?;
        let x: u8 = x.parse().map_err(|_| invalid())?;
        let y: u8 = y.parse().map_err(|_| invalid())?;
        Coord::new(x, y).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Coord {
    type Error = ChessError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> Self {
        coord.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(String);

impl PieceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity used by the standard setup: color, kind and home cell.
    pub fn for_setup(color: Color, kind: PieceKind, home: Coord) -> Self {
        Self(format!("{}-{}-{}", color, kind, home))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coord,
}

impl Piece {
    pub fn new(id: impl Into<PieceId>, kind: PieceKind, color: Color, position: Coord) -> Self {
        Self {
            id: id.into(),
            kind,
            color,
            position,
        }
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

/// Which destination set the move generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Squares the piece may move to or capture on this turn.
    Playable,
    /// Squares the piece attacks, for check analysis.
    Threatened,
}

/// A candidate move: which piece goes where.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub piece_id: PieceId,
    pub to: Coord,
}

impl MoveCandidate {
    pub fn new(piece_id: PieceId, to: Coord) -> Self {
        Self { piece_id, to }
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.piece_id, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "winner")]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

/// Result of a move applied to a real board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece_id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
    /// Set when the capture removed a king.
    pub winner: Option<Color>,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.kind.symbol(self.color),
            self.from.algebraic(),
            sep,
            self.to.algebraic()
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("unknown piece: {0}")]
    UnknownPiece(PieceId),

    #[error("it is {turn}'s turn, {piece} cannot move")]
    NotYourTurn { piece: PieceId, turn: Color },

    #[error("illegal move: {piece} cannot reach {to}")]
    IllegalMove { piece: PieceId, to: Coord },

    #[error("game is over, {0} won")]
    GameOver(Color),

    #[error("square {square} is occupied by both {first} and {second}")]
    DuplicateSquare {
        square: Coord,
        first: PieceId,
        second: PieceId,
    },

    #[error("piece stored under key {key} carries id {id}")]
    IdMismatch { key: PieceId, id: PieceId },

    #[error("invalid board state: {0}")]
    Serialization(#[from] serde_json::Error),
}
