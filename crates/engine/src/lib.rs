pub mod board;
pub mod types;
pub mod logger;

pub use board::*;
pub use board::persist::{BoardState, PieceRecord};
pub use types::*;
pub use logger::ChessLogger;
