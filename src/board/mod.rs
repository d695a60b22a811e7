//! Chess board snapshot and threat-aware material scoring.
//!
//! A board is a static 8x8 grid of tiles loaded from a textual source. Each
//! piece knows which opposing pieces it attacks; the board aggregates those
//! attacks per side and scores every piece at full value, or at half value
//! when it is threatened.
//!
//! # Example
//! ```
//! use chess_score::board::{Board, Side};
//!
//! let source = "\
//! ks -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! -- -- -- -- -- -- -- --
//! kb -- -- -- -- -- -- --";
//! let board = Board::from_source(source).unwrap();
//! assert_eq!(board.score(Side::White), 2.5);
//! assert_eq!(board.score(Side::Black), 2.5);
//! ```

mod attacks;
mod builder;
mod error;
mod loader;
pub mod prelude;
mod state;
mod threats;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoundsError, FormatError};
pub use state::Board;
pub use threats::Evaluation;
pub use types::{Coordinate, Piece, PieceKind, Side, Tile, BOARD_SIZE};
