//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_score::board::prelude::*;
//!
//! let board = Board::empty();
//! assert_eq!(board.score(Side::White), 0.0);
//! ```

pub use super::{
    Board, BoardBuilder, BoundsError, Coordinate, Evaluation, FormatError, Piece, PieceKind, Side,
    Tile,
};
