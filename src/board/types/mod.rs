//! Core board types.
//!
//! This module contains the value types the board is built from:
//! - `Coordinate` - a (row, column) square with offset arithmetic
//! - `Side`, `PieceKind` and `Piece` - who owns what
//! - `Tile` - one square, empty or occupied

mod coordinate;
mod piece;
mod tile;

pub use coordinate::{Coordinate, BOARD_SIZE};
pub use piece::{Piece, PieceKind, Side};
pub use tile::Tile;
