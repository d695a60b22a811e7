//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than writing out all 64
//! tokens of a board source.
//!
//! # Example
//! ```
//! use chess_score::board::{BoardBuilder, Coordinate, PieceKind, Side};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coordinate(0, 0), Side::White, PieceKind::Rook)
//!     .piece(Coordinate(7, 0), Side::Black, PieceKind::Rook)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.score(Side::White), 2.5);
//! ```

use super::error::BoundsError;
use super::{Board, Coordinate, Piece, PieceKind, Side};

/// A fluent builder for constructing `Board` snapshots.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, coordinate: Coordinate, side: Side, kind: PieceKind) -> Self {
        // Remove any existing piece on this coordinate
        self.pieces.retain(|p| p.coordinate() != coordinate);
        self.pieces.push(Piece::new(coordinate, side, kind));
        self
    }

    /// Remove a piece from a coordinate.
    #[must_use]
    pub fn clear(mut self, coordinate: Coordinate) -> Self {
        self.pieces.retain(|p| p.coordinate() != coordinate);
        self
    }

    /// Build the board.
    ///
    /// Fails if any placed piece is off the board.
    pub fn build(self) -> Result<Board, BoundsError> {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.place(piece)?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_build() {
        assert_eq!(BoardBuilder::new().build().unwrap(), Board::empty());
    }

    #[test]
    fn test_pieces_placed() {
        let board = BoardBuilder::new()
            .piece(Coordinate(0, 4), Side::White, PieceKind::King)
            .piece(Coordinate(7, 4), Side::Black, PieceKind::King)
            .build()
            .unwrap();

        assert!(board.piece_at(Coordinate(0, 4)).is_some());
        assert!(board.piece_at(Coordinate(7, 4)).is_some());
        assert!(board.piece_at(Coordinate(0, 0)).is_none());
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Coordinate(3, 3), Side::White, PieceKind::Pawn)
            .piece(Coordinate(3, 3), Side::Black, PieceKind::Queen)
            .build()
            .unwrap();

        let piece = board.piece_at(Coordinate(3, 3)).unwrap();
        assert_eq!((piece.side(), piece.kind()), (Side::Black, PieceKind::Queen));
        assert_eq!(board.all_piece_coordinates().len(), 1);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::new()
            .piece(Coordinate(0, 0), Side::White, PieceKind::Rook)
            .piece(Coordinate(0, 1), Side::White, PieceKind::Knight)
            .clear(Coordinate(0, 0))
            .build()
            .unwrap();

        assert!(board.piece_at(Coordinate(0, 0)).is_none());
        assert!(board.piece_at(Coordinate(0, 1)).is_some());
    }

    #[test]
    fn test_off_board_piece_fails() {
        let result = BoardBuilder::new()
            .piece(Coordinate(0, 8), Side::White, PieceKind::Rook)
            .build();
        assert_eq!(result, Err(BoundsError::OutOfBounds { row: 0, col: 8 }));
    }
}
