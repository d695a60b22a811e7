use std::collections::BTreeSet;

use super::error::BoundsError;
use super::{Coordinate, Piece, Side, Tile, BOARD_SIZE};

/// An 8x8 snapshot of tiles.
///
/// `tiles[row][col]` always holds the tile for `Coordinate(row, col)`; the
/// only way to put a piece on the board keeps that true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with all 64 tiles empty.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            tiles: std::array::from_fn(|row| {
                std::array::from_fn(|col| Tile::Empty(Coordinate(row, col)))
            }),
        }
    }

    /// Put a piece on the tile named by its own coordinate, replacing whatever
    /// was there.
    pub(crate) fn place(&mut self, piece: Piece) -> Result<(), BoundsError> {
        let Coordinate(row, col) = piece.coordinate();
        if !piece.coordinate().is_valid() {
            return Err(BoundsError::OutOfBounds { row, col });
        }
        self.tiles[row][col] = Tile::Occupied(piece);
        Ok(())
    }

    /// Look up the tile at `coordinate`.
    pub fn get_tile(&self, coordinate: Coordinate) -> Result<&Tile, BoundsError> {
        let Coordinate(row, col) = coordinate;
        self.tiles
            .get(row)
            .and_then(|rank| rank.get(col))
            .ok_or(BoundsError::OutOfBounds { row, col })
    }

    /// The piece standing on `coordinate`, if any. Off-board coordinates hold
    /// nothing.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.get_tile(coordinate).ok().and_then(Tile::piece)
    }

    /// All tiles, rank 1 first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// All pieces belonging to `side`, in coordinate order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.tiles()
            .filter(move |tile| tile.holds(side))
            .filter_map(Tile::piece)
    }

    /// Coordinates of every piece belonging to `side`.
    #[must_use]
    pub fn piece_coordinates(&self, side: Side) -> BTreeSet<Coordinate> {
        self.pieces(side).map(Piece::coordinate).collect()
    }

    /// Coordinates of every piece on the board, either side.
    #[must_use]
    pub fn all_piece_coordinates(&self) -> BTreeSet<Coordinate> {
        let mut all = self.piece_coordinates(Side::White);
        all.extend(self.piece_coordinates(Side::Black));
        all
    }

    /// Walk from `from` in steps of `(row_delta, col_delta)` and return the
    /// first occupied coordinate, or `None` if the edge comes first.
    ///
    /// The starting square itself is never reported.
    #[must_use]
    pub fn first_occupied(
        &self,
        from: Coordinate,
        row_delta: isize,
        col_delta: isize,
    ) -> Option<Coordinate> {
        let mut current = from.offset(row_delta, col_delta);
        while let Some(coordinate) = current {
            if self.piece_at(coordinate).is_some() {
                return Some(coordinate);
            }
            current = coordinate.offset(row_delta, col_delta);
        }
        None
    }
}
