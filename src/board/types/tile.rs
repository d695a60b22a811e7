//! Board tiles.

use super::{Coordinate, Piece, Side};

/// One square of the board: either empty or holding exactly one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty(Coordinate),
    Occupied(Piece),
}

impl Tile {
    /// Where this tile sits on the board
    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Tile::Empty(coordinate) => *coordinate,
            Tile::Occupied(piece) => piece.coordinate(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    /// True if the tile holds a piece belonging to `side`
    #[inline]
    #[must_use]
    pub fn holds(&self, side: Side) -> bool {
        self.piece().is_some_and(|piece| piece.side() == side)
    }

    /// Board token for this tile (`"--"` when empty)
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Tile::Empty(_) => String::from("--"),
            Tile::Occupied(piece) => piece.token(),
        }
    }
}
