//! Sides, piece kinds and pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// The two opposing sides.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides (White first)
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Parse the side character of a board token (`b` White, `s` Black).
    #[must_use]
    pub const fn from_code(c: char) -> Option<Side> {
        match c {
            'b' => Some(Side::White),
            's' => Some(Side::Black),
            _ => None,
        }
    }

    /// Side character used in board tokens
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Side::White => 'b',
            Side::Black => 's',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, cheapest first
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse the kind character of a board token.
    ///
    /// Codes: `p` pawn, `a` knight, `f` bishop, `k` rook, `v` queen, `s` king.
    #[must_use]
    pub const fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'a' => Some(PieceKind::Knight),
            'f' => Some(PieceKind::Bishop),
            'k' => Some(PieceKind::Rook),
            'v' => Some(PieceKind::Queen),
            's' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kind character used in board tokens
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'a',
            PieceKind::Bishop => 'f',
            PieceKind::Rook => 'k',
            PieceKind::Queen => 'v',
            PieceKind::King => 's',
        }
    }

    /// Nominal value of an unthreatened piece of this kind.
    ///
    /// Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9, King=100.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 100.0,
        }
    }

    /// Returns true if this kind attacks along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// A piece standing on the board.
///
/// Pieces are plain values; anything that needs the surrounding position
/// takes the board as an argument.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    coordinate: Coordinate,
    side: Side,
    kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn new(coordinate: Coordinate, side: Side, kind: PieceKind) -> Self {
        Piece {
            coordinate,
            side,
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Full value of this piece when nothing attacks it
    #[inline]
    #[must_use]
    pub const fn unthreatened_value(&self) -> f64 {
        self.kind.value()
    }

    /// Two-character board token for this piece (e.g. `"vb"` for a White queen).
    #[must_use]
    pub fn token(&self) -> String {
        [self.kind.code(), self.side.code()].iter().collect()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.side, self.kind, self.coordinate)
    }
}
