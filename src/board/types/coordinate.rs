//! Board coordinates and offset arithmetic.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoundsError;

/// Number of rows (ranks) and columns (files) on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, column).
///
/// Row 0 is rank 1 and column 0 is file a. Ordering is row-major, so sets of
/// coordinates iterate a1, b1, ..., h1, a2, ..., h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate(pub usize, pub usize); // (row, col)

impl Coordinate {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        let coordinate = Coordinate(row, col);
        if coordinate.is_valid() {
            Some(coordinate)
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True iff both axes lie on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Step from this coordinate by the given deltas.
    ///
    /// Returns `None` when the target falls off the board; callers treat that
    /// as the end of a walk, not as a failure.
    #[inline]
    #[must_use]
    pub fn offset(self, row_delta: isize, col_delta: isize) -> Option<Coordinate> {
        let row = self.0.checked_add_signed(row_delta)?;
        let col = self.1.checked_add_signed(col_delta)?;
        Coordinate::new(row, col)
    }

    /// All 64 coordinates in the order the board source lists them:
    /// rank 8 down to rank 1, file a to h within each rank.
    pub fn reading_order() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE)
            .rev()
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate(row, col)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = BoundsError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coordinate::new(row, col).ok_or(BoundsError::OutOfBounds { row, col })
    }
}

impl FromStr for Coordinate {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoundsError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Coordinate(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(Coordinate(0, 0).is_valid());
        assert!(Coordinate(7, 7).is_valid());
        assert!(!Coordinate(8, 0).is_valid());
        assert!(!Coordinate(0, 8).is_valid());
        assert_eq!(Coordinate::new(3, 9), None);
    }

    #[test]
    fn test_offset_on_board() {
        assert_eq!(Coordinate(0, 0).offset(1, 1), Some(Coordinate(1, 1)));
        assert_eq!(Coordinate(4, 4).offset(-2, 1), Some(Coordinate(2, 5)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Coordinate(0, 0).offset(-1, 0), None);
        assert_eq!(Coordinate(0, 0).offset(0, -1), None);
        assert_eq!(Coordinate(7, 7).offset(1, 0), None);
        assert_eq!(Coordinate(7, 6).offset(0, 2), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Coordinate(0, 7) < Coordinate(1, 0));
        assert!(Coordinate(2, 3) < Coordinate(2, 4));
    }

    #[test]
    fn test_reading_order() {
        let order: Vec<Coordinate> = Coordinate::reading_order().collect();
        assert_eq!(order.len(), 64);
        assert_eq!(order[0], Coordinate(7, 0));
        assert_eq!(order[7], Coordinate(7, 7));
        assert_eq!(order[8], Coordinate(6, 0));
        assert_eq!(order[63], Coordinate(0, 7));
    }

    #[test]
    fn test_algebraic_roundtrip() {
        let e4: Coordinate = "e4".parse().unwrap();
        assert_eq!(e4, Coordinate(3, 4));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!("h8".parse::<Coordinate>().unwrap(), Coordinate(7, 7));
    }

    #[test]
    fn test_invalid_notation() {
        for bad in ["", "e", "i1", "a9", "a10", "A1"] {
            assert_eq!(
                bad.parse::<Coordinate>(),
                Err(BoundsError::InvalidNotation {
                    notation: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Coordinate::try_from((1, 2)), Ok(Coordinate(1, 2)));
        assert_eq!(
            Coordinate::try_from((8, 2)),
            Err(BoundsError::OutOfBounds { row: 8, col: 2 })
        );
    }
}
