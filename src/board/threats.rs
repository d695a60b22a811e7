//! Threat aggregation and scoring.
//!
//! A piece is threatened when at least one opposing piece attacks it.
//! Threatened pieces count for half their value, everything else for full.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Coordinate, Piece, Side};

/// Scores of both sides for one board
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    pub white: f64,
    pub black: f64,
}

impl Evaluation {
    #[inline]
    #[must_use]
    pub const fn for_side(&self, side: Side) -> f64 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}

impl Board {
    /// Coordinates of `side` pieces attacked by at least one opposing piece.
    #[must_use]
    pub fn threatened_coordinates(&self, side: Side) -> BTreeSet<Coordinate> {
        self.pieces(side.opponent())
            .flat_map(|attacker| attacker.attacked_squares(self))
            .collect()
    }

    /// Coordinates of `side` pieces that no opposing piece attacks.
    #[must_use]
    pub fn unthreatened_coordinates(&self, side: Side) -> BTreeSet<Coordinate> {
        let threatened = self.threatened_coordinates(side);
        self.piece_coordinates(side)
            .difference(&threatened)
            .copied()
            .collect()
    }

    /// Material score of `side`: full value for unthreatened pieces, half
    /// value for threatened ones.
    #[must_use]
    pub fn score(&self, side: Side) -> f64 {
        let unthreatened = self.value_of(&self.unthreatened_coordinates(side));
        let threatened = self.value_of(&self.threatened_coordinates(side));
        let score = unthreatened + threatened / 2.0;
        log::trace!("{side} score {score} (unthreatened {unthreatened}, threatened {threatened})");
        score
    }

    /// Scores of both sides
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        Evaluation {
            white: self.score(Side::White),
            black: self.score(Side::Black),
        }
    }

    fn value_of(&self, coordinates: &BTreeSet<Coordinate>) -> f64 {
        coordinates
            .iter()
            .filter_map(|&coordinate| self.piece_at(coordinate))
            .map(Piece::unthreatened_value)
            .fold(0.0, |total, value| total + value)
    }
}
