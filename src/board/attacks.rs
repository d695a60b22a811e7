//! Attack patterns for each piece kind.
//!
//! Leapers (pawn, knight, king) look at a fixed list of offsets. Sliders
//! (bishop, rook, queen) cast a ray in each of their directions and only
//! look at the first occupied square on it.

use std::collections::BTreeSet;

use super::error::BoundsError;
use super::{Board, Coordinate, Piece, PieceKind};

/// Orthogonal ray directions as (row, col) deltas
const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions as (row, col) deltas
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Piece {
    /// Every coordinate holding an opposing piece that this piece attacks.
    ///
    /// Empty squares and squares holding own-side pieces are never included.
    #[must_use]
    pub fn attacked_squares(&self, board: &Board) -> BTreeSet<Coordinate> {
        match self.kind() {
            PieceKind::Pawn => {
                let forward = self.side().pawn_direction();
                self.step_targets(board, &[(forward, 1), (forward, -1)])
            }
            PieceKind::Knight => self.step_targets(board, &KNIGHT_OFFSETS),
            PieceKind::King => self.step_targets(board, &KING_OFFSETS),
            PieceKind::Bishop => self.ray_targets(board, &DIAGONAL),
            PieceKind::Rook => self.ray_targets(board, &ORTHOGONAL),
            PieceKind::Queen => self
                .ray_targets(board, &ORTHOGONAL)
                .into_iter()
                .chain(self.ray_targets(board, &DIAGONAL))
                .collect(),
        }
    }

    /// Single-step targets: each offset from this piece that lands on an
    /// opposing piece.
    fn step_targets(&self, board: &Board, offsets: &[(isize, isize)]) -> BTreeSet<Coordinate> {
        offsets
            .iter()
            .filter_map(|&(row_delta, col_delta)| self.coordinate().offset(row_delta, col_delta))
            .filter(|&target| self.is_opponent_at(board, target))
            .collect()
    }

    /// Ray targets: the first occupied square along each direction, kept only
    /// if it holds an opposing piece. Own pieces block without being attacked.
    fn ray_targets(&self, board: &Board, directions: &[(isize, isize)]) -> BTreeSet<Coordinate> {
        directions
            .iter()
            .filter_map(|&(row_delta, col_delta)| {
                board.first_occupied(self.coordinate(), row_delta, col_delta)
            })
            .filter(|&target| self.is_opponent_at(board, target))
            .collect()
    }

    fn is_opponent_at(&self, board: &Board, target: Coordinate) -> bool {
        board
            .piece_at(target)
            .is_some_and(|other| other.side() != self.side())
    }
}

impl Board {
    /// Coordinates attacked by the piece standing on `coordinate`.
    ///
    /// An empty tile attacks nothing.
    pub fn attacked_by(&self, coordinate: Coordinate) -> Result<BTreeSet<Coordinate>, BoundsError> {
        Ok(self
            .get_tile(coordinate)?
            .piece()
            .map(|piece| piece.attacked_squares(self))
            .unwrap_or_default())
    }
}
