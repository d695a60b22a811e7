//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Attack patterns of each piece kind
//! - `scenarios.rs` - Threat classification and scoring on small positions
//! - `proptest.rs` - Property-based tests over random boards


use crate::board::{Board, Coordinate};

/// Build a board from `(square, token)` pairs such as `("e4", "vb")`.
/// Every other square is empty.
pub(super) fn make_board(placements: &[(&str, &str)]) -> Board {
    let mut tokens = vec!["--"; 64];
    for &(square, token) in placements {
        let coordinate: Coordinate = square.parse().expect("valid square");
        let index = (7 - coordinate.row()) * 8 + coordinate.col();
        tokens[index] = token;
    }
    Board::from_source(&tokens.join(" ")).expect("valid board")
}

/// Parse a list of algebraic squares into coordinates.
pub(super) fn squares(names: &[&str]) -> Vec<Coordinate> {
    names
        .iter()
        .map(|name| name.parse().expect("valid square"))
        .collect()
}
