pub mod board;
pub mod cli;
pub mod report;

pub use board::{Board, Coordinate, Evaluation, Piece, PieceKind, Side};
pub use report::{evaluate_paths, render_table, BoardReport};
