use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::error::FormatError;
use super::{Board, Coordinate, Piece, PieceKind, Side, Tile, BOARD_SIZE};

/// Label used in errors for sources that did not come from a file
const MEMORY_LABEL: &str = "<memory>";

const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

impl Board {
    /// Parse a board from its textual source.
    ///
    /// The source holds exactly 64 whitespace-separated two-character tokens,
    /// rank 8 first and file a to h within each rank. `--` is an empty tile;
    /// otherwise the first character is the piece kind and the second the side.
    pub fn from_source(source: &str) -> Result<Self, FormatError> {
        Self::parse_labeled(source, MEMORY_LABEL)
    }

    /// Read and parse a board file.
    ///
    /// Errors name the file by its file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        let source = fs::read_to_string(path).map_err(|e| FormatError::Unreadable {
            label: label.clone(),
            reason: e.to_string(),
        })?;
        Self::parse_labeled(&source, &label)
    }

    fn parse_labeled(source: &str, label: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = source.split_whitespace().collect();
        if tokens.len() < TILE_COUNT {
            return Err(FormatError::TooFewTokens {
                label: label.to_string(),
                found: tokens.len(),
            });
        }
        if tokens.len() > TILE_COUNT {
            return Err(FormatError::TooManyTokens {
                label: label.to_string(),
                found: tokens.len(),
            });
        }

        let mut board = Board::empty();
        for (square, token) in Coordinate::reading_order().zip(tokens) {
            if let Some(piece) = parse_token(token, square, label)? {
                board.tiles[square.row()][square.col()] = Tile::Occupied(piece);
            }
        }

        log::debug!(
            "loaded board {label}: {} white, {} black pieces",
            board.pieces(Side::White).count(),
            board.pieces(Side::Black).count()
        );
        Ok(board)
    }

    /// Render the board in its source format: eight lines of eight tokens,
    /// rank 8 first.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for rank in self.tiles.iter().rev() {
            let tokens: Vec<String> = rank.iter().map(|tile| tile.token()).collect();
            rows.push(tokens.join(" "));
        }
        let mut source = rows.join("\n");
        source.push('\n');
        source
    }
}

/// Decode one token. `Ok(None)` is an empty tile.
fn parse_token(token: &str, square: Coordinate, label: &str) -> Result<Option<Piece>, FormatError> {
    let mut chars = token.chars();
    let (Some(kind_code), Some(side_code), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(FormatError::MalformedToken {
            label: label.to_string(),
            token: token.to_string(),
            square,
        });
    };

    if token == "--" {
        return Ok(None);
    }

    let side = Side::from_code(side_code).ok_or_else(|| FormatError::InvalidSide {
        label: label.to_string(),
        token: token.to_string(),
        square,
    })?;
    let kind = PieceKind::from_code(kind_code).ok_or_else(|| FormatError::InvalidKind {
        label: label.to_string(),
        token: token.to_string(),
        square,
    })?;

    Ok(Some(Piece::new(square, side, kind)))
}

impl FromStr for Board {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_source(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}
