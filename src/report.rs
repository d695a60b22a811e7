//! Multi-board evaluation and result tables.
//!
//! Boards are independent of each other, so they are loaded and scored on
//! scoped worker threads. A board that fails to load only affects its own
//! row of the table.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use parking_lot::Mutex;

use crate::board::{Board, Evaluation, FormatError};

const FILENAME_HEADER: &str = "Chessboard filename";
const SCORE_WIDTH: usize = 5;

/// Outcome of scoring one board file.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardReport {
    pub path: PathBuf,
    pub outcome: Result<Evaluation, FormatError>,
}

impl BoardReport {
    /// Load and score a single board file.
    pub fn evaluate(path: &Path) -> Self {
        let outcome = Board::from_path(path).map(|board| board.evaluate());
        if let Err(e) = &outcome {
            log::warn!("skipping {}: {e}", path.display());
        }
        BoardReport {
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// File name shown in the table
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Load and score every board, keeping the input order.
pub fn evaluate_paths<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<BoardReport> {
    if paths.is_empty() {
        return Vec::new();
    }

    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(paths.len());
    let chunk_size = paths.len().div_ceil(workers);
    let slots: Mutex<Vec<Option<BoardReport>>> = Mutex::new(vec![None; paths.len()]);

    thread::scope(|scope| {
        for (chunk_index, chunk) in paths.chunks(chunk_size).enumerate() {
            let slots = &slots;
            scope.spawn(move || {
                for (offset, path) in chunk.iter().enumerate() {
                    let report = BoardReport::evaluate(path.as_ref());
                    slots.lock()[chunk_index * chunk_size + offset] = Some(report);
                }
            });
        }
    });

    let reports: Vec<BoardReport> = slots.into_inner().into_iter().flatten().collect();
    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    log::info!(
        "evaluated {} boards ({} failed) on {workers} threads",
        reports.len(),
        failed
    );
    reports
}

/// Render reports as a table with one row per board.
///
/// ```text
/// | Chessboard filename | White | Black |
/// | ------------------- | ----- | ----- |
/// | board1.txt          | 139   | 139   |
/// ```
#[must_use]
pub fn render_table(reports: &[BoardReport]) -> String {
    let names: Vec<String> = reports.iter().map(BoardReport::file_name).collect();
    let width = names
        .iter()
        .map(|name| name.chars().count())
        .fold(FILENAME_HEADER.len(), usize::max);

    let mut table = format!("| {FILENAME_HEADER:width$} | White | Black |\n");
    table.push_str(&format!(
        "| {} | {} | {} |\n",
        "-".repeat(width),
        "-".repeat(SCORE_WIDTH),
        "-".repeat(SCORE_WIDTH)
    ));

    for (name, report) in names.iter().zip(reports) {
        let (white, black) = match &report.outcome {
            Ok(evaluation) => (evaluation.white.to_string(), evaluation.black.to_string()),
            Err(_) => ("error".to_string(), "error".to_string()),
        };
        table.push_str(&format!(
            "| {name:width$} | {white:<SCORE_WIDTH$} | {black:<SCORE_WIDTH$} |\n"
        ));
    }
    table
}
