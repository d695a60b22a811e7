//! Command-line driver: score board files and write the result table.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::report::{evaluate_paths, render_table};

/// Table file written when no `-o` is given
pub const DEFAULT_OUTPUT: &str = "result.txt";

/// Error type for command-line failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// The result table could not be written
    WriteFailed { path: PathBuf, reason: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::WriteFailed { path, reason } => {
                write!(f, "Cannot write {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "chess_score",
    about = "Score chessboards by material, halving threatened pieces",
    version
)]
pub struct Options {
    /// File the result table is written to
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Board files, 64 two-character tokens each
    #[arg(value_name = "BOARD", required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Score every input board and write the table. Returns the rendered table.
pub fn run(options: &Options) -> Result<String, CliError> {
    let reports = evaluate_paths(&options.inputs);
    let table = render_table(&reports);
    fs::write(&options.output, &table).map_err(|e| CliError::WriteFailed {
        path: options.output.clone(),
        reason: e.to_string(),
    })?;
    log::info!("wrote {}", options.output.display());
    Ok(table)
}
