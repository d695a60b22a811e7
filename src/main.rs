use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use chess_score::cli::{self, Options};

/// Environment variable holding the log filter
const LOG_ENV: &str = "CHESS_SCORE_LOG";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn")).init();

    let options = Options::parse();
    match cli::run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
