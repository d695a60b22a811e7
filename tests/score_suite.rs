use std::fs;

use serde::Deserialize;
use tempfile::TempDir;

use chess_score::board::{Board, FormatError, Side};
use chess_score::{evaluate_paths, render_table};

#[derive(Deserialize)]
struct Suite {
    boards: Vec<BoardCase>,
    malformed: Vec<MalformedCase>,
}

#[derive(Deserialize)]
struct BoardCase {
    name: String,
    ranks: Vec<String>,
    white: f64,
    black: f64,
}

#[derive(Deserialize)]
struct MalformedCase {
    name: String,
    source: String,
}

fn load_suite() -> Suite {
    let data = include_str!("data/boards.json");
    serde_json::from_str(data).expect("invalid boards.json")
}

#[test]
fn scores_match_suite() {
    for case in load_suite().boards {
        let board = Board::from_source(&case.ranks.join("\n"))
            .unwrap_or_else(|e| panic!("board {} failed to load: {e}", case.name));

        // Bit equality also separates 0 from -0
        assert_eq!(
            board.score(Side::White).to_bits(),
            case.white.to_bits(),
            "white score of {}",
            case.name
        );
        assert_eq!(
            board.score(Side::Black).to_bits(),
            case.black.to_bits(),
            "black score of {}",
            case.name
        );
    }
}

#[test]
fn malformed_sources_are_rejected() {
    for case in load_suite().malformed {
        let result = Board::from_source(&case.source);
        assert!(result.is_err(), "{} should not load", case.name);
    }
}

#[test]
fn suite_boards_survive_rendering() {
    for case in load_suite().boards {
        let board = Board::from_source(&case.ranks.join(" ")).expect("valid board");
        let rendered = board.to_source();
        let expected: Vec<&str> = case.ranks.iter().map(String::as_str).collect();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected, "{}", case.name);
    }
}

#[test]
fn files_are_scored_independently() {
    let suite = load_suite();
    let dir = TempDir::new().expect("create scratch dir");

    let mut paths = Vec::new();
    for case in &suite.boards {
        let path = dir.path().join(format!("{}.txt", case.name));
        fs::write(&path, case.ranks.join("\n")).expect("write board");
        paths.push(path);
    }
    let broken = dir.path().join("broken.txt");
    fs::write(&broken, &suite.malformed[0].source).expect("write board");
    paths.insert(1, broken);

    let reports = evaluate_paths(&paths);
    assert_eq!(reports.len(), suite.boards.len() + 1);
    assert!(matches!(
        reports[1].outcome,
        Err(FormatError::TooFewTokens { found: 63, .. })
    ));

    let scored: Vec<_> = reports
        .iter()
        .filter_map(|report| report.outcome.as_ref().ok())
        .collect();
    assert_eq!(scored.len(), suite.boards.len());
    for (evaluation, case) in scored.iter().zip(&suite.boards) {
        assert_eq!(evaluation.white, case.white, "{}", case.name);
        assert_eq!(evaluation.black, case.black, "{}", case.name);
    }

    let table = render_table(&reports);
    assert!(table.starts_with("| Chessboard filename "));
    assert!(table.contains("| broken.txt "));
    assert!(table.contains("| starting_position.txt | 139   | 139   |"));
    assert_eq!(table.lines().count(), reports.len() + 2);
    assert!(table.contains("| empty.txt             | 0     | 0     |"));
    assert!(table.contains("| lone_white_king.txt   | 100   | 0     |"));
}
