//! End-to-end tests for the JSON-lines front end.

use serde_json::Value;
use tictoc::{Controller, GameConfig};

async fn run_script(script: &str) -> Vec<Value> {
    let mut output = Vec::new();
    tictoc::headless::run(
        Controller::new(&GameConfig::default()),
        script.as_bytes(),
        &mut output,
    )
    .await
    .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_win_is_reported() {
    let lines = run_script("move 0\nmove 3\nmove 1\nmove 4\nmove 2\n").await;

    let last = lines.last().unwrap();
    assert_eq!(last["type"], "state");
    assert_eq!(last["outcome"]["Win"], "X");
    assert_eq!(last["message"], "Player X wins!");
    assert_eq!(last["active"], false);
    // Initial state plus one per move.
    assert_eq!(lines.len(), 6);
}

#[tokio::test]
async fn test_invalid_input_is_silent() {
    let lines = run_script("move 0\nmove 0\nmove 99\nbogus\n\nquit\nmove 5\n").await;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["cells"][0], "X");
    assert_eq!(lines[1]["current_player"], "O");
}

#[tokio::test]
async fn test_end_game_clears_board() {
    let lines = run_script("move 4\nend\n").await;

    let last = lines.last().unwrap();
    assert_eq!(last["outcome"], "Abandoned");
    assert_eq!(last["cells"][4], "");
    assert_eq!(last["message"], "Game has ended. Thanks for playing!");
}
