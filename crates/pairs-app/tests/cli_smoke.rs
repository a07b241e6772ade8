use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn plays_a_seeded_game_and_prints_the_result() {
    Command::cargo_bin("pairs")
        .unwrap()
        .args(["--deck-size", "18", "--opponent", "computer", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game 1:"));
}

#[test]
fn json_flag_emits_a_snapshot() {
    Command::cargo_bin("pairs")
        .unwrap()
        .args([
            "--deck-size", "24", "--opponent", "user", "--games", "2", "--seed", "11", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"gameend\""))
        .stdout(predicate::str::contains("\"ladder\""));
}

#[test]
fn rejects_an_unsupported_deck_size() {
    Command::cargo_bin("pairs")
        .unwrap()
        .args(["--deck-size", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deck size must be 18, 24 or 32"));
}
