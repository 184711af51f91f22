#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
// Drives the compiled binary over stdin/stdout. Every run points --config at
// a file inside a temp dir so a real user config is never picked up.

use assert_cmd::Command;
use bulls_and_cows::secret::Secret;
use bulls_and_cows::Difficulty;
use predicates::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::tempdir;

fn bulls(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bulls").expect("bulls binary");
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn win_with_seeded_secret() {
    let dir = tempdir().unwrap();
    let secret = Secret::generate(Difficulty::Normal.digits(), &mut StdRng::seed_from_u64(42));

    bulls(&dir.path().join("config.json"))
        .args(["--seed", "42", "--difficulty", "normal"])
        .write_stdin(format!("01234\n{}\nn\n", secret))
        .assert()
        .success()
        .stdout(predicate::str::contains("Difficulty: Normal - 5 digits, 12 attempts"))
        .stdout(predicate::str::contains("Error: the first digit must not be 0."))
        .stdout(predicate::str::contains(format!(
            "Congratulations! You guessed {} in 1 attempt.",
            secret
        )))
        .stdout(predicate::str::contains("Stats: played 1, won 1, lost 0"))
        .stdout(predicate::str::ends_with("Thanks for playing.\n"));
}

#[test]
fn empty_stdin_exits_cleanly() {
    let dir = tempdir().unwrap();

    bulls(&dir.path().join("config.json"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose difficulty:"))
        .stdout(predicate::str::contains("Attempt 1/10."))
        .stdout(predicate::str::contains("Stats: played 1, won 0, lost 1"))
        .stdout(predicate::str::contains("Thanks for playing."));
}

#[test]
fn config_file_preselects_difficulty_and_disables_hints() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "difficulty": "hard", "hints": false }"#).unwrap();

    bulls(&path)
        .write_stdin("hint\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose difficulty:").not())
        .stdout(predicate::str::contains("Attempt 1/15."))
        .stdout(predicate::str::contains("Hint already used."));
}

#[test]
fn malformed_config_warns_on_stderr_and_plays_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json").unwrap();

    bulls(&path)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempt 1/12."))
        .stderr(predicate::str::contains("malformed config"));
}

#[test]
fn debug_logging_shows_secret_on_stderr_only() {
    let dir = tempdir().unwrap();
    let secret = Secret::generate(Difficulty::Easy.digits(), &mut StdRng::seed_from_u64(7));

    bulls(&dir.path().join("config.json"))
        .args(["--seed", "7", "-d", "easy", "-vv"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("secret: {}", secret)))
        .stdout(predicate::str::contains(secret.to_string()).not());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::cargo_bin("bulls")
        .expect("bulls binary")
        .arg("--nope")
        .assert()
        .failure();
}
