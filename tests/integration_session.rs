use bulls_and_cows::input::ScriptedLineSource;
use bulls_and_cows::round::RoundSettings;
use bulls_and_cows::secret::Secret;
use bulls_and_cows::session::run_session;
use bulls_and_cows::{Difficulty, SessionStats};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn easy() -> RoundSettings {
    RoundSettings {
        difficulty: Some(Difficulty::Easy),
        hints: true,
    }
}

/// The secret the session will draw first for `seed` at Easy
fn first_secret(seed: u64) -> Secret {
    Secret::generate(Difficulty::Easy.digits(), &mut StdRng::seed_from_u64(seed))
}

fn wrong_guess(secret: &Secret) -> String {
    if secret.to_string() == "1234" {
        "5678".to_string()
    } else {
        "1234".to_string()
    }
}

#[test]
fn single_round_then_decline() {
    let seed = 77;
    let secret = first_secret(seed);
    let mut input = ScriptedLineSource::new([secret.to_string(), "n".to_string()]);
    let mut out = Vec::new();

    let stats = run_session(&mut input, &mut out, &mut StdRng::seed_from_u64(seed), &easy()).unwrap();

    assert_eq!(
        stats,
        SessionStats {
            games_played: 1,
            wins: 1,
            total_attempts: 1,
        }
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Bulls and Cows\n"));
    assert!(text.contains("Stats: played 1, won 1, lost 0, average attempts per game 1.00"));
    assert!(text.ends_with("Thanks for playing.\n"));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn replay_on_capital_y_then_stop_at_end_of_input() {
    let seed = 5;
    let secret = first_secret(seed);
    let wrong = wrong_guess(&secret);
    // round 1: hint, invalid line, wrong guess, win, replay; round 2: input ends
    let mut input = ScriptedLineSource::new([
        "hint".to_string(),
        "0000".to_string(),
        wrong,
        secret.to_string(),
        "Y".to_string(),
    ]);
    let mut out = Vec::new();

    let stats = run_session(&mut input, &mut out, &mut StdRng::seed_from_u64(seed), &easy()).unwrap();

    assert_eq!(
        stats,
        SessionStats {
            games_played: 2,
            wins: 1,
            total_attempts: 2,
        }
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: the first digit must not be 0."));
    assert!(text.contains("Stats: played 1, won 1, lost 0, average attempts per game 2.00"));
    assert!(text.contains("Stats: played 2, won 1, lost 1, average attempts per game 1.00"));
    assert!(text.ends_with("Thanks for playing.\n"));
}

#[test]
fn only_exact_y_replays() {
    let seed = 9;
    let secret = first_secret(seed);
    let mut input = ScriptedLineSource::new([
        secret.to_string(),
        "yes".to_string(),
        secret.to_string(),
    ]);
    let mut out = Vec::new();
    let stats = run_session(&mut input, &mut out, &mut StdRng::seed_from_u64(seed), &easy()).unwrap();

    assert_eq!(stats.games_played, 1);
    // the line after the declined replay is never read
    assert_eq!(input.remaining(), 1);
}

#[test]
fn exhausted_round_counts_as_loss_with_full_attempts() {
    let seed = 13;
    let secret = first_secret(seed);

    let mut lines = vec![wrong_guess(&secret); 10];
    lines.push("n".into());
    let mut input = ScriptedLineSource::new(lines);
    let mut out = Vec::new();

    let stats = run_session(&mut input, &mut out, &mut StdRng::seed_from_u64(seed), &easy()).unwrap();

    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.wins, 0);
    assert_eq!(stats.total_attempts, 10);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("The secret number was: {}", secret)));
    assert!(text.contains("lost 1, average attempts per game 10.00"));
}
