use crate::difficulty::Difficulty;
use crate::guess::HINT_KEYWORD;
use crate::hint::HintOutcome;
use crate::round::Feedback;
use crate::secret::Secret;
use crate::stats::SessionStats;

pub const TITLE: &str = "Bulls and Cows";
pub const FAREWELL: &str = "Thanks for playing.";
pub const REPLAY_PROMPT: &str = "Play again? (y/n): ";
pub const INVALID_SELECTION: &str = "Invalid choice. Enter 1, 2 or 3.";

pub fn difficulty_menu() -> String {
    let mut menu = String::from("Choose difficulty:\n");
    for difficulty in Difficulty::all() {
        menu.push_str(&format!(
            "{}) {} - {} digits, {} attempts\n",
            difficulty.selector(),
            difficulty,
            difficulty.digits(),
            difficulty.max_attempts()
        ));
    }
    menu.push_str("Your choice (1/2/3): ");
    menu
}

pub fn preselected(difficulty: Difficulty) -> String {
    format!(
        "Difficulty: {} - {} digits, {} attempts",
        difficulty,
        difficulty.digits(),
        difficulty.max_attempts()
    )
}

/// `attempt` is 1-based
pub fn attempt_prompt(attempt: u32, max_attempts: u32) -> String {
    format!(
        "Attempt {}/{}. Enter a number or \"{}\": ",
        attempt, max_attempts, HINT_KEYWORD
    )
}

pub fn feedback(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Invalid(reason) => format!("Error: {}.", reason),
        Feedback::Hint(HintOutcome::Revealed { position, digit }) => {
            format!("Hint: position {} = {}", position + 1, digit)
        }
        Feedback::Hint(HintOutcome::AlreadyUsed) => "Hint already used.".to_string(),
        Feedback::Hint(HintOutcome::NoPositionAvailable) => {
            "No positions left to reveal.".to_string()
        }
        Feedback::Scored(score) => format!("Bulls: {}, Cows: {}", score.bulls, score.cows),
        Feedback::Solved { secret, attempts } => format!(
            "Congratulations! You guessed {} in {} {}.",
            secret,
            attempts,
            plural(*attempts, "attempt", "attempts")
        ),
        Feedback::RoundOver => "The round is already over.".to_string(),
    }
}

pub fn out_of_attempts(secret: &Secret) -> String {
    format!("Out of attempts. The secret number was: {}", secret)
}

pub fn session_stats(stats: &SessionStats) -> String {
    format!(
        "Stats: played {}, won {}, lost {}, average attempts per game {:.2}",
        stats.games_played,
        stats.wins,
        stats.losses(),
        stats.average_attempts()
    )
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
