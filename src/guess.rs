use itertools::Itertools;
use thiserror::Error;

/// Literal a player types to ask for a hint instead of guessing
pub const HINT_KEYWORD: &str = "hint";

/// Why a line was rejected as a guess. The `Display` text is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("expected {expected} digits")]
    WrongLength { expected: usize },
    #[error("only digits are allowed")]
    NonDigit,
    #[error("the first digit must not be 0")]
    LeadingZero,
    #[error("digits must not repeat")]
    RepeatedDigit,
}

/// A guess that passed validation for a given length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    digits: Vec<u8>,
}

impl Guess {
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

/// What a line typed during play turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hint,
    Guess(Guess),
}

/// Classify one line of play input against the expected digit count.
///
/// Checks run in a fixed order and the first failure wins: the hint keyword,
/// then length, then digits only, then leading zero, then repeats.
pub fn parse_command(line: &str, expected: usize) -> Result<Command, InvalidGuess> {
    if line == HINT_KEYWORD {
        return Ok(Command::Hint);
    }

    if line.chars().count() != expected {
        return Err(InvalidGuess::WrongLength { expected });
    }

    let digits = line
        .chars()
        .map(|c| c.is_ascii_digit().then(|| c as u8 - b'0'))
        .collect::<Option<Vec<u8>>>()
        .ok_or(InvalidGuess::NonDigit)?;

    if digits.first() == Some(&0) {
        return Err(InvalidGuess::LeadingZero);
    }

    if !digits.iter().all_unique() {
        return Err(InvalidGuess::RepeatedDigit);
    }

    Ok(Command::Guess(Guess { digits }))
}
