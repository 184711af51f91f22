use crate::difficulty::Difficulty;
use crate::guess::{parse_command, Command, InvalidGuess};
use crate::hint::{HintOutcome, HintRevealer};
use crate::input::{Line, LineSource};
use crate::scorer::{score, Score};
use crate::secret::Secret;
use crate::ui;
use rand::Rng;
use std::io::{self, Write};

/// Per-round knobs resolved from CLI flags and the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    /// Skip the selection prompt and always play this preset
    pub difficulty: Option<Difficulty>,
    /// Whether the round's single hint may be asked for
    pub hints: bool,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            difficulty: None,
            hints: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum RoundOutcome {
    Won,
    Exhausted,
    /// Input ended mid-round; counted as a loss
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub attempts_used: u32,
}

impl RoundResult {
    pub fn won(&self) -> bool {
        self.outcome == RoundOutcome::Won
    }
}

/// What the round has to say about one line of play input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Invalid(InvalidGuess),
    Hint(HintOutcome),
    Scored(Score),
    Solved { secret: Secret, attempts: u32 },
    /// The line arrived after the round was decided and was ignored.
    /// `run_round` never produces this; it guards direct library callers.
    RoundOver,
}

/// represents one round being played: the secret and everything the player
/// has spent against it so far
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: Secret,
    attempts_used: u32,
    hints: HintRevealer,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Start a round with a freshly generated secret
    pub fn start<R: Rng + ?Sized>(difficulty: Difficulty, hints: bool, rng: &mut R) -> Self {
        let secret = Secret::generate(difficulty.digits(), rng);
        Self::build(difficulty, secret, hints)
    }

    /// Play against a known secret. `None` unless the secret has exactly
    /// the difficulty's digit count.
    pub fn with_secret(difficulty: Difficulty, secret: Secret, hints: bool) -> Option<Self> {
        (secret.len() == difficulty.digits()).then(|| Self::build(difficulty, secret, hints))
    }

    fn build(difficulty: Difficulty, secret: Secret, hints: bool) -> Self {
        Self {
            difficulty,
            secret,
            attempts_used: 0,
            hints: if hints {
                HintRevealer::new()
            } else {
                HintRevealer::disabled()
            },
            outcome: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn has_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Interpret one line typed during play.
    ///
    /// Only a well-formed guess consumes an attempt; rejected lines and hint
    /// requests leave the attempt counter alone.
    pub fn handle_line<R: Rng + ?Sized>(&mut self, line: &str, rng: &mut R) -> Feedback {
        if self.has_finished() {
            return Feedback::RoundOver;
        }

        let guess = match parse_command(line, self.difficulty.digits()) {
            Err(reason) => return Feedback::Invalid(reason),
            Ok(Command::Hint) => return Feedback::Hint(self.hints.request(&self.secret, rng)),
            Ok(Command::Guess(guess)) => guess,
        };

        self.attempts_used += 1;
        let score = score(&self.secret, &guess);
        log::trace!(
            "attempt {}: {} bulls, {} cows",
            self.attempts_used,
            score.bulls,
            score.cows
        );

        if score.is_win(self.difficulty.digits()) {
            self.outcome = Some(RoundOutcome::Won);
            return Feedback::Solved {
                secret: self.secret.clone(),
                attempts: self.attempts_used,
            };
        }

        if self.attempts_used >= self.difficulty.max_attempts() {
            self.outcome = Some(RoundOutcome::Exhausted);
        }
        Feedback::Scored(score)
    }

    /// Input ended before the round was decided
    pub fn abandon(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(RoundOutcome::InputClosed);
        }
    }

    /// Result of the round; an undecided round reads as abandoned
    pub fn result(&self) -> RoundResult {
        RoundResult {
            outcome: self.outcome.unwrap_or(RoundOutcome::InputClosed),
            attempts_used: self.attempts_used,
        }
    }
}

/// Prompt until a valid preset token arrives. End of input picks the easiest
/// preset.
pub fn select_difficulty<S, W>(input: &mut S, out: &mut W) -> io::Result<Difficulty>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(out, "{}", ui::difficulty_menu())?;
        out.flush()?;

        match input.next_line()? {
            Line::Closed => return Ok(Difficulty::default()),
            Line::Text(token) => match Difficulty::from_selector(&token) {
                Some(difficulty) => return Ok(difficulty),
                None => writeln!(out, "{}", ui::INVALID_SELECTION)?,
            },
        }
    }
}

/// Play one full round: difficulty, secret, then the guess loop until the
/// round is won, out of attempts, or input ends.
pub fn play_round<S, W, R>(
    input: &mut S,
    out: &mut W,
    rng: &mut R,
    settings: &RoundSettings,
) -> io::Result<RoundResult>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let difficulty = match settings.difficulty {
        Some(difficulty) => {
            writeln!(out, "{}", ui::preselected(difficulty))?;
            difficulty
        }
        None => select_difficulty(input, out)?,
    };

    let mut round = Round::start(difficulty, settings.hints, rng);
    log::info!("round started: {}", difficulty);
    log::debug!("secret: {}", round.secret());

    run_round(&mut round, input, out, rng)
}

/// Drive an already started round to its end
pub fn run_round<S, W, R>(
    round: &mut Round,
    input: &mut S,
    out: &mut W,
    rng: &mut R,
) -> io::Result<RoundResult>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    while !round.has_finished() {
        write!(
            out,
            "{}",
            ui::attempt_prompt(round.attempts_used() + 1, round.difficulty().max_attempts())
        )?;
        out.flush()?;

        match input.next_line()? {
            Line::Closed => {
                writeln!(out)?;
                round.abandon();
            }
            Line::Text(line) => {
                let feedback = round.handle_line(&line, rng);
                writeln!(out, "{}", ui::feedback(&feedback))?;
            }
        }
    }

    if round.outcome() == Some(RoundOutcome::Exhausted) {
        writeln!(out, "{}", ui::out_of_attempts(round.secret()))?;
    }

    let result = round.result();
    log::info!(
        "round finished: {} after {} attempts",
        result.outcome,
        result.attempts_used
    );
    Ok(result)
}
