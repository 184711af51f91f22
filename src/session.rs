use crate::input::{Line, LineSource};
use crate::round::{play_round, RoundSettings};
use crate::stats::SessionStats;
use crate::ui;
use rand::Rng;
use std::io::{self, Write};

fn wants_replay(answer: &str) -> bool {
    matches!(answer, "y" | "Y")
}

/// Play rounds until the player declines a replay or input ends.
///
/// Statistics are printed after every round and returned at the end.
pub fn run_session<S, W, R>(
    input: &mut S,
    out: &mut W,
    rng: &mut R,
    settings: &RoundSettings,
) -> io::Result<SessionStats>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let mut stats = SessionStats::default();
    writeln!(out, "{}", ui::TITLE)?;

    loop {
        let result = play_round(input, out, rng, settings)?;
        stats.record(&result);
        writeln!(out, "{}", ui::session_stats(&stats))?;

        write!(out, "{}", ui::REPLAY_PROMPT)?;
        out.flush()?;
        match input.next_line()? {
            Line::Text(answer) if wants_replay(&answer) => continue,
            Line::Text(_) => break,
            Line::Closed => {
                writeln!(out)?;
                break;
            }
        }
    }

    writeln!(out, "{}", ui::FAREWELL)?;
    log::info!(
        "session over: {} played, {} won",
        stats.games_played,
        stats.wins
    );
    Ok(stats)
}
