use crate::round::RoundResult;

/// Counters aggregated over every round played in this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub wins: u32,
    pub total_attempts: u32,
}

impl SessionStats {
    /// Fold a finished round into the totals
    pub fn record(&mut self, result: &RoundResult) {
        self.games_played += 1;
        if result.won() {
            self.wins += 1;
        }
        self.total_attempts += result.attempts_used;
    }

    pub fn losses(&self) -> u32 {
        self.games_played - self.wins
    }

    /// Mean attempts per game, 0.0 before any game was played
    pub fn average_attempts(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.games_played as f64
        }
    }
}
