use crate::secret::Secret;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// `position` is 0-based
    Revealed { position: usize, digit: u8 },
    AlreadyUsed,
    NoPositionAvailable,
}

/// Round-scoped hint state: which positions were disclosed and whether the
/// round's single hint has been spent. This is the only place the
/// one-hint-per-round rule is enforced.
#[derive(Debug, Clone, Default)]
pub struct HintRevealer {
    revealed: BTreeSet<usize>,
    used: bool,
}

impl HintRevealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A revealer whose hint counts as spent from the start
    pub fn disabled() -> Self {
        Self {
            revealed: BTreeSet::new(),
            used: true,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    /// The player's hint request: succeeds at most once per round. The
    /// hint is spent even when no position is left to show.
    pub fn request<R: Rng + ?Sized>(&mut self, secret: &Secret, rng: &mut R) -> HintOutcome {
        if self.used {
            return HintOutcome::AlreadyUsed;
        }
        self.used = true;
        self.reveal(secret, rng)
    }

    /// Disclose a random position not shown yet, ignoring the per-round limit.
    pub fn reveal<R: Rng + ?Sized>(&mut self, secret: &Secret, rng: &mut R) -> HintOutcome {
        let hidden: Vec<usize> = (0..secret.len())
            .filter(|i| !self.revealed.contains(i))
            .collect();

        let picked = hidden
            .choose(rng)
            .and_then(|&position| secret.digit_at(position).map(|digit| (position, digit)));

        match picked {
            Some((position, digit)) => {
                self.revealed.insert(position);
                log::debug!("hint revealed position {} ({} hidden before)", position, hidden.len());
                HintOutcome::Revealed { position, digit }
            }
            None => HintOutcome::NoPositionAvailable,
        }
    }
}
