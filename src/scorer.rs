use crate::guess::Guess;
use crate::secret::Secret;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// right digit, right position
    pub bulls: usize,
    /// right digit, wrong position
    pub cows: usize,
}

impl Score {
    pub fn is_win(&self, length: usize) -> bool {
        self.bulls == length
    }
}

pub fn score(secret: &Secret, guess: &Guess) -> Score {
    score_digits(secret.digits(), guess.digits())
}

/// Bulls and cows over two digit sequences of equal length.
///
/// Cows are the digit multiset overlap minus the bulls, so sequences with
/// repeated digits are scored consistently as well.
pub fn score_digits(secret: &[u8], guess: &[u8]) -> Score {
    let bulls = secret
        .iter()
        .zip(guess)
        .filter(|(s, g)| s == g)
        .count();

    let secret_counts = digit_counts(secret);
    let guess_counts = digit_counts(guess);
    let overlap: usize = secret_counts
        .iter()
        .zip(guess_counts.iter())
        .map(|(s, g)| *s.min(g))
        .sum();

    Score {
        bulls,
        cows: overlap - bulls,
    }
}

fn digit_counts(digits: &[u8]) -> [usize; 10] {
    let mut counts = [0; 10];
    for d in digits {
        if let Some(slot) = counts.get_mut(*d as usize) {
            *slot += 1;
        }
    }
    counts
}
