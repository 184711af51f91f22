use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The number the player is trying to guess.
///
/// Always made of pairwise distinct decimal digits with a non-zero first
/// digit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    digits: Vec<u8>,
}

impl Secret {
    /// Draw a fresh secret of `length` digits from the caller's random source.
    ///
    /// The first digit comes from 1..=9, the rest are drawn without
    /// replacement from whatever is left of 0..=9.
    pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let first = rng.gen_range(1..=9u8);
        let mut pool: Vec<u8> = (0..=9u8).filter(|d| *d != first).collect();
        pool.shuffle(rng);

        let mut digits = Vec::with_capacity(length);
        digits.push(first);
        digits.extend(pool.into_iter().take(length.saturating_sub(1)));

        Self { digits }
    }

    /// Build a secret from text, returning `None` unless it is a well-formed
    /// secret (digits only, no leading zero, no repeats).
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()?;

        match digits.first() {
            Some(first) if *first != 0 && digits.iter().all_unique() => Some(Self { digits }),
            _ => None,
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digit_at(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
