use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three fixed presets: how many digits and how many attempts
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
    }

    pub fn digits(&self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Normal => 5,
            Difficulty::Hard => 6,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Normal => 12,
            Difficulty::Hard => 15,
        }
    }

    /// Token the player types at the selection prompt
    pub fn selector(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Normal => "2",
            Difficulty::Hard => "3",
        }
    }

    /// Parse a selection-prompt token. Only the exact tokens are accepted.
    pub fn from_selector(token: &str) -> Option<Difficulty> {
        Difficulty::all()
            .into_iter()
            .find(|difficulty| difficulty.selector() == token)
    }
}
