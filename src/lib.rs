// Library surface for the binary, headless integration tests and reuse.
// Everything that touches stdin/stdout goes through `input::LineSource` and
// `std::io::Write` so rounds can be driven without a terminal.
pub mod app_dirs;
pub mod config;
pub mod difficulty;
pub mod guess;
pub mod hint;
pub mod input;
pub mod round;
pub mod scorer;
pub mod secret;
pub mod session;
pub mod stats;
pub mod ui;

pub use difficulty::Difficulty;
pub use round::{RoundOutcome, RoundResult};
pub use stats::SessionStats;
