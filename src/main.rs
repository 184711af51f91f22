use bulls_and_cows::{
    config::{ConfigStore, FileConfigStore, Overrides, RuntimeSettings},
    input::ReaderLineSource,
    session::run_session,
    Difficulty,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::{error::Error, io, path::PathBuf};

/// guess the secret number: bulls are right digits in the right place, cows
/// are right digits in the wrong place
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Classic Bulls and Cows in the terminal. Guess a secret number made of unique digits; type \"hint\" once per round to reveal one digit."
)]
pub struct Cli {
    /// play every round at this difficulty instead of asking
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// turn off the one hint per round
    #[clap(long)]
    no_hints: bool,

    /// seed the random number generator for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// read settings from this JSON file instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// log more to stderr (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            difficulty: self.difficulty,
            hints: self.no_hints.then_some(false),
            seed: self.seed,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.config_store().load();
    let settings = RuntimeSettings::resolve(&cli.overrides(), &config);

    let mut rng = match settings.seed {
        Some(seed) => {
            log::debug!("seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut input = ReaderLineSource::stdin();
    let mut out = io::stdout().lock();
    run_session(&mut input, &mut out, &mut rng, &settings.round)?;

    Ok(())
}
