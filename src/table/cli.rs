use super::settings::Settings;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Rock-paper-scissors against the computer", long_about = None)]
pub struct Args {
    /// Rounds to resolve before the match ends (invalid gestures don't count)
    #[arg(long, default_value_t = crate::ROUNDS)]
    pub rounds: usize,
    /// Countdown length of each round, in seconds
    #[arg(long, default_value_t = crate::SECONDS_PER_ROUND)]
    pub seconds: u64,
    /// Append every round to this JSON-lines journal
    #[arg(long)]
    pub journal: Option<PathBuf>,
    /// Game name used in the journal (defaults to the start time)
    #[arg(long)]
    pub game: Option<String>,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            rounds: args.rounds,
            round: Duration::from_secs(args.seconds),
            ..Self::default()
        }
    }
}
