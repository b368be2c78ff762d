//! Dashboard Binary
//!
//! Serves the match history page. Sample games are always shown;
//! pass --history to add the games from a round journal.

use clap::Parser;
use roshambo::archive::History;
use roshambo::dashboard::*;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let mut history = History::sample();
    if let Some(ref path) = args.history {
        history.extend(History::load(path)?);
    }
    Server::run(args.addr(), history).await?;
    Ok(())
}
