//! Play Binary
//!
//! Rock-paper-scissors in the terminal. The keyboard stands in for the
//! gesture model: type rock, paper or scissor (or r/p/s) during the
//! countdown. Type q to quit.
//!
//! Options: --rounds, --seconds, --journal, --game

use clap::Parser;
use roshambo::archive::Journal;
use roshambo::devices::*;
use roshambo::table::*;

fn main() -> anyhow::Result<()> {
    roshambo::log();
    let args = Args::parse();
    let keyboard = Keyboard::spawn();
    let terminal = Terminal::new(keyboard.keys());
    let mut table = Table::new(Settings::from(&args), keyboard, terminal);
    if let Some(ref path) = args.journal {
        let game = args.game.clone().unwrap_or_else(|| {
            chrono::Utc::now()
                .format("game-%Y%m%d-%H%M%S")
                .to_string()
        });
        table = table.with_recorder(Journal::open(path, game)?);
    }
    match table.play(&mut Synthetic::default()) {
        Ok(tally) => println!("{}", tally.verdict()),
        Err(Halt::Quit) => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
