use super::recorder::Recorder;
use crate::gameplay::Round;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One journal line: a round tagged with the game it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub game: String,
    #[serde(flatten)]
    pub round: Round,
}

/// Append-only JSON-lines file of rounds.
pub struct Journal {
    game: String,
    file: File,
}

impl Journal {
    /// Open (or create) the journal at `path`; rounds are tagged with `game`.
    pub fn open(path: impl AsRef<Path>, game: impl Into<String>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow::anyhow!("open journal {}: {}", path.display(), e))?;
        let game = game.into();
        log::info!("journaling game {} to {}", game, path.display());
        Ok(Self { game, file })
    }
}

impl Recorder for Journal {
    fn record(&mut self, round: &Round) -> anyhow::Result<()> {
        let entry = Entry {
            game: self.game.clone(),
            round: round.clone(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}
