use super::journal::Entry;
use crate::gameplay::Move;
use crate::gameplay::Outcome;
use crate::gameplay::Round;
use std::collections::BTreeMap;
use std::path::Path;

/// Rounds grouped by game name, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct History {
    games: BTreeMap<String, Vec<Round>>,
}

impl History {
    /// Two hand-written games, one of them with an invalid attempt.
    pub fn sample() -> Self {
        fn round(n: Option<usize>, player: Option<Move>, cp: Option<Move>, result: Option<Outcome>) -> Round {
            Round {
                round_num: n,
                player_move: player,
                computer_move: cp,
                result,
                time_of_round_end: None,
                snapshot: None,
            }
        }
        use Move::*;
        let mut history = Self::default();
        history.insert(
            "game1",
            vec![
                round(Some(1), Some(Scissor), Some(Rock), Some(Outcome::Computer)),
                round(Some(2), Some(Paper), Some(Rock), Some(Outcome::User)),
                round(Some(3), Some(Scissor), Some(Scissor), Some(Outcome::Tie)),
                round(None, None, None, None),
            ],
        );
        history.insert(
            "game2",
            vec![round(Some(1), Some(Scissor), Some(Rock), Some(Outcome::Computer))],
        );
        history
    }

    /// Read a round journal. Blank lines are skipped; malformed lines fail the load.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read history {}: {}", path.display(), e))?;
        let mut history = Self::default();
        for (i, line) in text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let entry = serde_json::from_str::<Entry>(line)
                .map_err(|e| anyhow::anyhow!("{}:{}: {}", path.display(), i + 1, e))?;
            history.push(entry.game, entry.round);
        }
        log::info!("loaded {} games from {}", history.len(), path.display());
        Ok(history)
    }

    pub fn insert(&mut self, game: impl Into<String>, rounds: Vec<Round>) {
        self.games.insert(game.into(), rounds);
    }

    pub fn push(&mut self, game: impl Into<String>, round: Round) {
        self.games.entry(game.into()).or_default().push(round);
    }

    /// Merge another history in; rounds of same-named games are appended.
    pub fn extend(&mut self, other: Self) {
        for (game, rounds) in other.games {
            self.games.entry(game).or_default().extend(rounds);
        }
    }

    pub fn games(&self) -> impl Iterator<Item = (&str, &[Round])> {
        self.games.iter().map(|(g, r)| (g.as_str(), r.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::Journal;
    use crate::archive::Recorder;

    #[test]
    fn sample_shape() {
        let history = History::sample();
        let games = history.games().collect::<Vec<_>>();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].0, "game1");
        assert_eq!(games[0].1.len(), 4);
        assert!(!games[0].1[3].is_valid());
        assert_eq!(games[1].0, "game2");
        assert_eq!(games[1].1[0].result, Some(Outcome::Computer));
    }

    #[test]
    fn serializes_as_map_of_games() {
        let json = serde_json::to_value(History::sample()).unwrap();
        assert_eq!(json["game1"][1]["playerMove"], "Paper");
        assert_eq!(json["game1"][1]["result"], "Win");
        assert_eq!(json["game2"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn load_groups_journal_by_game() {
        let path = std::env::temp_dir().join(format!("roshambo-history-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let round = Round::played(Some(1), Some(Move::Rock), Move::Rock, Some(Outcome::Tie), chrono::Utc::now());
        let mut morning = Journal::open(&path, "morning").unwrap();
        morning.record(&round).unwrap();
        morning.record(&round).unwrap();
        Journal::open(&path, "night").unwrap().record(&round).unwrap();
        let history = History::load(&path).unwrap();
        let games = history.games().map(|(g, r)| (g.to_string(), r.len())).collect::<Vec<_>>();
        assert_eq!(games, vec![("morning".to_string(), 2), ("night".to_string(), 1)]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_rejects_garbage() {
        let path = std::env::temp_dir().join(format!("roshambo-garbage-{}.jsonl", std::process::id()));
        std::fs::write(&path, "\n{not json}\n").unwrap();
        let err = History::load(&path).unwrap_err();
        assert!(err.to_string().contains(":2:"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn extend_appends_same_game() {
        let mut history = History::sample();
        history.extend(History::sample());
        assert_eq!(history.len(), 2);
        assert_eq!(history.games().next().unwrap().1.len(), 8);
    }
}
