use super::choice::Move;
use super::outcome::Outcome;
use crate::RoundNum;
use chrono::DateTime;
use chrono::Utc;

/// Record of one countdown-capture-resolve cycle.
///
/// Invalid attempts (no recognizable gesture) carry no round number,
/// no player move and no result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_num: Option<RoundNum>,
    pub player_move: Option<Move>,
    pub computer_move: Option<Move>,
    pub result: Option<Outcome>,
    pub time_of_round_end: Option<DateTime<Utc>>,
    #[serde(rename = "snapShot")]
    pub snapshot: Option<String>,
}

impl Round {
    /// A round as the game loop records it, stamped at `ended`.
    pub fn played(
        number: Option<RoundNum>,
        player: Option<Move>,
        computer: Move,
        result: Option<Outcome>,
        ended: DateTime<Utc>,
    ) -> Self {
        Self {
            round_num: number,
            player_move: player,
            computer_move: Some(computer),
            result,
            time_of_round_end: Some(ended),
            snapshot: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }
}
