use super::choice::Move;
use crate::vision::Color;

/// Result of a resolved round, from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    #[serde(rename = "Win")]
    User,
    #[serde(rename = "Lose")]
    Computer,
    Tie,
}

impl Outcome {
    /// Resolve a classifier label against the computer's move.
    /// Anything other than the three known tokens leaves the round unresolved.
    pub fn resolve(user: &str, cp: Move) -> Option<Self> {
        Move::try_from(user).ok().map(|user| Self::between(user, cp))
    }

    pub fn between(user: Move, cp: Move) -> Self {
        if user == cp {
            Self::Tie
        } else if user.beats() == cp {
            Self::User
        } else {
            Self::Computer
        }
    }

    /// Banner shown after the computer's move is revealed.
    pub fn banner(outcome: Option<Self>) -> (&'static str, Color) {
        match outcome {
            Some(Self::User) => ("You Win!!!", Color::Green),
            Some(Self::Computer) => ("You Lose", Color::Red),
            Some(Self::Tie) => ("Tie", Color::Orange),
            None => ("Try again", Color::Orange),
        }
    }

    /// Column label used by records and the dashboard.
    pub fn label(outcome: Option<Self>) -> &'static str {
        match outcome {
            Some(Self::User) => "Win",
            Some(Self::Computer) => "Lose",
            Some(Self::Tie) => "Tie",
            None => "Invalid",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::label(Some(*self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        use Move::*;
        let table = [
            (Rock, Rock, Outcome::Tie),
            (Rock, Paper, Outcome::Computer),
            (Rock, Scissor, Outcome::User),
            (Paper, Rock, Outcome::User),
            (Paper, Paper, Outcome::Tie),
            (Paper, Scissor, Outcome::Computer),
            (Scissor, Rock, Outcome::Computer),
            (Scissor, Paper, Outcome::User),
            (Scissor, Scissor, Outcome::Tie),
        ];
        for (user, cp, expected) in table {
            assert_eq!(Outcome::resolve(user.label(), cp), Some(expected));
        }
    }

    #[test]
    fn three_of_each() {
        let outcomes = Move::all()
            .into_iter()
            .flat_map(|u| Move::all().map(move |c| Outcome::between(u, c)))
            .collect::<Vec<_>>();
        assert_eq!(outcomes.iter().filter(|o| **o == Outcome::User).count(), 3);
        assert_eq!(outcomes.iter().filter(|o| **o == Outcome::Computer).count(), 3);
        assert_eq!(outcomes.iter().filter(|o| **o == Outcome::Tie).count(), 3);
    }

    #[test]
    fn invalid_input_is_unresolved() {
        for cp in Move::all() {
            assert_eq!(Outcome::resolve("", cp), None);
            assert_eq!(Outcome::resolve("thumbs up", cp), None);
            assert_eq!(Outcome::resolve("ROCK", cp), None);
        }
    }

    #[test]
    fn examples() {
        assert_eq!(Outcome::resolve("rock", Move::Scissor), Some(Outcome::User));
        assert_eq!(Outcome::resolve("scissor", Move::Rock), Some(Outcome::Computer));
        assert_eq!(Outcome::resolve("paper", Move::Paper), Some(Outcome::Tie));
        assert_eq!(Outcome::resolve("", Move::Rock), None);
    }

    #[test]
    fn banners() {
        assert_eq!(Outcome::banner(Some(Outcome::User)), ("You Win!!!", Color::Green));
        assert_eq!(Outcome::banner(Some(Outcome::Computer)), ("You Lose", Color::Red));
        assert_eq!(Outcome::banner(Some(Outcome::Tie)), ("Tie", Color::Orange));
        assert_eq!(Outcome::banner(None), ("Try again", Color::Orange));
    }

    #[test]
    fn serializes_from_player_side() {
        assert_eq!(serde_json::to_string(&Outcome::User).unwrap(), "\"Win\"");
        assert_eq!(serde_json::to_string(&Outcome::Computer).unwrap(), "\"Lose\"");
        assert_eq!(serde_json::to_string(&Outcome::Tie).unwrap(), "\"Tie\"");
    }
}
