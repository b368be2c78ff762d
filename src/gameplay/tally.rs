use super::outcome::Outcome;
use super::verdict::Verdict;
use crate::Score;

/// Running count of resolved rounds by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    user: Score,
    computer: Score,
    ties: Score,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::User => self.user += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn user(&self) -> Score {
        self.user
    }
    pub fn computer(&self) -> Score {
        self.computer
    }
    pub fn ties(&self) -> Score {
        self.ties
    }
    pub fn played(&self) -> Score {
        self.user + self.computer + self.ties
    }
    pub fn verdict(&self) -> Verdict {
        Verdict::from((self.user, self.computer))
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "user {} / computer {} / ties {}",
            self.user, self.computer, self.ties
        )
    }
}
