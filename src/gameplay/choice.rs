use crate::Arbitrary;

/// One of the three hand shapes.
///
/// Classifier labels are the lowercase names (`rock`, `paper`, `scissor`);
/// records serialize the capitalized variant names.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissor,
}

impl Move {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissor]
    }

    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissor,
            Self::Paper => Self::Rock,
            Self::Scissor => Self::Paper,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissor => "scissor",
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().expect("three moves")
    }
}

impl TryFrom<&str> for Move {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissor" => Ok(Self::Scissor),
            _ => Err("not a rock, paper or scissor gesture"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_relation_is_a_cycle() {
        for m in Move::all() {
            assert!(m.beats() != m);
            assert!(m.beats().beats().beats() == m);
        }
    }

    #[test]
    fn labels_parse_back() {
        for m in Move::all() {
            assert!(Move::try_from(m.label()) == Ok(m));
        }
    }

    #[test]
    fn unknown_labels_rejected() {
        assert!(Move::try_from("").is_err());
        assert!(Move::try_from("Rock").is_err());
        assert!(Move::try_from("scissors").is_err());
        assert!(Move::try_from("thumbs up").is_err());
    }

    #[test]
    fn random_is_always_a_move() {
        for _ in 0..64 {
            assert!(Move::all().contains(&Move::random()));
        }
    }
}
