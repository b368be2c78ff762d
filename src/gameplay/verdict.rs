use crate::Score;
use crate::vision::Color;

/// Final summary line of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    text: String,
    color: Color,
}

impl Verdict {
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn color(&self) -> Color {
        self.color
    }
}

/// (user wins, computer wins)
impl From<(Score, Score)> for Verdict {
    fn from((user, computer): (Score, Score)) -> Self {
        let (headline, color) = match user.cmp(&computer) {
            std::cmp::Ordering::Greater => ("You have Won!!!", Color::Green),
            std::cmp::Ordering::Equal => ("It is a tie", Color::Orange),
            std::cmp::Ordering::Less => ("The computer has won", Color::Red),
        };
        Self {
            text: format!("{} {} : {}", headline, user, computer),
            color,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
