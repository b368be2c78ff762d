use crate::archive::History;
use crate::gameplay::Move;
use crate::gameplay::Outcome;
use crate::gameplay::Round;

/// HTML rendering of a [`History`].
pub struct Page<'a>(&'a History);

impl<'a> From<&'a History> for Page<'a> {
    fn from(history: &'a History) -> Self {
        Self(history)
    }
}

const HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Rock Paper Scissor</title>\n</head>\n<body>\n<h1>Match History</h1>\n";
const TAIL: &str = "</body>\n</html>\n";
const COLUMNS: [&str; 6] = [
    "Round",
    "Player Move",
    "Computer Move",
    "Result",
    "Time of Round End",
    "Snapshot",
];

impl std::fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", HEAD)?;
        if self.0.is_empty() {
            writeln!(f, "<p>No games yet</p>")?;
        }
        for (game, rounds) in self.0.games() {
            writeln!(f, "<h2>{}</h2>", escape(game))?;
            writeln!(f, "<table>")?;
            write!(f, "<tr>")?;
            for column in COLUMNS {
                write!(f, "<th>{}</th>", column)?;
            }
            writeln!(f, "</tr>")?;
            for round in rounds {
                write!(f, "<tr>")?;
                for cell in cells(round) {
                    write!(f, "<td>{}</td>", escape(&cell))?;
                }
                writeln!(f, "</tr>")?;
            }
            writeln!(f, "</table>")?;
        }
        write!(f, "{}", TAIL)
    }
}

fn cells(round: &Round) -> [String; 6] {
    fn shape(m: Option<Move>) -> String {
        m.map(|m| format!("{:?}", m))
            .unwrap_or_else(|| "Invalid".to_string())
    }
    [
        round
            .round_num
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Invalid".to_string()),
        shape(round.player_move),
        shape(round.computer_move),
        Outcome::label(round.result).to_string(),
        round
            .time_of_round_end
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "...".to_string()),
        round.snapshot.clone().unwrap_or_else(|| "...".to_string()),
    ]
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            c => c.to_string(),
        })
        .collect()
}
