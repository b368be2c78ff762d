use super::keyboard::Keys;
use crate::table::Halt;
use crate::vision::Anchor;
use crate::vision::Canvas;
use crate::vision::Color;
use crate::vision::Frame;
use colored::ColoredString;
use colored::Colorize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Prints the overlay as one colored line whenever its text changes.
pub struct Terminal {
    keys: Arc<Keys>,
    overlay: BTreeMap<Anchor, (String, Color)>,
    shown: String,
}

impl Terminal {
    pub fn new(keys: Arc<Keys>) -> Self {
        Self {
            keys,
            overlay: BTreeMap::new(),
            shown: String::new(),
        }
    }

    fn plain(&self) -> String {
        self.overlay
            .values()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, _)| text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn painted(&self) -> String {
        self.overlay
            .values()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, color)| paint(text, *color).to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn paint(text: &str, color: Color) -> ColoredString {
    let (b, g, r) = color.bgr();
    match color {
        Color::Black => text.bold(),
        _ => text.truecolor(r, g, b).bold(),
    }
}

impl Canvas for Terminal {
    fn clear(&mut self) {
        self.overlay.clear();
    }

    fn draw(&mut self, text: &str, anchor: Anchor, color: Color) {
        self.overlay.insert(anchor, (text.to_string(), color));
    }

    fn present(&mut self, _: &Frame) -> Result<(), Halt> {
        if crate::interrupted() {
            return Err(Halt::Quit);
        }
        let plain = self.plain();
        if plain != self.shown {
            println!("{}", self.painted());
            self.shown = plain;
        }
        Ok(())
    }

    fn wait(&mut self) {
        let seen = self.keys.strokes();
        while self.keys.strokes() == seen && !self.keys.closed() && !crate::interrupted() {
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    fn close(&mut self) {
        self.overlay.clear();
        self.shown.clear();
        log::debug!("terminal canvas closed");
    }
}
