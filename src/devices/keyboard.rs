use crate::vision::Classifier;
use crate::vision::Frame;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Shared keyboard state: the last gesture typed, a keystroke counter,
/// and whether stdin has closed.
#[derive(Debug, Default)]
pub struct Keys {
    label: Mutex<String>,
    strokes: AtomicUsize,
    closed: AtomicBool,
}

impl Keys {
    /// Handle one typed line. `q` quits; `r`, `p` and `s` are shorthands;
    /// anything else is kept verbatim (lowercased) and resolves as invalid.
    pub fn press(&self, line: &str) {
        self.strokes.fetch_add(1, Ordering::SeqCst);
        let line = line.trim().to_lowercase();
        let label = match line.as_str() {
            "q" => return crate::interrupt(),
            "r" => "rock".to_string(),
            "p" => "paper".to_string(),
            "s" => "scissor".to_string(),
            _ => line,
        };
        if let Ok(mut held) = self.label.lock() {
            *held = label;
        }
    }

    pub fn label(&self) -> String {
        self.label.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn strokes(&self) -> usize {
        self.strokes.load(Ordering::SeqCst)
    }

    /// Mark stdin as exhausted; no further keystrokes will arrive.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Gesture "model" for playing without a camera: the player types their move.
///
/// The typed move is held, like a hand held up to the camera, until
/// something else is typed. An empty line lowers the hand.
pub struct Keyboard {
    keys: Arc<Keys>,
}

impl Keyboard {
    /// Start reading stdin on a helper thread.
    pub fn spawn() -> Self {
        let keys = Arc::new(Keys::default());
        let reader = keys.clone();
        std::thread::spawn(move || {
            loop {
                let ref mut buffer = String::new();
                match std::io::stdin().read_line(buffer) {
                    Ok(0) => {
                        log::debug!("stdin reached end of input");
                        break;
                    }
                    Ok(_) => reader.press(buffer),
                    Err(e) => {
                        log::warn!("stdin closed: {}", e);
                        break;
                    }
                }
            }
            reader.close();
        });
        log::info!("type rock, paper or scissor (r/p/s) and press enter; q quits");
        Self { keys }
    }

    pub fn keys(&self) -> Arc<Keys> {
        self.keys.clone()
    }
}

impl Classifier for Keyboard {
    fn classify(&mut self, _: &Frame) -> String {
        self.keys.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_expand() {
        let keys = Keys::default();
        keys.press("r\n");
        assert_eq!(keys.label(), "rock");
        keys.press(" P ");
        assert_eq!(keys.label(), "paper");
        keys.press("s");
        assert_eq!(keys.label(), "scissor");
        assert_eq!(keys.strokes(), 3);
    }

    #[test]
    fn other_input_is_kept() {
        let keys = Keys::default();
        keys.press("Scissor");
        assert_eq!(keys.label(), "scissor");
        keys.press("lizard");
        assert_eq!(keys.label(), "lizard");
        keys.press("");
        assert_eq!(keys.label(), "");
    }

    #[test]
    fn close_is_sticky() {
        let keys = Keys::default();
        assert!(!keys.closed());
        keys.close();
        keys.press("rock");
        assert!(keys.closed());
        assert_eq!(keys.label(), "rock");
    }

    #[test]
    fn classifier_reports_held_label() {
        let mut keyboard = Keyboard {
            keys: Arc::new(Keys::default()),
        };
        keyboard.keys().press("paper");
        assert_eq!(keyboard.classify(&Frame::blank(1, 1)), "paper");
        assert_eq!(keyboard.classify(&Frame::blank(1, 1)), "paper");
    }
}
