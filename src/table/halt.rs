/// Reasons a match stops before its summary is shown.
#[derive(Debug, thiserror::Error)]
pub enum Halt {
    #[error("cannot connect to camera after {0} attempts")]
    Camera(usize),
    #[error("camera stopped delivering frames")]
    Dropped,
    #[error("player quit")]
    Quit,
}

impl Halt {
    /// Log level for reporting this stop. Quitting is an ordinary way to end a match.
    pub fn level(&self) -> log::Level {
        match self {
            Self::Quit => log::Level::Info,
            Self::Camera(_) | Self::Dropped => log::Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quitting_is_not_an_error() {
        assert_eq!(Halt::Quit.level(), log::Level::Info);
        assert_eq!(Halt::Dropped.level(), log::Level::Error);
        assert_eq!(Halt::Camera(10).level(), log::Level::Error);
    }
}
