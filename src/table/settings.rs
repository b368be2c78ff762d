use std::time::Duration;

/// Match parameters. Defaults come from the crate-level constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Rounds that must be resolved (win, loss or tie) before the match ends.
    pub rounds: usize,
    /// Countdown length of each round.
    pub round: Duration,
    /// Computer move display time, measured from capture.
    pub reveal: Duration,
    /// Result display time before the next countdown.
    pub linger: Duration,
    /// Device index of the webcam.
    pub camera: usize,
    /// Camera open attempts.
    pub attempts: usize,
    /// Pause between camera open attempts.
    pub backoff: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounds: crate::ROUNDS,
            round: Duration::from_secs(crate::SECONDS_PER_ROUND),
            reveal: crate::REVEAL_PAUSE,
            linger: crate::RESULT_PAUSE,
            camera: crate::CAMERA_INDEX,
            attempts: crate::CAMERA_ATTEMPTS,
            backoff: crate::CAMERA_BACKOFF,
        }
    }
}
