use std::time::Duration;
use std::time::Instant;

/// Per-round timer.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    start: Instant,
    length: Duration,
}

impl Countdown {
    pub fn start(now: Instant, length: Duration) -> Self {
        Self { start: now, length }
    }

    /// Whole seconds left, rounded up. Zero once expired.
    pub fn left(&self, now: Instant) -> u64 {
        let remaining = self.length.saturating_sub(now.saturating_duration_since(self.start));
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.length
    }
}
