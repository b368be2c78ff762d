use chrono::DateTime;
use chrono::Utc;
use std::time::Duration;
use std::time::Instant;

/// Time source for countdowns and pacing.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
    /// Wall-clock time used to stamp records.
    fn wall(&self) -> DateTime<Utc>;
}

/// Real time, real sleeps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration)
    }
    fn wall(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by `tick` on every reading
/// and by the full duration on every sleep.
#[cfg(test)]
pub(crate) struct Virtual {
    origin: Instant,
    tick: Duration,
    elapsed: std::cell::Cell<Duration>,
    slept: std::cell::Cell<Duration>,
}

#[cfg(test)]
impl Virtual {
    pub fn new(tick: Duration) -> Self {
        Self {
            origin: Instant::now(),
            tick,
            elapsed: std::cell::Cell::new(Duration::ZERO),
            slept: std::cell::Cell::new(Duration::ZERO),
        }
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
    pub fn slept(&self) -> Duration {
        self.slept.get()
    }
}

#[cfg(test)]
impl Clock for Virtual {
    fn now(&self) -> Instant {
        self.elapsed.set(self.elapsed.get() + self.tick);
        self.origin + self.elapsed.get()
    }
    fn sleep(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
        self.slept.set(self.slept.get() + duration);
    }
    fn wall(&self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + self.elapsed.get()
    }
}

#[cfg(test)]
impl Clock for std::rc::Rc<Virtual> {
    fn now(&self) -> Instant {
        self.as_ref().now()
    }
    fn sleep(&self, duration: Duration) {
        self.as_ref().sleep(duration)
    }
    fn wall(&self) -> DateTime<Utc> {
        self.as_ref().wall()
    }
}
