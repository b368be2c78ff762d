use super::clock::Clock;
use super::clock::SystemClock;
use super::connect::connect;
use super::countdown::Countdown;
use super::halt::Halt;
use super::settings::Settings;
use crate::RoundNum;
use crate::archive::Memory;
use crate::archive::Recorder;
use crate::gameplay::*;
use crate::vision::*;

/// Runs one match: countdown, capture, resolve, repeat.
///
/// A round is one countdown. When it expires the latest gesture label is
/// taken as the player's move, the opponent throws, and the round is
/// resolved and recorded. Wins, losses and ties count towards
/// [`Settings::rounds`]; an unrecognized gesture is recorded as invalid
/// and the countdown starts over.
///
/// The camera is released and the canvas closed on every path after the
/// camera connected, whether the match finished, the player quit or the
/// camera dropped out.
pub struct Table {
    settings: Settings,
    clock: Box<dyn Clock>,
    classifier: Box<dyn Classifier>,
    canvas: Box<dyn Canvas>,
    opponent: Box<dyn Opponent>,
    recorder: Box<dyn Recorder>,
}

impl Table {
    pub fn new<K, V>(settings: Settings, classifier: K, canvas: V) -> Self
    where
        K: Classifier + 'static,
        V: Canvas + 'static,
    {
        Self {
            settings,
            clock: Box::new(SystemClock),
            classifier: Box::new(classifier),
            canvas: Box::new(canvas),
            opponent: Box::new(Random),
            recorder: Box::new(Memory::default()),
        }
    }

    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_opponent<O>(mut self, opponent: O) -> Self
    where
        O: Opponent + 'static,
    {
        self.opponent = Box::new(opponent);
        self
    }

    pub fn with_recorder<R>(mut self, recorder: R) -> Self
    where
        R: Recorder + 'static,
    {
        self.recorder = Box::new(recorder);
        self
    }

    /// Connect to the webcam and play until the configured number of
    /// rounds has been resolved, then show the summary and wait for a key.
    pub fn play(&mut self, device: &mut dyn Device) -> Result<Tally, Halt> {
        log::info!("game is starting...");
        let mut camera = connect(device, &self.settings, self.clock.as_ref())
            .inspect_err(|e| log::log!(e.level(), "{}", e))?;
        let result = self
            .rounds(camera.as_mut())
            .and_then(|(tally, frame)| self.summarize(tally, &frame))
            .inspect(|tally| log::info!("match finished: {}", tally))
            .inspect_err(|e| log::log!(e.level(), "{}", e));
        camera.release();
        self.canvas.close();
        log::info!("completed exit steps");
        result
    }
}

impl Table {
    fn rounds(&mut self, camera: &mut dyn Camera) -> Result<(Tally, Frame), Halt> {
        let mut tally = Tally::default();
        let mut remaining = self.settings.rounds;
        let mut last = None;
        while remaining > 0 {
            let (outcome, frame) = self.round(camera, tally.played() + 1)?;
            if let Some(outcome) = outcome {
                tally.record(outcome);
                remaining -= 1;
            }
            last = Some(frame);
        }
        last.or_else(|| camera.read())
            .map(|frame| (tally, frame))
            .ok_or(Halt::Dropped)
    }

    fn round(
        &mut self,
        camera: &mut dyn Camera,
        number: RoundNum,
    ) -> Result<(Option<Outcome>, Frame), Halt> {
        let countdown = Countdown::start(self.clock.now(), self.settings.round);
        log::debug!("round {} countdown started", number);
        loop {
            let frame = camera.read().ok_or(Halt::Dropped)?.mirror();
            let gesture = self.classifier.classify(&frame);
            let now = self.clock.now();
            self.canvas.clear();
            self.canvas.draw(&gesture, Anchor::Gesture, Color::Black);
            self.canvas
                .draw(&countdown.left(now).to_string(), Anchor::Countdown, Color::Red);
            self.canvas.present(&frame)?;
            if countdown.expired(now) {
                let outcome = self.resolve(number, &gesture, &frame)?;
                return Ok((outcome, frame));
            }
        }
    }

    fn resolve(
        &mut self,
        number: RoundNum,
        gesture: &str,
        frame: &Frame,
    ) -> Result<Option<Outcome>, Halt> {
        let captured = self.clock.now();
        let cp = self.opponent.throw();
        self.canvas
            .draw(&format!("Computer Plays {}", cp), Anchor::Computer, Color::Blue);
        self.canvas.present(frame)?;

        let outcome = Outcome::resolve(gesture, cp);
        let round = Round::played(
            outcome.map(|_| number),
            Move::try_from(gesture).ok(),
            cp,
            outcome,
            self.clock.wall(),
        );
        self.recorder
            .record(&round)
            .unwrap_or_else(|e| log::warn!("failed to record round: {}", e));
        match outcome {
            Some(o) => log::info!("round {}: {:?} vs {} -> {}", number, gesture, cp, o),
            None => log::info!("round {}: no valid gesture ({:?}), try again", number, gesture),
        }

        let spent = self.clock.now().saturating_duration_since(captured);
        self.clock.sleep(self.settings.reveal.saturating_sub(spent));
        let (banner, color) = Outcome::banner(outcome);
        self.canvas.draw(banner, Anchor::Result, color);
        self.canvas.present(frame)?;
        self.clock.sleep(self.settings.linger);
        Ok(outcome)
    }

    fn summarize(&mut self, tally: Tally, frame: &Frame) -> Result<Tally, Halt> {
        let verdict = tally.verdict();
        self.canvas.draw(verdict.text(), Anchor::Summary, verdict.color());
        self.canvas
            .draw("Press any key to quit", Anchor::Prompt, Color::Black);
        self.canvas.present(frame)?;
        self.canvas.wait();
        Ok(tally)
    }
}
