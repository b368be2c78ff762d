use crate::gameplay::Round;

/// Sink for finished rounds, valid or not.
pub trait Recorder {
    fn record(&mut self, round: &Round) -> anyhow::Result<()>;
}

/// Keeps rounds for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Memory {
    rounds: Vec<Round>,
}

impl Memory {
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

impl Recorder for Memory {
    fn record(&mut self, round: &Round) -> anyhow::Result<()> {
        self.rounds.push(round.clone());
        Ok(())
    }
}

impl<R> Recorder for std::rc::Rc<std::cell::RefCell<R>>
where
    R: Recorder,
{
    fn record(&mut self, round: &Round) -> anyhow::Result<()> {
        self.borrow_mut().record(round)
    }
}
