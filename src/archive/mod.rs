//! Where finished rounds go.
//!
//! The game loop hands every round to a [`Recorder`]; the dashboard reads
//! them back as a [`History`].
mod history;
mod journal;
mod recorder;

pub use history::*;
pub use journal::*;
pub use recorder::*;
