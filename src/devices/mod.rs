//! Terminal stand-ins for the webcam, the gesture model and the video window.
//!
//! - [`Synthetic`] — a device whose cameras deliver blank frames at a fixed rate
//! - [`Keyboard`] — a classifier fed by lines typed on stdin
//! - [`Terminal`] — a canvas that prints the overlay when it changes
mod keyboard;
mod synthetic;
mod terminal;

pub use keyboard::*;
pub use synthetic::*;
pub use terminal::*;
