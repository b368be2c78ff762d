//! Ports to the camera, the gesture model and the display.
//!
//! Frame acquisition, landmark inference and text rendering live outside
//! this crate; the game loop only sees these traits.
mod anchor;
mod camera;
mod canvas;
mod classifier;
mod color;
mod frame;

pub use anchor::*;
pub use camera::*;
pub use canvas::*;
pub use classifier::*;
pub use color::*;
pub use frame::*;
