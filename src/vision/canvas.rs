use super::anchor::Anchor;
use super::color::Color;
use super::frame::Frame;
use crate::table::Halt;

/// Where overlay text and frames are shown to the player.
pub trait Canvas {
    /// Drop all overlay text.
    fn clear(&mut self);
    /// Put text at an anchor, replacing whatever was there.
    fn draw(&mut self, text: &str, anchor: Anchor, color: Color);
    /// Show the frame with the current overlay. Fails with [`Halt::Quit`]
    /// once the player pressed the quit key.
    fn present(&mut self, frame: &Frame) -> Result<(), Halt>;
    /// Block until the player presses any key.
    fn wait(&mut self);
    /// Tear down whatever windows the canvas opened.
    fn close(&mut self);
}
