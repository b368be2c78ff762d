use super::frame::Frame;

/// Hand-gesture model.
///
/// Returns the predicted class name for the (mirrored) frame, or an empty
/// string when no hand is detected.
pub trait Classifier {
    fn classify(&mut self, frame: &Frame) -> String;
}
