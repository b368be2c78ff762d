use super::frame::Frame;

/// An opened video source.
pub trait Camera {
    /// Next frame, or `None` when the device delivered nothing.
    fn read(&mut self) -> Option<Frame>;
    /// Give the device back. Called exactly once per opened camera.
    fn release(&mut self);
}

/// Opens cameras by device index.
pub trait Device {
    fn open(&mut self, index: usize) -> Box<dyn Camera>;
}
