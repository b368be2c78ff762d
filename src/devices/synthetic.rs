use crate::vision::Camera;
use crate::vision::Device;
use crate::vision::Frame;
use std::time::Duration;

/// Opens cameras that always deliver blank frames, paced at `fps`.
#[derive(Debug, Clone, Copy)]
pub struct Synthetic {
    width: usize,
    height: usize,
    fps: u32,
}

impl Synthetic {
    pub fn new(width: usize, height: usize, fps: u32) -> Self {
        Self {
            width,
            height,
            fps: fps.max(1),
        }
    }
}

impl Default for Synthetic {
    fn default() -> Self {
        Self::new(640, 480, 30)
    }
}

impl Device for Synthetic {
    fn open(&mut self, index: usize) -> Box<dyn Camera> {
        log::debug!("opening synthetic camera {}", index);
        Box::new(Blank {
            device: *self,
            period: Duration::from_secs(1) / self.fps,
        })
    }
}

struct Blank {
    device: Synthetic,
    period: Duration,
}

impl Camera for Blank {
    fn read(&mut self) -> Option<Frame> {
        std::thread::sleep(self.period);
        Some(Frame::blank(self.device.width, self.device.height))
    }
    fn release(&mut self) {
        log::debug!("synthetic camera released");
    }
}
