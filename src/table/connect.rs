use super::clock::Clock;
use super::halt::Halt;
use super::settings::Settings;
use crate::vision::Camera;
use crate::vision::Device;

/// Open the configured webcam, reopening after each empty read.
///
/// A camera counts as connected once it delivers a frame. After
/// `settings.attempts` failed reads the last handle is released and
/// [`Halt::Camera`] is returned.
pub fn connect(
    device: &mut dyn Device,
    settings: &Settings,
    clock: &dyn Clock,
) -> Result<Box<dyn Camera>, Halt> {
    let mut camera = device.open(settings.camera);
    for trial in 0..settings.attempts {
        log::info!("trying to establish camera connection, trial {}", trial);
        if camera.read().is_some() {
            log::info!("camera {} connected", settings.camera);
            return Ok(camera);
        }
        clock.sleep(settings.backoff);
        camera.release();
        camera = device.open(settings.camera);
    }
    camera.release();
    Err(Halt::Camera(settings.attempts))
}
