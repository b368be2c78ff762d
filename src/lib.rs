//! Webcam rock-paper-scissors.
//!
//! A gesture classifier reads the player's hand each frame, a countdown
//! decides when the reading counts, and the computer answers with a uniformly
//! random move. Finished rounds can be journaled and browsed on a small
//! read-only dashboard.
//!
//! ## Modules
//!
//! - [`gameplay`] — moves, the round resolver, tallies and round records
//! - [`vision`] — camera, classifier and canvas ports plus frames and overlay colors
//! - [`table`] — the countdown/round driver and its settings
//! - [`archive`] — round recorders and the match history
//! - [`devices`] — terminal stand-ins for the camera, classifier and canvas
//! - [`dashboard`] — actix-web server rendering the match history

pub mod archive;
pub mod gameplay;
pub mod table;
pub mod vision;

#[cfg(feature = "server")]
pub mod dashboard;
#[cfg(feature = "server")]
pub mod devices;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, loss and tie counters.
pub type Score = usize;
/// Ordinal of a counted round, starting at 1.
pub type RoundNum = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Counted rounds per match.
pub const ROUNDS: usize = 5;
/// Countdown length of a single round (seconds).
pub const SECONDS_PER_ROUND: u64 = 5;
/// Time the computer's move stays on screen before the result, measured from capture.
pub const REVEAL_PAUSE: std::time::Duration = std::time::Duration::from_secs(4);
/// Time the round result stays on screen before the next countdown.
pub const RESULT_PAUSE: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// CAMERA CONNECTION
// ============================================================================
/// Device index of the default webcam.
pub const CAMERA_INDEX: usize = 0;
/// Open attempts before giving up on the webcam.
pub const CAMERA_ATTEMPTS: usize = 10;
/// Pause between failed open attempts.
pub const CAMERA_BACKOFF: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// DASHBOARD
// ============================================================================
/// Bind address when neither `--bind` nor `BIND_ADDR` is given.
pub const DASHBOARD_ADDR: &str = "127.0.0.1:5000";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Must be called from within a tokio runtime.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("violent interrupt received, exiting immediately");
                std::process::exit(0);
            }
            Err(e) => log::error!("cannot listen for ctrl+c: {}", e),
        }
    });
}

/// Global quit flag raised by the player's quit key.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Check whether the player asked to quit.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}
/// Request that the running match stops at the next presented frame.
pub fn interrupt() {
    log::warn!("quit requested, stopping match...");
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}
