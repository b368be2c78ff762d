//! The countdown/round driver.
//!
//! [`Table`] wires a camera, a classifier, a canvas, an opponent and a
//! recorder together and runs one match to completion.
mod clock;
mod connect;
mod countdown;
mod halt;
mod settings;
mod table;

#[cfg(feature = "server")]
mod cli;

pub use clock::*;
pub use connect::*;
pub use countdown::*;
pub use halt::*;
pub use settings::*;
pub use table::*;

#[cfg(feature = "server")]
pub use cli::*;
