//! Read-only match history dashboard.
//!
//! `/` renders every game as an HTML table; `/games` serves the same
//! history as JSON.
mod cli;
mod page;
mod server;

pub use cli::*;
pub use page::*;
pub use server::*;
