pub mod choice;
pub use choice::*;

pub mod outcome;
pub use outcome::*;

pub mod opponent;
pub use opponent::*;

pub mod round;
pub use round::*;

pub mod tally;
pub use tally::*;

pub mod verdict;
pub use verdict::*;
