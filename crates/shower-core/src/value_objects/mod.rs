//! Value objects - immutable types that represent domain concepts

mod time_left;

pub use time_left::TimeLeft;
