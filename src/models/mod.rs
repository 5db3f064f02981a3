//! Value types and boundary conversions for agenda data.

pub mod agenda;
pub mod time;

pub use time::{TimeOfDay, TimeOfDayError, MINUTES_PER_DAY};
