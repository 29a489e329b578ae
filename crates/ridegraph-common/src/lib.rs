//! Common types and utilities shared across ridegraph crates

pub mod error;
pub mod logging;
pub mod records;
pub mod utils;

pub use error::{Error, Result};
pub use logging::{init_logging, LoggingConfig};
pub use records::{DailyRecord, HourlyRecord, Season, TimeSlot, Weekday};
