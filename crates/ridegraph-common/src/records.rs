//! Core record types shared across ridegraph crates
//!
//! The bike-share dataset encodes weekdays as 0-6 starting at Sunday and
//! seasons as 1-4 starting at spring. These enums keep those codes intact
//! so aggregation output lines up with the source data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Day of the week using the dataset's 0-6 coding (0 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in code order
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Numeric code as it appears in the dataset
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Full weekday name
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Abbreviated weekday name for axis labels
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Whether this day falls on a weekend
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Weekday::Sunday),
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            _ => Err(Error::validation_field(
                format!("weekday code {code} is outside the range 0-6"),
                "weekday",
            )),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Season using the dataset's 1-4 coding (1 = spring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    /// All seasons in code order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Numeric code as it appears in the dataset
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Season name
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            _ => Err(Error::validation_field(
                format!("season code {code} is outside the range 1-4"),
                "season",
            )),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One day of rental activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Day of the week
    pub weekday: Weekday,
    /// Season the date falls in
    pub season: Season,
    /// Total rentals for the day
    pub count: u32,
}

/// One hour of rental activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Hour of the day, 0-23
    pub hour: u8,
    /// Day of the week
    pub weekday: Weekday,
    /// Total rentals for the hour
    pub count: u32,
}

/// A labeled, inclusive range of hours within a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Display label, e.g. "Morning"
    pub label: String,
    /// First hour of the slot, inclusive
    pub start_hour: u8,
    /// Last hour of the slot, inclusive
    pub end_hour: u8,
}

impl TimeSlot {
    /// Create a new time slot
    pub fn new(label: impl Into<String>, start_hour: u8, end_hour: u8) -> Self {
        Self {
            label: label.into(),
            start_hour,
            end_hour,
        }
    }

    /// Whether the given hour falls inside this slot
    pub fn contains(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// The conventional five-slot partition of the day
    pub fn reference_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("Early Morning", 0, 6),
            TimeSlot::new("Morning", 7, 11),
            TimeSlot::new("Afternoon", 12, 16),
            TimeSlot::new("Evening", 17, 21),
            TimeSlot::new("Night", 22, 23),
        ]
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:02}-{:02})", self.label, self.start_hour, self.end_hour)
    }
}
