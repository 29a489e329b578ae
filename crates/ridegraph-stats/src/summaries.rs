//! Output types produced by the aggregation engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ridegraph_common::records::{TimeSlot, Weekday};

/// Hours in a day, the row dimension of the hour/weekday pivot
pub const HOURS_PER_DAY: usize = 24;

/// Days in a week, the column dimension of the hour/weekday pivot
pub const DAYS_PER_WEEK: usize = 7;

/// One point of the daily rental time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Total rentals for the day
    pub count: u32,
}

/// Mean hourly rentals for every hour-of-day and weekday combination
///
/// Cells with no underlying records are `None`. A missing observation is
/// never reported as a zero mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourWeekdayPivot {
    /// Means indexed by `[hour][weekday code]`, hour 0-23 and weekday 0-6
    pub cells: [[Option<f64>; DAYS_PER_WEEK]; HOURS_PER_DAY],
}

impl HourWeekdayPivot {
    /// An all-undefined pivot
    pub fn new() -> Self {
        Self {
            cells: [[None; DAYS_PER_WEEK]; HOURS_PER_DAY],
        }
    }

    /// Mean for one cell, `None` when the hour is out of range or the cell
    /// has no observations
    pub fn get(&self, hour: u8, weekday: Weekday) -> Option<f64> {
        if (hour as usize) < HOURS_PER_DAY {
            self.cells[hour as usize][weekday.code() as usize]
        } else {
            None
        }
    }

    /// Number of cells that have a defined mean
    pub fn defined_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Whether no cell has a defined mean
    pub fn is_empty(&self) -> bool {
        self.defined_cells() == 0
    }

    /// Smallest and largest defined means, `None` when the pivot is empty
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;

        for value in self.cells.iter().flat_map(|row| row.iter()).flatten() {
            bounds = match bounds {
                Some((min, max)) => Some((min.min(*value), max.max(*value))),
                None => Some((*value, *value)),
            };
        }

        bounds
    }
}

impl Default for HourWeekdayPivot {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean hourly rentals within one time slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotMean {
    /// The slot this mean was computed over
    pub slot: TimeSlot,
    /// Mean rentals per hour-record in the slot, `None` when no records fell
    /// inside it
    pub mean: Option<f64>,
    /// Number of hourly records the mean was computed from
    pub samples: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pivot_is_empty() {
        let pivot = HourWeekdayPivot::new();
        assert!(pivot.is_empty());
        assert_eq!(pivot.defined_cells(), 0);
        assert_eq!(pivot.min_max(), None);
    }

    #[test]
    fn test_pivot_get_and_bounds() {
        let mut pivot = HourWeekdayPivot::new();
        pivot.cells[8][1] = Some(120.0);
        pivot.cells[17][5] = Some(340.5);

        assert_eq!(pivot.get(8, Weekday::Monday), Some(120.0));
        assert_eq!(pivot.get(17, Weekday::Friday), Some(340.5));
        assert_eq!(pivot.get(8, Weekday::Tuesday), None);
        assert_eq!(pivot.get(24, Weekday::Monday), None);

        assert_eq!(pivot.defined_cells(), 2);
        assert_eq!(pivot.min_max(), Some((120.0, 340.5)));
    }

    #[test]
    fn test_slot_mean_serializes_missing_mean_as_null() {
        let slot_mean = SlotMean {
            slot: TimeSlot::new("Night", 22, 23),
            mean: None,
            samples: 0,
        };

        let value = serde_json::to_value(&slot_mean).unwrap();
        assert!(value["mean"].is_null());
        assert_eq!(value["slot"]["label"], "Night");
    }

    #[test]
    fn test_time_series_point_round_trips_through_json() {
        let point = TimeSeriesPoint {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            count: 985,
        };

        let json = serde_json::to_string(&point).unwrap();
        let back: TimeSeriesPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
