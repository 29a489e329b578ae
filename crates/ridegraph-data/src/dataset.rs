//! The two tables of the bike-share dataset, loaded into memory

use std::path::Path;

use tracing::info;

use ridegraph_common::error::Result;
use ridegraph_common::records::{DailyRecord, HourlyRecord};

use crate::csv_source::{load_daily_records, load_hourly_records};

/// Daily and hourly records loaded together
///
/// The dataset is small enough to hold in memory, so callers load it once
/// and hand out slices to the aggregators.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl Dataset {
    /// Load both CSV files
    pub fn load(day_path: impl AsRef<Path>, hour_path: impl AsRef<Path>) -> Result<Self> {
        let daily = load_daily_records(day_path)?;
        let hourly = load_hourly_records(hour_path)?;

        info!(
            "Loaded {} daily and {} hourly records",
            daily.records.len(),
            hourly.records.len()
        );

        Ok(Self {
            daily: daily.records,
            hourly: hourly.records,
        })
    }

    /// Build a dataset from records already in memory
    pub fn from_records(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Self {
        Self { daily, hourly }
    }

    /// Whether both tables are empty
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.hourly.is_empty()
    }
}
