//! Aggregation algorithms for rental summaries
//!
//! Every aggregator is a pure, synchronous pass over a slice of records.
//! Empty input produces an empty summary, never an error, and a category
//! with no observations is omitted (or left undefined) rather than filled
//! with a fabricated zero.

use std::collections::BTreeMap;

use tracing::debug;

use ridegraph_common::records::{DailyRecord, HourlyRecord, Season, TimeSlot, Weekday};

use crate::summaries::{
    HourWeekdayPivot, SlotMean, TimeSeriesPoint, DAYS_PER_WEEK, HOURS_PER_DAY,
};

/// Computes one summary from a slice of records
pub trait DataAggregator {
    type Record;
    type Summary;

    fn aggregate(&self, records: &[Self::Record]) -> Self::Summary;
}

/// Orders daily records into a date-ascending rental series
#[derive(Debug, Clone)]
pub struct TimeSeriesAggregator;

impl TimeSeriesAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator for TimeSeriesAggregator {
    type Record = DailyRecord;
    type Summary = Vec<TimeSeriesPoint>;

    fn aggregate(&self, records: &[DailyRecord]) -> Vec<TimeSeriesPoint> {
        let mut series: Vec<TimeSeriesPoint> = records
            .iter()
            .map(|record| TimeSeriesPoint {
                date: record.date,
                count: record.count,
            })
            .collect();

        series.sort_by_key(|point| point.date);

        debug!("Aggregated {} time series points", series.len());
        series
    }
}

/// Computes mean daily rentals per weekday
///
/// Weekdays with no records are omitted from the result.
#[derive(Debug, Clone)]
pub struct WeekdayMeanAggregator;

impl WeekdayMeanAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator for WeekdayMeanAggregator {
    type Record = DailyRecord;
    type Summary = BTreeMap<Weekday, f64>;

    fn aggregate(&self, records: &[DailyRecord]) -> BTreeMap<Weekday, f64> {
        let means = group_means(records.iter().map(|record| (record.weekday, record.count)));
        debug!("Aggregated mean rentals for {} weekdays", means.len());
        means
    }
}

/// Computes mean daily rentals per season
///
/// Seasons with no records are omitted from the result.
#[derive(Debug, Clone)]
pub struct SeasonMeanAggregator;

impl SeasonMeanAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator for SeasonMeanAggregator {
    type Record = DailyRecord;
    type Summary = BTreeMap<Season, f64>;

    fn aggregate(&self, records: &[DailyRecord]) -> BTreeMap<Season, f64> {
        let means = group_means(records.iter().map(|record| (record.season, record.count)));
        debug!("Aggregated mean rentals for {} seasons", means.len());
        means
    }
}

/// Builds the 24x7 pivot of mean hourly rentals
///
/// Records with an hour outside 0-23 are excluded from every cell.
#[derive(Debug, Clone)]
pub struct HourWeekdayPivotAggregator;

impl HourWeekdayPivotAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator for HourWeekdayPivotAggregator {
    type Record = HourlyRecord;
    type Summary = HourWeekdayPivot;

    fn aggregate(&self, records: &[HourlyRecord]) -> HourWeekdayPivot {
        let mut sums = [[(0u64, 0usize); DAYS_PER_WEEK]; HOURS_PER_DAY];

        for record in records.iter().filter(|r| (r.hour as usize) < HOURS_PER_DAY) {
            let cell = &mut sums[record.hour as usize][record.weekday.code() as usize];
            cell.0 += u64::from(record.count);
            cell.1 += 1;
        }

        let mut pivot = HourWeekdayPivot::new();
        for (hour, row) in sums.iter().enumerate() {
            for (weekday, &(sum, n)) in row.iter().enumerate() {
                if n > 0 {
                    pivot.cells[hour][weekday] = Some(sum as f64 / n as f64);
                }
            }
        }

        debug!("Aggregated pivot with {} defined cells", pivot.defined_cells());
        pivot
    }
}

/// Computes mean hourly rentals per caller-defined time slot
///
/// Slots are evaluated independently and the result keeps the caller's slot
/// order. Overlapping slots and uncovered hours are both allowed; a slot
/// that matches no records gets a `None` mean.
#[derive(Debug, Clone)]
pub struct TimeSlotAggregator {
    slots: Vec<TimeSlot>,
}

impl TimeSlotAggregator {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    /// Aggregator over the conventional five-slot partition of the day
    pub fn reference() -> Self {
        Self::new(TimeSlot::reference_slots())
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }
}

impl DataAggregator for TimeSlotAggregator {
    type Record = HourlyRecord;
    type Summary = Vec<SlotMean>;

    fn aggregate(&self, records: &[HourlyRecord]) -> Vec<SlotMean> {
        let means: Vec<SlotMean> = self
            .slots
            .iter()
            .map(|slot| {
                let mut sum = 0u64;
                let mut samples = 0usize;

                for record in records
                    .iter()
                    .filter(|r| (r.hour as usize) < HOURS_PER_DAY && slot.contains(r.hour))
                {
                    sum += u64::from(record.count);
                    samples += 1;
                }

                let mean = if samples > 0 {
                    Some(sum as f64 / samples as f64)
                } else {
                    None
                };

                SlotMean {
                    slot: slot.clone(),
                    mean,
                    samples,
                }
            })
            .collect();

        debug!("Aggregated means for {} time slots", means.len());
        means
    }
}

/// High-level interface for running the rental aggregations
#[derive(Debug, Clone)]
pub struct AggregationManager {
    time_series_aggregator: TimeSeriesAggregator,
    weekday_aggregator: WeekdayMeanAggregator,
    season_aggregator: SeasonMeanAggregator,
    pivot_aggregator: HourWeekdayPivotAggregator,
}

impl AggregationManager {
    pub fn new() -> Self {
        Self {
            time_series_aggregator: TimeSeriesAggregator::new(),
            weekday_aggregator: WeekdayMeanAggregator::new(),
            season_aggregator: SeasonMeanAggregator::new(),
            pivot_aggregator: HourWeekdayPivotAggregator::new(),
        }
    }

    /// Daily rentals ordered by date
    pub fn time_series(&self, records: &[DailyRecord]) -> Vec<TimeSeriesPoint> {
        self.time_series_aggregator.aggregate(records)
    }

    /// Mean daily rentals per weekday
    pub fn mean_by_weekday(&self, records: &[DailyRecord]) -> BTreeMap<Weekday, f64> {
        self.weekday_aggregator.aggregate(records)
    }

    /// Mean daily rentals per season
    pub fn mean_by_season(&self, records: &[DailyRecord]) -> BTreeMap<Season, f64> {
        self.season_aggregator.aggregate(records)
    }

    /// Mean hourly rentals per hour and weekday
    pub fn mean_by_hour_and_weekday(&self, records: &[HourlyRecord]) -> HourWeekdayPivot {
        self.pivot_aggregator.aggregate(records)
    }

    /// Mean hourly rentals per time slot, in the caller's slot order
    pub fn mean_by_time_slot(&self, records: &[HourlyRecord], slots: &[TimeSlot]) -> Vec<SlotMean> {
        TimeSlotAggregator::new(slots.to_vec()).aggregate(records)
    }
}

fn group_means<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: Iterator<Item = (K, u32)>,
{
    let mut sums: BTreeMap<K, (u64, usize)> = BTreeMap::new();

    for (key, count) in pairs {
        let entry = sums.entry(key).or_insert((0, 0));
        entry.0 += u64::from(count);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum as f64 / n as f64))
        .collect()
}

// Default implementations
impl Default for TimeSeriesAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for WeekdayMeanAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for SeasonMeanAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for HourWeekdayPivotAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TimeSlotAggregator {
    fn default() -> Self {
        Self::reference()
    }
}

impl Default for AggregationManager {
    fn default() -> Self {
        Self::new()
    }
}
