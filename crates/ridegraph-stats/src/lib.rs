//! Aggregation engine for bike-share rental summaries

pub mod aggregator;
pub mod summaries;

pub use aggregator::{
    AggregationManager, DataAggregator, HourWeekdayPivotAggregator, SeasonMeanAggregator,
    TimeSeriesAggregator, TimeSlotAggregator, WeekdayMeanAggregator,
};
pub use summaries::{HourWeekdayPivot, SlotMean, TimeSeriesPoint, DAYS_PER_WEEK, HOURS_PER_DAY};
