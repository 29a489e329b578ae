//! JSON export of the aggregated summaries

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use ridegraph_common::error::Result;
use ridegraph_common::records::{Season, Weekday};
use ridegraph_stats::summaries::{HourWeekdayPivot, SlotMean, TimeSeriesPoint};

/// All five aggregation results in one exportable document
///
/// Absent means serialize as `null`, matching how the aggregation engine
/// reports them internally.
#[derive(Debug, Clone, Serialize)]
pub struct Summaries {
    /// Daily rentals ordered by date
    pub time_series: Vec<TimeSeriesPoint>,
    /// Mean daily rentals per weekday
    pub weekday_means: BTreeMap<Weekday, f64>,
    /// Mean daily rentals per season
    pub season_means: BTreeMap<Season, f64>,
    /// Mean hourly rentals per hour and weekday
    pub hour_weekday: HourWeekdayPivot,
    /// Mean hourly rentals per time slot, in configuration order
    pub slot_means: Vec<SlotMean>,
}

/// Write the summaries as pretty-printed JSON
pub fn write_summaries(path: &Path, summaries: &Summaries) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ridegraph_common::records::TimeSlot;
    use tempfile::TempDir;

    fn sample_summaries() -> Summaries {
        let mut weekday_means = BTreeMap::new();
        weekday_means.insert(Weekday::Sunday, 15.0);
        weekday_means.insert(Weekday::Monday, 5.0);

        let mut season_means = BTreeMap::new();
        season_means.insert(Season::Spring, 893.0);

        let mut hour_weekday = HourWeekdayPivot::new();
        hour_weekday.cells[3][2] = Some(7.0);

        Summaries {
            time_series: vec![TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                count: 985,
            }],
            weekday_means,
            season_means,
            hour_weekday,
            slot_means: vec![
                SlotMean {
                    slot: TimeSlot::new("Early Morning", 0, 6),
                    mean: Some(50.2),
                    samples: 700,
                },
                SlotMean {
                    slot: TimeSlot::new("Night", 22, 23),
                    mean: None,
                    samples: 0,
                },
            ],
        }
    }

    #[test]
    fn test_write_summaries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summaries.json");

        write_summaries(&path, &sample_summaries()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["weekday_means"]["Sunday"], 15.0);
        assert_eq!(value["season_means"]["Spring"], 893.0);
        assert_eq!(value["time_series"][0]["count"], 985);
        assert_eq!(value["hour_weekday"]["cells"][3][2], 7.0);
        assert_eq!(value["slot_means"][0]["mean"], 50.2);
        assert!(value["slot_means"][1]["mean"].is_null());
    }

    #[test]
    fn test_summaries_keep_slot_order() {
        let value = serde_json::to_value(sample_summaries()).unwrap();

        assert_eq!(value["slot_means"][0]["slot"]["label"], "Early Morning");
        assert_eq!(value["slot_means"][1]["slot"]["label"], "Night");
    }
}
