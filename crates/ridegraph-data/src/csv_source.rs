//! CSV ingestion for the UCI bike-share dataset
//!
//! The dataset ships as two files, `day.csv` and `hour.csv`, sharing most
//! of their columns. Only the columns the aggregations need are read;
//! everything else in a row is ignored. Rows that fail to parse or carry
//! out-of-range codes are skipped and reported with their line number
//! instead of aborting the whole load.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use chrono::NaiveDate;
use ridegraph_common::error::{Error, Result};
use ridegraph_common::records::{DailyRecord, HourlyRecord, Season, Weekday};

/// Date format used throughout the dataset
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily row as laid out in day.csv; columns are matched by header name
#[derive(Debug, Deserialize)]
struct RawDailyRow {
    dteday: String,
    season: u8,
    weekday: u8,
    cnt: u32,
}

/// Hourly row as laid out in hour.csv
#[derive(Debug, Deserialize)]
struct RawHourlyRow {
    dteday: String,
    hr: u8,
    weekday: u8,
    cnt: u32,
}

impl RawDailyRow {
    fn into_record(self) -> Result<DailyRecord> {
        let date = NaiveDate::parse_from_str(&self.dteday, DATE_FORMAT)?;
        let weekday = Weekday::try_from(self.weekday)?;
        let season = Season::try_from(self.season)?;

        Ok(DailyRecord {
            date,
            weekday,
            season,
            count: self.cnt,
        })
    }
}

impl RawHourlyRow {
    fn into_record(self) -> Result<HourlyRecord> {
        let date = NaiveDate::parse_from_str(&self.dteday, DATE_FORMAT)?;
        if self.hr > 23 {
            return Err(Error::validation_field(
                format!("hour {} is outside the range 0-23", self.hr),
                "hr",
            ));
        }
        let weekday = Weekday::try_from(self.weekday)?;

        Ok(HourlyRecord {
            date,
            hour: self.hr,
            weekday,
            count: self.cnt,
        })
    }
}

/// A row that could not be ingested
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based line number in the source file (the header is line 1)
    pub line: usize,
    /// Description of what went wrong
    pub message: String,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Outcome of loading one CSV file
#[derive(Debug)]
pub struct Ingested<R> {
    /// Successfully parsed records
    pub records: Vec<R>,
    /// Rows that were skipped, with the reason
    pub row_errors: Vec<RowError>,
    /// Number of data rows read from the file, valid or not
    pub rows_read: usize,
}

/// Load daily records from a day.csv file
pub fn load_daily_records(path: impl AsRef<Path>) -> Result<Ingested<DailyRecord>> {
    read_rows(path.as_ref(), RawDailyRow::into_record)
}

/// Load hourly records from an hour.csv file
pub fn load_hourly_records(path: impl AsRef<Path>) -> Result<Ingested<HourlyRecord>> {
    read_rows(path.as_ref(), RawHourlyRow::into_record)
}

fn read_rows<Raw, R, F>(path: &Path, convert: F) -> Result<Ingested<R>>
where
    Raw: for<'de> Deserialize<'de>,
    F: Fn(Raw) -> Result<R>,
{
    let file = File::open(path)
        .map_err(|e| Error::data_with_source(format!("Failed to open {}", path.display()), e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (row_idx, result) in reader.deserialize::<Raw>().enumerate() {
        // Data rows start after the header and CSV lines are 1-based.
        let line = row_idx + 2;
        rows_read += 1;

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };

        match convert(raw) {
            Ok(record) => records.push(record),
            Err(e) => row_errors.push(RowError {
                line,
                message: e.to_string(),
            }),
        }
    }

    if records.is_empty() && !row_errors.is_empty() {
        return Err(Error::data(format!(
            "no usable rows in {}: all {} rows failed",
            path.display(),
            rows_read
        )));
    }

    if !row_errors.is_empty() {
        warn!(
            "Skipped {} of {} rows in {}",
            row_errors.len(),
            rows_read,
            path.display()
        );
        for row_error in &row_errors {
            debug!("{}: {}", path.display(), row_error);
        }
    }

    debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(Ingested {
        records,
        row_errors,
        rows_read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_daily_records() {
        let file = write_csv(&[
            "dteday,season,weekday,cnt",
            "2011-01-01,1,6,985",
            "2011-01-02,1,0,801",
            "2011-01-03,1,1,1349",
        ]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 3);
        assert_eq!(ingested.rows_read, 3);
        assert!(ingested.row_errors.is_empty());

        let first = &ingested.records[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.weekday, Weekday::Saturday);
        assert_eq!(first.season, Season::Spring);
        assert_eq!(first.count, 985);
    }

    #[test]
    fn test_daily_extra_columns_are_ignored() {
        let file = write_csv(&[
            "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt",
            "1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985",
        ]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.records[0].count, 985);
    }

    #[test]
    fn test_load_hourly_records() {
        let file = write_csv(&[
            "dteday,hr,weekday,cnt",
            "2011-01-01,0,6,16",
            "2011-01-01,1,6,40",
        ]);

        let ingested = load_hourly_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 2);
        assert_eq!(ingested.records[1].hour, 1);
        assert_eq!(ingested.records[1].count, 40);
    }

    #[test]
    fn test_out_of_range_weekday_is_skipped_and_reported() {
        let file = write_csv(&[
            "dteday,season,weekday,cnt",
            "2011-01-01,1,6,985",
            "2011-01-02,1,9,801",
        ]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.rows_read, 2);
        assert_eq!(ingested.row_errors.len(), 1);
        assert_eq!(ingested.row_errors[0].line, 3);
        assert!(ingested.row_errors[0].message.contains("weekday"));
    }

    #[test]
    fn test_out_of_range_hour_is_skipped_and_reported() {
        let file = write_csv(&[
            "dteday,hr,weekday,cnt",
            "2011-01-01,24,6,16",
            "2011-01-01,23,6,40",
        ]);

        let ingested = load_hourly_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.records[0].hour, 23);
        assert_eq!(ingested.row_errors.len(), 1);
        assert_eq!(ingested.row_errors[0].line, 2);
        assert!(ingested.row_errors[0].message.contains("hour"));
    }

    #[test]
    fn test_bad_date_is_skipped_and_reported() {
        let file = write_csv(&[
            "dteday,season,weekday,cnt",
            "01/01/2011,1,6,985",
            "2011-01-02,1,0,801",
        ]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.row_errors[0].line, 2);
    }

    #[test]
    fn test_unparseable_count_is_skipped() {
        let file = write_csv(&[
            "dteday,season,weekday,cnt",
            "2011-01-01,1,6,many",
            "2011-01-02,1,0,801",
        ]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.row_errors.len(), 1);
    }

    #[test]
    fn test_all_rows_failing_is_an_error() {
        let file = write_csv(&[
            "dteday,season,weekday,cnt",
            "not-a-date,1,6,985",
            "also-not-a-date,1,0,801",
        ]);

        let result = load_daily_records(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_file_yields_empty_records() {
        let file = write_csv(&["dteday,season,weekday,cnt"]);

        let ingested = load_daily_records(file.path()).unwrap();
        assert!(ingested.records.is_empty());
        assert!(ingested.row_errors.is_empty());
        assert_eq!(ingested.rows_read, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_daily_records("/nonexistent/day.csv");
        assert!(result.is_err());
    }
}
