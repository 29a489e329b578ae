//! Integration tests for the ridegraph-data crate.
//!
//! These tests write CSV files shaped like the UCI bike-share dataset and
//! verify the full ingest path, including row-level error reporting.

use std::io::Write;

use ridegraph_common::records::{Season, Weekday};
use ridegraph_data::Dataset;
use tempfile::NamedTempFile;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_dataset_with_full_uci_headers() {
    let day_file = write_file(
        "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt\n\
         1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n\
         2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801\n",
    );
    let hour_file = write_file(
        "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt\n\
         1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16\n\
         2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40\n",
    );

    let dataset = Dataset::load(day_file.path(), hour_file.path()).unwrap();

    assert_eq!(dataset.daily.len(), 2);
    assert_eq!(dataset.hourly.len(), 2);
    assert_eq!(dataset.daily[0].weekday, Weekday::Saturday);
    assert_eq!(dataset.daily[0].season, Season::Spring);
    assert_eq!(dataset.daily[1].count, 801);
    assert_eq!(dataset.hourly[1].hour, 1);
    assert_eq!(dataset.hourly[1].count, 40);
}

#[test]
fn test_malformed_rows_are_reported_with_line_numbers() {
    let file = write_file(
        "dteday,season,weekday,cnt\n\
         2011-01-01,1,6,985\n\
         2011-01-02,1,9,801\n\
         bad-date,1,1,1349\n",
    );

    let ingested = ridegraph_data::load_daily_records(file.path()).unwrap();

    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.rows_read, 3);

    let lines: Vec<usize> = ingested.row_errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4]);
}

#[test]
fn test_loading_a_missing_file_fails() {
    let day_file = write_file("dteday,season,weekday,cnt\n2011-01-01,1,6,985\n");

    let result = Dataset::load(day_file.path(), "/nonexistent/hour.csv");
    assert!(result.is_err());
}
