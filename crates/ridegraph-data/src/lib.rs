//! CSV ingestion for the bike-share dataset

pub mod csv_source;
pub mod dataset;

pub use csv_source::{load_daily_records, load_hourly_records, Ingested, RowError};
pub use dataset::Dataset;
