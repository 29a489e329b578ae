//! Chart rendering for ridegraph rental summaries

pub mod hour_weekday_heatmap;
pub mod renderer;
pub mod season_means;
pub mod slot_means;
pub mod time_series;
pub mod types;
pub mod weekday_means;

pub use hour_weekday_heatmap::HourWeekdayHeatmap;
pub use renderer::GraphRenderer;
pub use season_means::SeasonMeansChart;
pub use slot_means::SlotMeansChart;
pub use time_series::TimeSeriesChart;
pub use types::{ColorScheme, GraphConfig, GraphType, StyleConfig};
pub use weekday_means::WeekdayMeansChart;
