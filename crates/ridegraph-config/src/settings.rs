//! Configuration structures for ridegraph

use serde::{Deserialize, Serialize};
use validator::Validate;

use ridegraph_common::records::TimeSlot;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Dataset file locations
    #[validate]
    pub data: DataConfig,
    /// Chart appearance settings
    #[validate]
    pub graphs: GraphConfig,
    /// Time slot definitions, evaluated in order
    #[validate]
    pub time_slots: Vec<SlotConfig>,
    /// Output locations
    #[validate]
    pub output: OutputConfig,
    /// Logging behavior
    #[validate]
    pub logging: LoggingConfig,
}

impl Config {
    /// Run field validation plus the cross-field slot checks
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.validate_slot_ranges()?;
        Ok(())
    }

    /// Slots may overlap or leave hours uncovered; only inverted ranges and
    /// an empty slot list are rejected.
    fn validate_slot_ranges(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        if self.time_slots.is_empty() {
            errors.add("time_slots", validator::ValidationError::new("no_slots"));
        }

        for slot in &self.time_slots {
            if slot.start_hour > slot.end_hour {
                let mut error = validator::ValidationError::new("slot_range_inverted");
                error.message = Some(format!("Slot '{}' starts after it ends", slot.label).into());
                errors.add("time_slots", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Engine slots in configuration order
    pub fn to_time_slots(&self) -> Vec<TimeSlot> {
        self.time_slots.iter().map(SlotConfig::to_time_slot).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            graphs: GraphConfig::default(),
            time_slots: default_time_slots(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The conventional five-slot partition as configuration entries
fn default_time_slots() -> Vec<SlotConfig> {
    TimeSlot::reference_slots()
        .into_iter()
        .map(|slot| SlotConfig {
            label: slot.label,
            start_hour: slot.start_hour,
            end_hour: slot.end_hour,
        })
        .collect()
}

/// Dataset file locations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataConfig {
    /// Path to the daily CSV file
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Day CSV path must point to a file"
    ))]
    pub day_csv: String,
    /// Path to the hourly CSV file
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Hour CSV path must point to a file"
    ))]
    pub hour_csv: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            day_csv: "data/day.csv".to_string(),
            hour_csv: "data/hour.csv".to_string(),
        }
    }
}

/// Chart appearance settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphConfig {
    /// Output width in pixels
    #[validate(range(
        min = 100,
        max = 4000,
        message = "Width must be between 100 and 4000 pixels"
    ))]
    pub width: u32,
    /// Output height in pixels
    #[validate(range(
        min = 100,
        max = 4000,
        message = "Height must be between 100 and 4000 pixels"
    ))]
    pub height: u32,
    /// Background color as #RRGGBB
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Background color must be a hex color like #FFFFFF"
    ))]
    pub background_color: String,
    /// Primary series color as #RRGGBB
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Primary color must be a hex color like #1F77B4"
    ))]
    pub primary_color: String,
    /// Secondary series color as #RRGGBB
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Secondary color must be a hex color like #FF7F0E"
    ))]
    pub secondary_color: String,
    /// Font family for labels and titles
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,
    /// Base font size in points
    #[validate(range(min = 6, max = 72, message = "Font size must be between 6 and 72"))]
    pub font_size: u32,
    /// Whether grid lines are drawn
    pub show_grid: bool,
    /// Whether a legend is drawn where applicable
    pub show_legend: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background_color: "#FFFFFF".to_string(),
            primary_color: "#1F77B4".to_string(),
            secondary_color: "#FF7F0E".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 12,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// One time slot definition
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlotConfig {
    /// Display label for the slot
    #[validate(length(min = 1, message = "Slot label cannot be empty"))]
    pub label: String,
    /// First hour of the slot, inclusive
    #[validate(range(max = 23, message = "Start hour must be between 0 and 23"))]
    pub start_hour: u8,
    /// Last hour of the slot, inclusive
    #[validate(range(max = 23, message = "End hour must be between 0 and 23"))]
    pub end_hour: u8,
}

impl SlotConfig {
    /// Convert to the engine's slot type
    pub fn to_time_slot(&self) -> TimeSlot {
        TimeSlot::new(self.label.clone(), self.start_hour, self.end_hour)
    }
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OutputConfig {
    /// Directory where charts are written
    #[validate(length(min = 1, message = "Output directory cannot be empty"))]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "charts".to_string(),
        }
    }
}

/// Logging behavior
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level filter
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be trace, debug, info, warn, or error"
    ))]
    pub level: String,
    /// Whether log output uses JSON formatting
    pub json_format: bool,
    /// Optional log file path
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_default_time_slots_match_reference_partition() {
        let config = Config::default();
        assert_eq!(config.to_time_slots(), TimeSlot::reference_slots());
    }

    #[test]
    fn test_invalid_color_fails_validation() {
        let mut config = Config::default();
        config.graphs.background_color = "white".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_width_out_of_range_fails_validation() {
        let mut config = Config::default();
        config.graphs.width = 10;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_empty_day_csv_path_fails_validation() {
        let mut config = Config::default();
        config.data.day_csv = String::new();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_empty_slot_label_fails_validation() {
        let mut config = Config::default();
        config.time_slots[0].label = String::new();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_slot_hour_out_of_range_fails_validation() {
        let mut config = Config::default();
        config.time_slots[0].end_hour = 24;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_inverted_slot_range_fails_validation() {
        let mut config = Config::default();
        config.time_slots[0].start_hour = 10;
        config.time_slots[0].end_hour = 5;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_empty_slot_list_fails_validation() {
        let mut config = Config::default();
        config.time_slots.clear();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_overlapping_slots_are_allowed() {
        let mut config = Config::default();
        config.time_slots = vec![
            SlotConfig {
                label: "First Half".to_string(),
                start_hour: 0,
                end_hour: 12,
            },
            SlotConfig {
                label: "Second Half".to_string(),
                start_hour: 6,
                end_hour: 23,
            },
        ];

        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_invalid_log_level_fails_validation() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(back.graphs.width, config.graphs.width);
        assert_eq!(back.time_slots.len(), config.time_slots.len());
        assert_eq!(back.data.day_csv, config.data.day_csv);
    }
}
