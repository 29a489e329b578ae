//! Type definitions for graph generation

use serde::{Deserialize, Serialize};

/// The charts ridegraph can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphType {
    /// Daily rental totals over the full date range
    DailyRentals,
    /// Mean daily rentals per weekday
    RentalsByWeekday,
    /// Mean daily rentals per season
    RentalsBySeason,
    /// Mean hourly rentals per hour and weekday
    RentalsByHourAndWeekday,
    /// Mean hourly rentals per time slot
    RentalsByTimeSlot,
}

impl GraphType {
    /// Human-readable name for log output
    pub fn display_name(&self) -> &'static str {
        match self {
            GraphType::DailyRentals => "daily rentals",
            GraphType::RentalsByWeekday => "rentals by weekday",
            GraphType::RentalsBySeason => "rentals by season",
            GraphType::RentalsByHourAndWeekday => "rentals by hour and weekday",
            GraphType::RentalsByTimeSlot => "rentals by time slot",
        }
    }
}

/// Configuration for graph generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Which chart this configuration is for
    pub graph_type: GraphType,
    /// Chart title drawn above the plot area
    pub title: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// X axis description
    pub x_label: String,
    /// Y axis description
    pub y_label: String,
    /// Visual styling
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_type: GraphType::DailyRentals,
            title: "Graph".to_string(),
            width: 800,
            height: 600,
            x_label: String::new(),
            y_label: String::new(),
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme options for charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Standard palette
    Default,
    /// Dark theme palette
    Dark,
    /// Light theme palette
    Light,
    /// Saturated palette
    Vibrant,
    /// Grayscale palette
    Monochrome,
    /// User-provided hex colors
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in points
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 40,
            left: 60,
        }
    }
}

/// Grid line visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Whether vertical grid lines are drawn
    pub show_x: bool,
    /// Whether horizontal grid lines are drawn
    pub show_y: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: true,
        }
    }
}

/// Visual styling for a chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Palette used for series colors
    pub color_scheme: ColorScheme,
    /// Font for axis labels and tick marks
    pub font: FontConfig,
    /// Font for the chart title
    pub title_font: FontConfig,
    /// Plot area margins
    pub margins: MarginConfig,
    /// Grid line visibility
    pub grid: GridConfig,
    /// Background color as a hex string
    pub background_color: String,
    /// Whether a series legend is drawn
    pub show_legend: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            font: FontConfig::default(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 16,
            },
            margins: MarginConfig::default(),
            grid: GridConfig::default(),
            background_color: "#FFFFFF".to_string(),
            show_legend: true,
        }
    }
}
