//! Heatmap of mean hourly rentals by hour of day and weekday

use async_trait::async_trait;
use plotters::prelude::*;
use std::path::Path;

use ridegraph_common::error::{Error, Result};
use ridegraph_common::records::Weekday;
use ridegraph_stats::summaries::HourWeekdayPivot;

use crate::renderer::{blend_colors, GraphRenderer};
use crate::types::{GraphConfig, GraphType};

/// Tint used for the lowest defined mean; higher means blend toward the
/// palette's primary color
const LOW_TINT: RGBColor = RGBColor(239, 243, 255);

/// 24x7 heatmap of mean rentals; cells without observations stay blank
#[derive(Debug, Clone)]
pub struct HourWeekdayHeatmap {
    /// Pivot of means indexed by hour and weekday
    pub pivot: HourWeekdayPivot,
}

impl HourWeekdayHeatmap {
    /// Create an empty heatmap
    pub fn new() -> Self {
        Self {
            pivot: HourWeekdayPivot::new(),
        }
    }

    /// Create a heatmap together with its graph configuration
    pub fn with_config(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> (Self, GraphConfig) {
        let mut config = GraphConfig {
            graph_type: GraphType::RentalsByHourAndWeekday,
            title: title.into(),
            width: 900,
            height: 1000,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Default::default()
        };
        // Grid lines over filled cells obscure the color scale.
        config.style.grid.show_x = false;
        config.style.grid.show_y = false;

        (Self::new(), config)
    }

    /// Replace the heatmap data
    pub fn set_data(&mut self, pivot: HourWeekdayPivot) {
        self.pivot = pivot;
    }

    fn cell_color(value: f64, min: f64, max: f64, high: RGBColor) -> RGBColor {
        let t = if max > min {
            (value - min) / (max - min)
        } else {
            1.0
        };
        blend_colors(LOW_TINT, high, t)
    }
}

#[async_trait]
impl GraphRenderer for HourWeekdayHeatmap {
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()> {
        let (min_mean, max_mean) = match self.pivot.min_max() {
            Some(bounds) => bounds,
            None => {
                return Err(Error::graph(
                    "No data available for hour by weekday heatmap",
                ))
            }
        };

        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        self.apply_styling(&root, config)?;

        let colors = self.get_colors(&config.style.color_scheme);
        let high_color = colors.first().copied().unwrap_or(RGBColor(31, 119, 180));

        let mut chart = ChartBuilder::on(&root)
            .caption(
                &config.title,
                (
                    config.style.title_font.family.as_str(),
                    config.style.title_font.size,
                ),
            )
            .margin_top(config.style.margins.top)
            .margin_right(config.style.margins.right)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..7f64, 0f64..24f64)?;

        let x_label_formatter = |x: &f64| {
            if x.fract() == 0.0 && (0.0..7.0).contains(x) {
                Weekday::try_from(*x as u8)
                    .map(|weekday| weekday.short_name().to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        };
        let y_label_formatter = |y: &f64| {
            if y.fract() == 0.0 && (0.0..24.0).contains(y) {
                format!("{:02}:00", *y as u8)
            } else {
                String::new()
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .x_labels(7)
            .y_labels(12)
            .x_label_formatter(&x_label_formatter)
            .y_label_formatter(&y_label_formatter)
            .label_style((
                config.style.font.family.as_str(),
                config.style.font.size,
            ));

        if !config.style.grid.show_x && !config.style.grid.show_y {
            mesh.disable_mesh();
        } else if !config.style.grid.show_x {
            mesh.disable_x_mesh();
        } else if !config.style.grid.show_y {
            mesh.disable_y_mesh();
        }

        mesh.draw()?;

        let mut cells = Vec::new();
        for (hour, row) in self.pivot.cells.iter().enumerate() {
            for (weekday, cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    let color = Self::cell_color(*value, min_mean, max_mean, high_color);
                    cells.push(Rectangle::new(
                        [
                            (weekday as f64, hour as f64),
                            (weekday as f64 + 1.0, hour as f64 + 1.0),
                        ],
                        color.filled(),
                    ));
                }
            }
        }
        chart.draw_series(cells)?;

        root.present()?;
        tracing::info!(
            "Successfully rendered hour by weekday heatmap to {}",
            output_path.display()
        );

        Ok(())
    }

    async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
        Err(Error::graph(
            "In-memory rendering is not implemented for heatmaps",
        ))
    }
}

impl Default for HourWeekdayHeatmap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_pivot() -> HourWeekdayPivot {
        let mut pivot = HourWeekdayPivot::new();
        pivot.cells[8][1] = Some(250.0);
        pivot.cells[8][2] = Some(260.0);
        pivot.cells[17][1] = Some(420.0);
        pivot.cells[3][0] = Some(12.0);
        pivot
    }

    #[test]
    fn test_new_heatmap_is_empty() {
        let heatmap = HourWeekdayHeatmap::new();
        assert!(heatmap.pivot.is_empty());
    }

    #[test]
    fn test_set_data() {
        let mut heatmap = HourWeekdayHeatmap::new();
        heatmap.set_data(sample_pivot());

        assert_eq!(heatmap.pivot.defined_cells(), 4);
        assert_eq!(heatmap.pivot.get(17, Weekday::Monday), Some(420.0));
    }

    #[test]
    fn test_cell_color_spans_the_scale() {
        let high = RGBColor(31, 119, 180);

        assert_eq!(HourWeekdayHeatmap::cell_color(0.0, 0.0, 100.0, high), LOW_TINT);
        assert_eq!(HourWeekdayHeatmap::cell_color(100.0, 0.0, 100.0, high), high);
    }

    #[test]
    fn test_cell_color_with_uniform_data() {
        let high = RGBColor(31, 119, 180);

        // All cells equal: everything gets the full color.
        assert_eq!(HourWeekdayHeatmap::cell_color(50.0, 50.0, 50.0, high), high);
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("heatmap.png");

        let (mut heatmap, config) = HourWeekdayHeatmap::with_config(
            "Hourly Bike Rentals by Weekday",
            "Weekday",
            "Hour of the Day",
        );
        heatmap.set_data(sample_pivot());

        heatmap.render_to_file(&config, &output_path).await.unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 1000);
    }

    #[tokio::test]
    async fn test_render_with_empty_pivot_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.png");

        let (heatmap, config) = HourWeekdayHeatmap::with_config("Empty", "Weekday", "Hour");
        assert!(heatmap.render_to_file(&config, &output_path).await.is_err());
    }
}
