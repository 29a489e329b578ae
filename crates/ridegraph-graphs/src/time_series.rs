//! Line chart of total rentals per day

use async_trait::async_trait;
use chrono::Datelike;
use plotters::prelude::*;
use std::path::Path;

use ridegraph_common::error::{Error, Result};
use ridegraph_stats::summaries::TimeSeriesPoint;

use crate::renderer::GraphRenderer;
use crate::types::{GraphConfig, GraphType};

/// Daily rentals over the full date range, with optional weekend markers
#[derive(Debug, Clone)]
pub struct TimeSeriesChart {
    /// Chart points, kept sorted by date
    pub data: Vec<TimeSeriesPoint>,
    /// Whether weekend days get highlight markers
    pub highlight_weekends: bool,
}

impl TimeSeriesChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            highlight_weekends: true,
        }
    }

    /// Create a chart together with its graph configuration
    pub fn with_config(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> (Self, GraphConfig) {
        let config = GraphConfig {
            graph_type: GraphType::DailyRentals,
            title: title.into(),
            width: 1200,
            height: 600,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Default::default()
        };

        (Self::new(), config)
    }

    /// Disable weekend highlight markers
    pub fn without_weekend_highlights(mut self) -> Self {
        self.highlight_weekends = false;
        self
    }

    /// Replace the chart data, sorting by date
    pub fn set_data(&mut self, mut points: Vec<TimeSeriesPoint>) {
        points.sort_by_key(|point| point.date);
        self.data = points;
    }

    /// Upper bound for the y axis, with headroom above the tallest point
    fn max_count(&self) -> f64 {
        if self.data.is_empty() {
            return 10.0;
        }

        let max = self.data.iter().map(|point| point.count).max().unwrap_or(0);
        (f64::from(max) * 1.1).max(10.0)
    }

    /// Chart points as (index, count) pairs
    fn plot_points(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, f64::from(point.count)))
            .collect()
    }

    /// Points that fall on a Saturday or Sunday
    fn weekend_points(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, point)| {
                matches!(
                    point.date.weekday(),
                    chrono::Weekday::Sat | chrono::Weekday::Sun
                )
            })
            .map(|(i, point)| (i as f64, f64::from(point.count)))
            .collect()
    }
}

#[async_trait]
impl GraphRenderer for TimeSeriesChart {
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::graph("No data available for time series chart"));
        }

        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        self.apply_styling(&root, config)?;

        let colors = self.get_colors(&config.style.color_scheme);
        let line_color = colors.first().copied().unwrap_or(RGBColor(31, 119, 180));
        let weekend_color = colors.get(1).copied().unwrap_or(RGBColor(255, 127, 14));

        let x_max = self.data.len().saturating_sub(1).max(1) as f64;
        let y_max = self.max_count();

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
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        let dates: Vec<String> = self
            .data
            .iter()
            .map(|point| point.date.format("%Y-%m-%d").to_string())
            .collect();
        let x_label_formatter = |x: &f64| {
            let idx = x.round() as usize;
            dates.get(idx).cloned().unwrap_or_default()
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .x_labels(10)
            .x_label_formatter(&x_label_formatter)
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

        chart
            .draw_series(LineSeries::new(
                self.plot_points(),
                line_color.stroke_width(2),
            ))?
            .label("Daily rentals")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });

        if self.highlight_weekends {
            chart
                .draw_series(
                    self.weekend_points()
                        .into_iter()
                        .map(|point| Circle::new(point, 3, weekend_color.filled())),
                )?
                .label("Weekend")
                .legend(move |(x, y)| Circle::new((x + 10, y), 3, weekend_color.filled()));
        }

        if config.style.show_legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
        tracing::info!(
            "Successfully rendered time series chart to {}",
            output_path.display()
        );

        Ok(())
    }

    async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
        Err(Error::graph(
            "In-memory rendering is not implemented for time series charts",
        ))
    }
}

impl Default for TimeSeriesChart {
    fn default() -> Self {
        Self::new()
    }
}
