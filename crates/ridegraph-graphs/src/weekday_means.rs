//! Bar chart of mean daily rentals per weekday

use async_trait::async_trait;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

use ridegraph_common::error::{Error, Result};
use ridegraph_common::records::Weekday;

use crate::renderer::GraphRenderer;
use crate::types::{GraphConfig, GraphType};

/// Mean rentals per weekday; days with no observations get no bar
#[derive(Debug, Clone)]
pub struct WeekdayMeansChart {
    /// Weekday means in code order (Sunday first)
    pub data: Vec<(Weekday, f64)>,
    /// Whether weekend bars use the secondary color
    pub highlight_weekends: bool,
}

impl WeekdayMeansChart {
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
            graph_type: GraphType::RentalsByWeekday,
            title: title.into(),
            width: 900,
            height: 600,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Default::default()
        };

        (Self::new(), config)
    }

    /// Disable the weekend highlight color
    pub fn without_weekend_highlights(mut self) -> Self {
        self.highlight_weekends = false;
        self
    }

    /// Replace the chart data from aggregated weekday means
    ///
    /// Weekdays absent from the map stay absent here; they are never filled
    /// in as zero bars.
    pub fn set_data(&mut self, means: &BTreeMap<Weekday, f64>) {
        self.data = means.iter().map(|(weekday, mean)| (*weekday, *mean)).collect();
    }

    /// Upper bound for the y axis, with headroom above the tallest bar
    fn max_mean(&self) -> f64 {
        if self.data.is_empty() {
            return 10.0;
        }

        let max = self.data.iter().map(|(_, mean)| *mean).fold(0.0, f64::max);
        (max * 1.1).max(10.0)
    }
}

#[async_trait]
impl GraphRenderer for WeekdayMeansChart {
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::graph("No data available for weekday chart"));
        }

        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        self.apply_styling(&root, config)?;

        let colors = self.get_colors(&config.style.color_scheme);
        let bar_color = colors.first().copied().unwrap_or(RGBColor(31, 119, 180));
        let weekend_color = colors.get(1).copied().unwrap_or(RGBColor(255, 127, 14));

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
            .build_cartesian_2d(-0.5f64..6.5f64, 0f64..self.max_mean())?;

        let x_label_formatter = |x: &f64| {
            let code = x.round();
            if (x - code).abs() < 0.25 && (0.0..=6.0).contains(&code) {
                Weekday::try_from(code as u8)
                    .map(|weekday| weekday.short_name().to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .x_labels(7)
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

        chart.draw_series(self.data.iter().map(|(weekday, mean)| {
            let x = f64::from(weekday.code());
            let color = if self.highlight_weekends && weekday.is_weekend() {
                weekend_color
            } else {
                bar_color
            };
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, *mean)], color.filled())
        }))?;

        root.present()?;
        tracing::info!(
            "Successfully rendered weekday chart to {}",
            output_path.display()
        );

        Ok(())
    }

    async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
        Err(Error::graph(
            "In-memory rendering is not implemented for weekday charts",
        ))
    }
}

impl Default for WeekdayMeansChart {
    fn default() -> Self {
        Self::new()
    }
}
