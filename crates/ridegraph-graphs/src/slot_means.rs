//! Bar chart of mean hourly rentals per time slot

use async_trait::async_trait;
use plotters::prelude::*;
use std::cmp::Ordering;
use std::path::Path;

use ridegraph_common::error::{Error, Result};
use ridegraph_stats::summaries::SlotMean;

use crate::renderer::GraphRenderer;
use crate::types::{GraphConfig, GraphType};

/// Mean rentals per time slot, ordered for presentation
///
/// The aggregation engine reports slots in the caller's order; this chart
/// reorders them by descending mean for display. Slots without data keep
/// their axis label but get no bar.
#[derive(Debug, Clone)]
pub struct SlotMeansChart {
    /// Slot means, highest first
    pub data: Vec<SlotMean>,
}

impl SlotMeansChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a chart together with its graph configuration
    pub fn with_config(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> (Self, GraphConfig) {
        let config = GraphConfig {
            graph_type: GraphType::RentalsByTimeSlot,
            title: title.into(),
            width: 900,
            height: 600,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Default::default()
        };

        (Self::new(), config)
    }

    /// Replace the chart data, ordering slots by descending mean
    ///
    /// Slots without a defined mean sort to the end.
    pub fn set_data(&mut self, mut means: Vec<SlotMean>) {
        means.sort_by(|a, b| match (a.mean, b.mean) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        for slot_mean in means.iter().filter(|m| m.mean.is_none()) {
            tracing::warn!(
                "Time slot '{}' has no data and will not be drawn",
                slot_mean.slot.label
            );
        }

        self.data = means;
    }

    /// Upper bound for the y axis, with headroom above the tallest bar
    fn max_mean(&self) -> f64 {
        let max = self
            .data
            .iter()
            .filter_map(|slot_mean| slot_mean.mean)
            .fold(0.0, f64::max);

        if max == 0.0 {
            10.0
        } else {
            (max * 1.1).max(10.0)
        }
    }
}

#[async_trait]
impl GraphRenderer for SlotMeansChart {
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()> {
        if self.data.iter().all(|slot_mean| slot_mean.mean.is_none()) {
            return Err(Error::graph("No data available for time slot chart"));
        }

        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        self.apply_styling(&root, config)?;

        let colors = self.get_colors(&config.style.color_scheme);
        let x_max = self.data.len() as f64 - 0.5;

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
            .build_cartesian_2d(-0.5f64..x_max, 0f64..self.max_mean())?;

        let labels: Vec<String> = self
            .data
            .iter()
            .map(|slot_mean| slot_mean.slot.label.clone())
            .collect();
        let x_label_formatter = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.25 && idx >= 0.0 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .x_labels(self.data.len().max(1))
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

        chart.draw_series(self.data.iter().enumerate().filter_map(|(i, slot_mean)| {
            let mean = slot_mean.mean?;
            let x = i as f64;
            let color = colors
                .get(i % colors.len().max(1))
                .copied()
                .unwrap_or(RGBColor(31, 119, 180));
            Some(Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, mean)],
                color.filled(),
            ))
        }))?;

        root.present()?;
        tracing::info!(
            "Successfully rendered time slot chart to {}",
            output_path.display()
        );

        Ok(())
    }

    async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
        Err(Error::graph(
            "In-memory rendering is not implemented for time slot charts",
        ))
    }
}

impl Default for SlotMeansChart {
    fn default() -> Self {
        Self::new()
    }
}
