//! Bar chart of mean daily rentals per season

use async_trait::async_trait;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

use ridegraph_common::error::{Error, Result};
use ridegraph_common::records::Season;

use crate::renderer::GraphRenderer;
use crate::types::{GraphConfig, GraphType};

/// Mean rentals per season; seasons with no observations get no bar
#[derive(Debug, Clone)]
pub struct SeasonMeansChart {
    /// Season means in code order (spring first)
    pub data: Vec<(Season, f64)>,
}

impl SeasonMeansChart {
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
            graph_type: GraphType::RentalsBySeason,
            title: title.into(),
            width: 900,
            height: 600,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Default::default()
        };

        (Self::new(), config)
    }

    /// Replace the chart data from aggregated season means
    ///
    /// Seasons absent from the map stay absent here; they are never filled
    /// in as zero bars.
    pub fn set_data(&mut self, means: &BTreeMap<Season, f64>) {
        self.data = means.iter().map(|(season, mean)| (*season, *mean)).collect();
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
impl GraphRenderer for SeasonMeansChart {
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::graph("No data available for season chart"));
        }

        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        self.apply_styling(&root, config)?;

        let colors = self.get_colors(&config.style.color_scheme);

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
            .build_cartesian_2d(0.5f64..4.5f64, 0f64..self.max_mean())?;

        let x_label_formatter = |x: &f64| {
            let code = x.round();
            if (x - code).abs() < 0.25 && (1.0..=4.0).contains(&code) {
                Season::try_from(code as u8)
                    .map(|season| season.name().to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .x_labels(4)
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

        chart.draw_series(self.data.iter().enumerate().map(|(i, (season, mean))| {
            let x = f64::from(season.code());
            let color = colors
                .get(i % colors.len().max(1))
                .copied()
                .unwrap_or(RGBColor(31, 119, 180));
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, *mean)], color.filled())
        }))?;

        root.present()?;
        tracing::info!(
            "Successfully rendered season chart to {}",
            output_path.display()
        );

        Ok(())
    }

    async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
        Err(Error::graph(
            "In-memory rendering is not implemented for season charts",
        ))
    }
}

impl Default for SeasonMeansChart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_means() -> BTreeMap<Season, f64> {
        let mut means = BTreeMap::new();
        means.insert(Season::Spring, 2604.1);
        means.insert(Season::Summer, 4992.3);
        means.insert(Season::Fall, 5644.3);
        means
    }

    #[test]
    fn test_set_data_keeps_code_order() {
        let mut chart = SeasonMeansChart::new();
        chart.set_data(&sample_means());

        let seasons: Vec<Season> = chart.data.iter().map(|(season, _)| *season).collect();
        assert_eq!(seasons, vec![Season::Spring, Season::Summer, Season::Fall]);
    }

    #[test]
    fn test_absent_seasons_get_no_bar() {
        let mut chart = SeasonMeansChart::new();
        chart.set_data(&sample_means());

        assert_eq!(chart.data.len(), 3);
        assert!(!chart.data.iter().any(|(season, _)| *season == Season::Winter));
    }

    #[test]
    fn test_max_mean_with_empty_data() {
        let chart = SeasonMeansChart::new();
        assert_eq!(chart.max_mean(), 10.0);
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("season.png");

        let (mut chart, config) = SeasonMeansChart::with_config(
            "Average Rentals per Season",
            "Season",
            "Average Daily Rentals",
        );
        chart.set_data(&sample_means());

        chart.render_to_file(&config, &output_path).await.unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 1000);
    }

    #[tokio::test]
    async fn test_render_with_empty_data_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.png");

        let (chart, config) = SeasonMeansChart::with_config("Empty", "Season", "Rentals");
        assert!(chart.render_to_file(&config, &output_path).await.is_err());
    }
}
