//! Graph rendering engine built on plotters

use async_trait::async_trait;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use ridegraph_common::error::Result;

use crate::types::{ColorScheme, GraphConfig};

/// Trait for rendering a chart with plotters
#[async_trait]
pub trait GraphRenderer {
    /// Render the chart as a PNG file at the given path
    async fn render_to_file(&self, config: &GraphConfig, output_path: &Path) -> Result<()>;

    /// Render the chart into an in-memory PNG buffer
    async fn render_to_bytes(&self, config: &GraphConfig) -> Result<Vec<u8>>;

    /// Fill the drawing area with the configured background
    fn apply_styling<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: 'static + Send + Sync + std::error::Error,
    {
        let background = self.get_background_color(config);
        root.fill(&background)?;
        Ok(())
    }

    /// Resolve the series palette for a color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
                RGBColor(214, 39, 40),
                RGBColor(148, 103, 189),
            ],
            ColorScheme::Dark => vec![
                RGBColor(114, 158, 206),
                RGBColor(255, 158, 74),
                RGBColor(103, 191, 92),
                RGBColor(237, 102, 93),
                RGBColor(173, 139, 201),
            ],
            ColorScheme::Light => vec![
                RGBColor(174, 199, 232),
                RGBColor(255, 187, 120),
                RGBColor(152, 223, 138),
                RGBColor(255, 152, 150),
                RGBColor(197, 176, 213),
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),
                RGBColor(60, 180, 75),
                RGBColor(0, 130, 200),
                RGBColor(245, 130, 48),
                RGBColor(145, 30, 180),
            ],
            ColorScheme::Monochrome => vec![
                RGBColor(50, 50, 50),
                RGBColor(100, 100, 100),
                RGBColor(150, 150, 150),
                RGBColor(200, 200, 200),
                RGBColor(25, 25, 25),
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color| self.parse_color(color))
                .collect(),
        }
    }

    /// Parse a hex color string, falling back to black on invalid input
    fn parse_color(&self, hex: &str) -> RGBColor {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
        RGBColor(0, 0, 0)
    }

    /// Background color from the style configuration, white on invalid input
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        let hex = config.style.background_color.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
        RGBColor(255, 255, 255)
    }
}

/// Linear blend between two colors, with `t` clamped to 0.0..=1.0
pub fn blend_colors(low: RGBColor, high: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    };
    RGBColor(
        channel(low.0, high.0),
        channel(low.1, high.1),
        channel(low.2, high.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphType;

    struct MockRenderer;

    #[async_trait]
    impl GraphRenderer for MockRenderer {
        async fn render_to_file(&self, _config: &GraphConfig, _output_path: &Path) -> Result<()> {
            Ok(())
        }

        async fn render_to_bytes(&self, _config: &GraphConfig) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_default_palette_has_five_colors() {
        let renderer = MockRenderer;
        for scheme in [
            ColorScheme::Default,
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::Vibrant,
            ColorScheme::Monochrome,
        ] {
            assert_eq!(renderer.get_colors(&scheme).len(), 5);
        }
    }

    #[test]
    fn test_custom_palette() {
        let renderer = MockRenderer;
        let scheme = ColorScheme::Custom(vec!["#FF0000".to_string(), "#00FF00".to_string()]);

        let colors = renderer.get_colors(&scheme);
        assert_eq!(colors, vec![RGBColor(255, 0, 0), RGBColor(0, 255, 0)]);
    }

    #[test]
    fn test_parse_color() {
        let renderer = MockRenderer;
        assert_eq!(renderer.parse_color("#1F77B4"), RGBColor(31, 119, 180));
        assert_eq!(renderer.parse_color("FF7F0E"), RGBColor(255, 127, 14));
    }

    #[test]
    fn test_parse_color_falls_back_to_black() {
        let renderer = MockRenderer;
        assert_eq!(renderer.parse_color("not a color"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#12345"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_background_color_falls_back_to_white() {
        let renderer = MockRenderer;

        let mut config = GraphConfig {
            graph_type: GraphType::DailyRentals,
            ..Default::default()
        };
        config.style.background_color = "bogus".to_string();

        assert_eq!(
            renderer.get_background_color(&config),
            RGBColor(255, 255, 255)
        );
    }

    #[test]
    fn test_blend_colors() {
        let low = RGBColor(0, 0, 0);
        let high = RGBColor(200, 100, 50);

        assert_eq!(blend_colors(low, high, 0.0), low);
        assert_eq!(blend_colors(low, high, 1.0), high);
        assert_eq!(blend_colors(low, high, 0.5), RGBColor(100, 50, 25));
        // Values outside the unit range clamp instead of extrapolating.
        assert_eq!(blend_colors(low, high, 2.0), high);
        assert_eq!(blend_colors(low, high, -1.0), low);
    }
}
