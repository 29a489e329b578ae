//! ridegraph - chart generation for bike-share rental analytics

mod export;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use ridegraph_common::logging::{init_logging, LoggingConfig};
use ridegraph_common::utils::{format_count, format_date};
use ridegraph_config::{Config, ConfigLoader};
use ridegraph_data::Dataset;
use ridegraph_graphs::{
    ColorScheme, GraphConfig, GraphRenderer, HourWeekdayHeatmap, SeasonMeansChart, SlotMeansChart,
    TimeSeriesChart, WeekdayMeansChart,
};
use ridegraph_stats::AggregationManager;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Output directory override
    #[arg(short, long)]
    output: Option<String>,

    /// Write the aggregated summaries as JSON next to the charts
    #[arg(long)]
    export_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let logging_config = LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        json_format: config.logging.json_format,
        file_path: config.logging.file.clone(),
        ..Default::default()
    };
    init_logging(&logging_config)?;

    info!("Starting ridegraph v{}", env!("CARGO_PKG_VERSION"));

    let output_dir = PathBuf::from(
        args.output
            .clone()
            .unwrap_or_else(|| config.output.directory.clone()),
    );
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let dataset = Dataset::load(&config.data.day_csv, &config.data.hour_csv)?;
    info!(
        "Dataset ready: {} daily rows, {} hourly rows",
        format_count(dataset.daily.len() as u64),
        format_count(dataset.hourly.len() as u64)
    );

    let manager = AggregationManager::new();
    let time_series = manager.time_series(&dataset.daily);
    let weekday_means = manager.mean_by_weekday(&dataset.daily);
    let season_means = manager.mean_by_season(&dataset.daily);
    let pivot = manager.mean_by_hour_and_weekday(&dataset.hourly);
    let slots = config.to_time_slots();
    let slot_means = manager.mean_by_time_slot(&dataset.hourly, &slots);

    if let (Some(first), Some(last)) = (time_series.first(), time_series.last()) {
        info!(
            "Time series covers {} through {}",
            format_date(first.date),
            format_date(last.date)
        );
    }

    let mut rendered = 0usize;
    let total = 5usize;

    let (mut chart, mut graph_config) = TimeSeriesChart::with_config(
        "Daily Total Bike Rentals Over Time",
        "Date",
        "Total Bike Rentals",
    );
    apply_graph_settings(&mut graph_config, &config);
    chart.set_data(time_series.clone());
    if render(&chart, &graph_config, &output_dir.join("rentals_daily.png")).await {
        rendered += 1;
    }

    let (mut chart, mut graph_config) = WeekdayMeansChart::with_config(
        "Average Rentals per Weekday",
        "Weekday",
        "Average Daily Rentals",
    );
    apply_graph_settings(&mut graph_config, &config);
    chart.set_data(&weekday_means);
    if render(
        &chart,
        &graph_config,
        &output_dir.join("rentals_by_weekday.png"),
    )
    .await
    {
        rendered += 1;
    }

    let (mut chart, mut graph_config) = SeasonMeansChart::with_config(
        "Average Rentals per Season",
        "Season",
        "Average Daily Rentals",
    );
    apply_graph_settings(&mut graph_config, &config);
    chart.set_data(&season_means);
    if render(
        &chart,
        &graph_config,
        &output_dir.join("rentals_by_season.png"),
    )
    .await
    {
        rendered += 1;
    }

    let (mut chart, mut graph_config) = HourWeekdayHeatmap::with_config(
        "Hourly Bike Rentals by Weekday",
        "Weekday",
        "Hour of the Day",
    );
    apply_graph_settings(&mut graph_config, &config);
    chart.set_data(pivot.clone());
    if render(
        &chart,
        &graph_config,
        &output_dir.join("rentals_hour_weekday.png"),
    )
    .await
    {
        rendered += 1;
    }

    let (mut chart, mut graph_config) = SlotMeansChart::with_config(
        "Average Bike Rentals by Time of Day",
        "Time of Day",
        "Average Bike Rentals",
    );
    apply_graph_settings(&mut graph_config, &config);
    chart.set_data(slot_means.clone());
    if render(
        &chart,
        &graph_config,
        &output_dir.join("rentals_by_time_slot.png"),
    )
    .await
    {
        rendered += 1;
    }

    if args.export_json {
        let summaries = export::Summaries {
            time_series,
            weekday_means,
            season_means,
            hour_weekday: pivot,
            slot_means,
        };
        let path = output_dir.join("summaries.json");
        export::write_summaries(&path, &summaries)?;
        info!("Wrote summaries to {}", path.display());
    }

    if rendered == 0 {
        anyhow::bail!("No charts could be rendered");
    }

    info!(
        "Generated {} of {} charts in {}",
        rendered,
        total,
        output_dir.display()
    );

    Ok(())
}

/// Render one chart, logging instead of aborting on failure
async fn render<R: GraphRenderer>(chart: &R, graph_config: &GraphConfig, path: &Path) -> bool {
    match chart.render_to_file(graph_config, path).await {
        Ok(()) => true,
        Err(e) => {
            warn!(
                "Skipping {} chart: {}",
                graph_config.graph_type.display_name(),
                e
            );
            false
        }
    }
}

/// Carry the configured appearance into a chart's graph configuration
fn apply_graph_settings(graph_config: &mut GraphConfig, config: &Config) {
    graph_config.width = config.graphs.width;
    graph_config.height = config.graphs.height;
    graph_config.style.background_color = config.graphs.background_color.clone();
    graph_config.style.color_scheme = ColorScheme::Custom(vec![
        config.graphs.primary_color.clone(),
        config.graphs.secondary_color.clone(),
    ]);
    graph_config.style.font.family = config.graphs.font_family.clone();
    graph_config.style.font.size = config.graphs.font_size;
    graph_config.style.title_font.family = config.graphs.font_family.clone();
    graph_config.style.title_font.size = config.graphs.font_size + 4;
    graph_config.style.show_legend = config.graphs.show_legend;
    if !config.graphs.show_grid {
        graph_config.style.grid.show_x = false;
        graph_config.style.grid.show_y = false;
    }
}
