use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mock_weather_processor::chart::{PngBarChart, TerminalBarChart};
use mock_weather_processor::constants::{DEFAULT_CHART_PATH, DEFAULT_EXPORT_PATH};
use mock_weather_processor::WeatherProcessor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Generate mock city weather, analyze it and export it as JSON")]
struct Cli {
    /// File the generated weather data is written to
    #[arg(short, long, env = "WEATHER_EXPORT_PATH", default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,

    /// PNG file for the temperature bar chart
    #[arg(long, env = "WEATHER_CHART_PATH", default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,

    /// Seed for reproducible output; drawn from OS entropy when omitted
    #[arg(long, env = "WEATHER_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_weather_processor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut processor = WeatherProcessor::new().with_export_path(&cli.output);
    if !cli.no_chart {
        processor = processor
            .with_chart(PngBarChart::new(&cli.chart))
            .with_chart(TerminalBarChart);
    }

    let report = processor
        .run(&mut rng)
        .context("weather data processing failed")?;

    tracing::info!(
        "Processed {} cities, {} alert(s)",
        report.dataset.len(),
        report.alerts.len()
    );
    Ok(())
}
