use std::path::PathBuf;

use rand::Rng;

use crate::alerts::{process_alerts, Alert};
use crate::analyzer::{aggregate, temperature_chart};
use crate::chart::{BarChart, ChartSink};
use crate::constants::{CITIES, DEFAULT_EXPORT_PATH};
use crate::error::ProcessorError;
use crate::exporter::export_dataset;
use crate::formatters::{format_alerts, format_summary};
use crate::generator::generate_dataset;
use crate::models::{TemperatureStats, WeatherDataset};

/// Outcome of one pipeline run
#[derive(Debug)]
pub struct RunReport {
    pub dataset: WeatherDataset,
    pub stats: TemperatureStats,
    pub alerts: Vec<Alert>,
    /// Names of chart sinks that failed to render
    pub failed_charts: Vec<String>,
    pub export_path: PathBuf,
}

/// Runs generate, analyze and chart, alert, then export, printing progress to stdout
pub struct WeatherProcessor {
    cities: Vec<String>,
    export_path: PathBuf,
    charts: Vec<Box<dyn ChartSink>>,
}

impl Default for WeatherProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherProcessor {
    /// Creates a processor for the built-in city list, exporting to `weather_data.json`
    pub fn new() -> Self {
        Self {
            cities: CITIES.iter().map(|c| c.to_string()).collect(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            charts: Vec::new(),
        }
    }

    /// Sets the file the dataset is exported to
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Adds a chart sink; sinks render in the order they were added
    pub fn with_chart(mut self, sink: impl ChartSink + 'static) -> Self {
        self.charts.push(Box::new(sink));
        self
    }

    /// Renders on every sink, returning the names of those that failed
    fn render_charts(&self, chart: &BarChart) -> Vec<String> {
        let mut failed = Vec::new();
        for sink in &self.charts {
            if let Err(e) = sink.render(chart) {
                tracing::warn!("Chart sink '{}' failed, continuing: {}", sink.name(), e);
                failed.push(sink.name().to_string());
            }
        }
        failed
    }

    /// Runs the whole pipeline once, drawing every random value from `rng`.
    ///
    /// Chart failures are logged and reported in [`RunReport::failed_charts`];
    /// aggregation and export failures abort the run.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunReport, ProcessorError> {
        println!("\u{1f324}\u{fe0f} Generating weather data...");
        let cities: Vec<&str> = self.cities.iter().map(String::as_str).collect();
        let dataset = generate_dataset(&cities, rng);
        tracing::info!("Generated snapshots for {} cities", dataset.len());

        println!("\u{1f4ca} Analyzing temperature trends...");
        let stats = aggregate(&dataset)?;
        let failed_charts = self.render_charts(&temperature_chart(&dataset));
        print!("{}", format_summary(&stats));

        println!("\u{26a0}\u{fe0f} Processing weather alerts...");
        let alerts = process_alerts(&dataset);
        print!("{}", format_alerts(&alerts));

        println!("\u{1f4be} Exporting weather data...");
        export_dataset(&dataset, &self.export_path)?;
        println!("Weather data exported to {}", self.export_path.display());

        println!("\u{2705} Weather data processing complete!");
        Ok(RunReport {
            dataset,
            stats,
            alerts,
            failed_charts,
            export_path: self.export_path.clone(),
        })
    }
}
