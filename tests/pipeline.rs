//! End-to-end runs of the weather pipeline

use mock_weather_processor::chart::PngBarChart;
use mock_weather_processor::constants::{CITIES, FORECAST_DAY_LABELS};
use mock_weather_processor::exporter::load_dataset;
use mock_weather_processor::WeatherProcessor;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn repeated_runs_keep_the_same_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather_data.json");
    let processor = WeatherProcessor::new().with_export_path(&path);

    let first = processor.run(&mut rand::thread_rng()).unwrap();
    let second = processor.run(&mut rand::thread_rng()).unwrap();

    for report in [&first, &second] {
        let keys: Vec<_> = report.dataset.keys().map(String::as_str).collect();
        assert_eq!(keys, CITIES);
        for snapshot in report.dataset.values() {
            let days: Vec<_> = snapshot.forecast.iter().map(|d| d.day.as_str()).collect();
            assert_eq!(days, FORECAST_DAY_LABELS);
        }
    }
}

#[test]
fn exported_file_matches_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather_data.json");
    let chart_path = dir.path().join("temperature_analysis.png");
    let processor = WeatherProcessor::new()
        .with_export_path(&path)
        .with_chart(PngBarChart::new(&chart_path));

    let report = processor.run(&mut StdRng::seed_from_u64(77)).unwrap();

    assert!(report.failed_charts.is_empty());
    assert!(chart_path.exists());
    assert_eq!(report.export_path, path);
    let loaded = load_dataset(&path).unwrap();
    assert_eq!(loaded, report.dataset);
    assert!(f64::from(report.stats.min) <= report.stats.average);
    assert!(report.stats.average <= f64::from(report.stats.max));
}

#[test]
fn unwritable_chart_path_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather_data.json");
    let processor = WeatherProcessor::new()
        .with_export_path(&path)
        .with_chart(PngBarChart::new(dir.path().join("no_such_dir").join("chart.png")));

    let report = processor.run(&mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(report.failed_charts, ["png"]);
    assert!(load_dataset(&path).is_ok());
}

#[test]
fn fixed_seed_reproduces_run() {
    let dir = tempfile::tempdir().unwrap();
    let processor = WeatherProcessor::new().with_export_path(dir.path().join("a.json"));

    let a = processor.run(&mut StdRng::seed_from_u64(10)).unwrap();
    let b = processor.run(&mut StdRng::seed_from_u64(10)).unwrap();

    assert_eq!(a.dataset, b.dataset);
    assert_eq!(a.alerts, b.alerts);
}
