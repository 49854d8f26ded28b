use crate::chart::BarChart;
use crate::constants::{CHART_TITLE, CHART_X_LABEL, CHART_Y_LABEL};
use crate::error::AnalysisError;
use crate::models::{TemperatureStats, WeatherDataset};

/// Mean, extremes and spread of the current temperatures in a dataset
pub fn aggregate(dataset: &WeatherDataset) -> Result<TemperatureStats, AnalysisError> {
    let temperatures: Vec<i32> = dataset
        .values()
        .map(|snapshot| snapshot.current.temperature)
        .collect();

    let (Some(&max), Some(&min)) = (temperatures.iter().max(), temperatures.iter().min()) else {
        return Err(AnalysisError::EmptyDataset);
    };

    let sum: i64 = temperatures.iter().map(|&t| i64::from(t)).sum();
    let average = sum as f64 / temperatures.len() as f64;

    Ok(TemperatureStats {
        average,
        max,
        min,
        range: i64::from(max) - i64::from(min),
    })
}

/// Bar chart payload of current temperature per city
pub fn temperature_chart(dataset: &WeatherDataset) -> BarChart {
    BarChart {
        title: CHART_TITLE.to_string(),
        x_label: CHART_X_LABEL.to_string(),
        y_label: CHART_Y_LABEL.to_string(),
        labels: dataset.keys().cloned().collect(),
        values: dataset
            .values()
            .map(|snapshot| f64::from(snapshot.current.temperature))
            .collect(),
    }
}
