use std::fmt;

use crate::constants::{
    FREEZE_THRESHOLD, HEAT_THRESHOLD, HIGH_WIND_THRESHOLD, STORM_WIND_THRESHOLD,
};
use crate::models::{Condition, CurrentConditions, WeatherDataset};

/// Threshold warning raised for a city's current conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Heat { city: String, temperature: i32 },
    Freeze { city: String, temperature: i32 },
    HighWind { city: String, wind_speed: u32 },
    Storm { city: String },
}

impl Alert {
    /// City the alert was raised for
    pub fn city(&self) -> &str {
        match self {
            Alert::Heat { city, .. }
            | Alert::Freeze { city, .. }
            | Alert::HighWind { city, .. }
            | Alert::Storm { city } => city,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Heat { city, temperature } => {
                write!(f, "\u{1f525} Heat Warning in {}: {}\u{00b0}C", city, temperature)
            }
            Alert::Freeze { city, temperature } => {
                write!(f, "\u{2744}\u{fe0f} Freeze Warning in {}: {}\u{00b0}C", city, temperature)
            }
            Alert::HighWind { city, wind_speed } => {
                write!(f, "\u{1f4a8} High Wind Alert in {}: {} km/h", city, wind_speed)
            }
            Alert::Storm { city } => write!(f, "\u{26c8}\u{fe0f} Storm Warning in {}", city),
        }
    }
}

/// Alerts for one city, temperature first, then wind, then storm
pub fn city_alerts(city: &str, current: &CurrentConditions) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if current.temperature > HEAT_THRESHOLD {
        alerts.push(Alert::Heat {
            city: city.to_string(),
            temperature: current.temperature,
        });
    } else if current.temperature < FREEZE_THRESHOLD {
        alerts.push(Alert::Freeze {
            city: city.to_string(),
            temperature: current.temperature,
        });
    }

    if current.wind_speed > HIGH_WIND_THRESHOLD {
        alerts.push(Alert::HighWind {
            city: city.to_string(),
            wind_speed: current.wind_speed,
        });
    }

    if current.condition == Condition::Rainy && current.wind_speed > STORM_WIND_THRESHOLD {
        alerts.push(Alert::Storm {
            city: city.to_string(),
        });
    }

    alerts
}

/// Scans every snapshot in dataset order
pub fn process_alerts(dataset: &WeatherDataset) -> Vec<Alert> {
    let alerts: Vec<Alert> = dataset
        .iter()
        .flat_map(|(city, snapshot)| city_alerts(city, &snapshot.current))
        .collect();
    tracing::debug!("{} alert(s) raised across {} cities", alerts.len(), dataset.len());
    alerts
}
