use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::FORECAST_DAYS;

// ============================================================================
// Conditions
// ============================================================================

/// Weather state shown for current conditions and forecast days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
}

impl Condition {
    /// All conditions, in the order used by the weight tables
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Snowy,
    ];

    /// Conditions a forecast day may take; snow only appears in current conditions
    pub const FORECAST: [Condition; 4] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
    ];

    /// Display label, also used as the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
        }
    }

    /// Icon identifier for this condition
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::PartlyCloudy => "partly-cloudy",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Condition label that matches none of the known conditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weather condition: {0:?}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.label() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// Icon identifier for a condition label read from outside the crate.
///
/// Unrecognized labels map to `"sunny"`.
pub fn icon_for_label(label: &str) -> &'static str {
    label
        .parse::<Condition>()
        .map(Condition::icon)
        .unwrap_or_else(|_| Condition::Sunny.icon())
}

// ============================================================================
// Snapshot Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// "City, Country"
    pub location: String,
    /// Temperature in Celsius
    pub temperature: i32,
    pub condition: Condition,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed: u32,
    /// Visibility in kilometers
    pub visibility: u32,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    pub uv_index: u8,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
    pub icon: String,
}

/// One city's current conditions and its five-day outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: [ForecastDay; FORECAST_DAYS],
}

/// Snapshots keyed by city name, in generation order
pub type WeatherDataset = IndexMap<String, WeatherSnapshot>;

// ============================================================================
// Analysis Models
// ============================================================================

/// Summary of current temperatures across all cities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub average: f64,
    pub max: i32,
    pub min: i32,
    /// `max - min`, widened so extreme readings cannot overflow
    pub range: i64,
}
