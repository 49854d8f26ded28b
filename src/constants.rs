/// Cities processed on every run, in report order
pub const CITIES: [&str; 10] = [
    "New York",
    "London",
    "Tokyo",
    "Paris",
    "Bangalore",
    "Delhi",
    "Chennai",
    "Mumbai",
    "Los Angeles",
    "Singapore",
];

/// Reference temperature (°C) per city
pub const BASE_TEMPERATURES: [(&str, i32); 10] = [
    ("New York", 20),
    ("London", 15),
    ("Tokyo", 25),
    ("Paris", 18),
    ("Bangalore", 24),
    ("Delhi", 28),
    ("Chennai", 30),
    ("Mumbai", 28),
    ("Los Angeles", 24),
    ("Singapore", 30),
];

/// Country per city
pub const COUNTRIES: [(&str, &str); 10] = [
    ("New York", "USA"),
    ("London", "UK"),
    ("Tokyo", "Japan"),
    ("Paris", "France"),
    ("Bangalore", "India"),
    ("Delhi", "India"),
    ("Chennai", "India"),
    ("Mumbai", "India"),
    ("Los Angeles", "USA"),
    ("Singapore", "Singapore"),
];

pub const DEFAULT_BASE_TEMPERATURE: i32 = 20;
pub const DEFAULT_COUNTRY: &str = "Unknown";

// ============================================================================
// Condition weights, ordered Sunny, Partly Cloudy, Cloudy, Rainy, Snowy
// ============================================================================

pub const SUNNY_CITIES: [&str; 2] = ["Los Angeles", "Singapore"];
pub const RAINY_CITIES: [&str; 3] = ["London", "Mumbai", "Chennai"];
pub const MODERATE_CITIES: [&str; 2] = ["Delhi", "Bangalore"];

pub const SUNNY_WEIGHTS: [f64; 5] = [0.6, 0.3, 0.1, 0.0, 0.0];
pub const RAINY_WEIGHTS: [f64; 5] = [0.2, 0.2, 0.3, 0.3, 0.0];
pub const MODERATE_WEIGHTS: [f64; 5] = [0.4, 0.3, 0.2, 0.1, 0.0];
pub const BALANCED_WEIGHTS: [f64; 5] = [0.3, 0.3, 0.2, 0.2, 0.0];

// ============================================================================
// Forecast
// ============================================================================

pub const FORECAST_DAYS: usize = 5;

/// Day labels of the outlook, in order
pub const FORECAST_DAY_LABELS: [&str; FORECAST_DAYS] =
    ["Today", "Tomorrow", "Wednesday", "Thursday", "Friday"];

// ============================================================================
// Alert thresholds
// ============================================================================

/// Heat warning above this temperature (°C)
pub const HEAT_THRESHOLD: i32 = 35;
/// Freeze warning below this temperature (°C)
pub const FREEZE_THRESHOLD: i32 = 0;
/// High wind alert above this speed (km/h)
pub const HIGH_WIND_THRESHOLD: u32 = 20;
/// Storm warning when raining and wind exceeds this speed (km/h)
pub const STORM_WIND_THRESHOLD: u32 = 15;

// ============================================================================
// Output
// ============================================================================

pub const DEFAULT_EXPORT_PATH: &str = "weather_data.json";
pub const DEFAULT_CHART_PATH: &str = "temperature_analysis.png";

pub const CHART_TITLE: &str = "Current Temperature Across Cities";
pub const CHART_X_LABEL: &str = "Cities";
pub const CHART_Y_LABEL: &str = "Temperature (\u{00b0}C)";
