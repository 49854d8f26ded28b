//! Mock weather synthesis from static city tables and a caller-supplied RNG.
//!
//! Every sampling function takes the random source as a parameter, so tests
//! can drive it with a seeded generator while the binary feeds it entropy.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::constants::{
    BALANCED_WEIGHTS, BASE_TEMPERATURES, COUNTRIES, DEFAULT_BASE_TEMPERATURE, DEFAULT_COUNTRY,
    FORECAST_DAYS, FORECAST_DAY_LABELS, MODERATE_CITIES, MODERATE_WEIGHTS, RAINY_CITIES,
    RAINY_WEIGHTS, SUNNY_CITIES, SUNNY_WEIGHTS,
};
use crate::models::{Condition, CurrentConditions, ForecastDay, WeatherDataset, WeatherSnapshot};

/// Reference temperature for a city, or 20°C for cities not in the table
pub fn base_temperature(city: &str) -> i32 {
    BASE_TEMPERATURES
        .iter()
        .find(|(name, _)| *name == city)
        .map_or(DEFAULT_BASE_TEMPERATURE, |(_, temp)| *temp)
}

/// Country of a city, or "Unknown" for cities not in the table
pub fn country(city: &str) -> &'static str {
    COUNTRIES
        .iter()
        .find(|(name, _)| *name == city)
        .map_or(DEFAULT_COUNTRY, |(_, country)| *country)
}

/// Probability of each entry of [`Condition::ALL`] for a city.
///
/// Cities outside the curated groups get a balanced distribution.
pub fn condition_weights(city: &str) -> [f64; 5] {
    if SUNNY_CITIES.contains(&city) {
        SUNNY_WEIGHTS
    } else if RAINY_CITIES.contains(&city) {
        RAINY_WEIGHTS
    } else if MODERATE_CITIES.contains(&city) {
        MODERATE_WEIGHTS
    } else {
        BALANCED_WEIGHTS
    }
}

fn sample_condition<R: Rng + ?Sized>(weights: &[f64; 5], rng: &mut R) -> Condition {
    match WeightedIndex::new(weights) {
        Ok(dist) => Condition::ALL[dist.sample(rng)],
        Err(err) => {
            tracing::warn!("Invalid condition weights {:?}: {}", weights, err);
            Condition::Sunny
        }
    }
}

/// Draws the current conditions for a city
pub fn current_conditions<R: Rng + ?Sized>(city: &str, rng: &mut R) -> CurrentConditions {
    let temperature = base_temperature(city) + rng.gen_range(-5..=5);
    let condition = sample_condition(&condition_weights(city), rng);

    CurrentConditions {
        location: format!("{}, {}", city, country(city)),
        temperature,
        condition,
        humidity: rng.gen_range(40..=89),
        wind_speed: rng.gen_range(5..=24),
        visibility: rng.gen_range(5..=19),
        pressure: rng.gen_range(995..=1024),
        uv_index: rng.gen_range(1..=10),
        icon: condition.icon().to_string(),
    }
}

/// Draws the five-day outlook around `base_temp`.
///
/// Each day is sampled independently of `_current`. High and low come from
/// separate draws, so a day's low may exceed its high.
pub fn forecast<R: Rng + ?Sized>(
    base_temp: i32,
    _current: Condition,
    rng: &mut R,
) -> [ForecastDay; FORECAST_DAYS] {
    std::array::from_fn(|i| {
        let variation = rng.gen_range(-3..=3);
        let high = base_temp + variation + rng.gen_range(2..=5);
        let low = base_temp + variation - rng.gen_range(2..=5);
        let condition = Condition::FORECAST[rng.gen_range(0..Condition::FORECAST.len())];

        ForecastDay {
            day: FORECAST_DAY_LABELS[i].to_string(),
            high,
            low,
            condition,
            icon: condition.icon().to_string(),
        }
    })
}

/// Builds a fresh snapshot for one city
pub fn snapshot<R: Rng + ?Sized>(city: &str, rng: &mut R) -> WeatherSnapshot {
    let current = current_conditions(city, rng);
    let forecast = forecast(base_temperature(city), current.condition, rng);
    WeatherSnapshot { current, forecast }
}

/// Generates one snapshot per city, keyed and ordered by the given list
pub fn generate_dataset<R: Rng + ?Sized>(cities: &[&str], rng: &mut R) -> WeatherDataset {
    let mut dataset = WeatherDataset::with_capacity(cities.len());
    for city in cities {
        tracing::debug!("Generating mock weather for {}", city);
        dataset.insert(city.to_string(), snapshot(city, rng));
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CITIES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lookups_cover_every_configured_city() {
        assert_eq!(base_temperature("London"), 15);
        assert_eq!(base_temperature("Singapore"), 30);
        assert_eq!(country("Tokyo"), "Japan");
        assert_eq!(country("Mumbai"), "India");
        for city in CITIES {
            assert_ne!(country(city), DEFAULT_COUNTRY, "{city} missing a country");
        }
    }

    #[test]
    fn lookups_fall_back_for_unknown_city() {
        assert_eq!(base_temperature("Atlantis"), 20);
        assert_eq!(country("Atlantis"), "Unknown");
        assert_eq!(condition_weights("Atlantis"), [0.3, 0.3, 0.2, 0.2, 0.0]);
    }

    #[test]
    fn weights_follow_city_groups() {
        assert_eq!(condition_weights("Los Angeles"), SUNNY_WEIGHTS);
        assert_eq!(condition_weights("Chennai"), RAINY_WEIGHTS);
        assert_eq!(condition_weights("Bangalore"), MODERATE_WEIGHTS);
        assert_eq!(condition_weights("Paris"), BALANCED_WEIGHTS);
    }

    #[test]
    fn weights_sum_to_one() {
        for city in CITIES.iter().chain(["Atlantis"].iter()) {
            let total: f64 = condition_weights(city).iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "{city} weights sum to {total}");
        }
    }

    #[test]
    fn current_conditions_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for city in CITIES {
                let current = current_conditions(city, &mut rng);
                let base = base_temperature(city);
                assert!((base - 5..=base + 5).contains(&current.temperature));
                assert!((40..=89).contains(&current.humidity));
                assert!((5..=24).contains(&current.wind_speed));
                assert!((5..=19).contains(&current.visibility));
                assert!((995..=1024).contains(&current.pressure));
                assert!((1..=10).contains(&current.uv_index));
                assert_eq!(current.icon, current.condition.icon());
                assert_eq!(current.location, format!("{}, {}", city, country(city)));
            }
        }
    }

    #[test]
    fn zero_weight_conditions_never_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let condition = current_conditions("Singapore", &mut rng).condition;
            assert!(matches!(
                condition,
                Condition::Sunny | Condition::PartlyCloudy | Condition::Cloudy
            ));
        }
    }

    #[test]
    fn forecast_has_five_ordered_days() {
        let mut rng = StdRng::seed_from_u64(3);
        let days = forecast(20, Condition::Sunny, &mut rng);
        let labels: Vec<_> = days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(labels, ["Today", "Tomorrow", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn forecast_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            for day in forecast(10, Condition::Rainy, &mut rng) {
                assert!((9..=18).contains(&day.high), "high {}", day.high);
                assert!((2..=11).contains(&day.low), "low {}", day.low);
                assert_ne!(day.condition, Condition::Snowy);
                assert_eq!(day.icon, day.condition.icon());
            }
        }
    }

    #[test]
    fn dataset_preserves_city_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = generate_dataset(&CITIES, &mut rng);
        let keys: Vec<_> = dataset.keys().map(String::as_str).collect();
        assert_eq!(keys, CITIES);
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = generate_dataset(&CITIES, &mut StdRng::seed_from_u64(42));
        let b = generate_dataset(&CITIES, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
