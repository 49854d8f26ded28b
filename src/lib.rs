//! Mock weather generator with temperature analysis, threshold alerts and
//! JSON export.

pub mod alerts;
pub mod analyzer;
pub mod chart;
pub mod constants;
pub mod error;
pub mod exporter;
pub mod formatters;
pub mod generator;
pub mod models;
pub mod service;

pub use service::{RunReport, WeatherProcessor};
