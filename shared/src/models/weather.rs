//! Weather data models

use serde::{Deserialize, Serialize};

/// Number of hourly readings shown on the forecast chart
pub const CHART_HOURS: usize = 24;

/// Hourly forecast readings for one location
///
/// Index 0 is the nearest forecast hour. `hourly_time` holds the local
/// ISO-8601 timestamps (`2024-03-01T14:00`) and is only used for charting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub hourly_time: Vec<String>,
    /// Degrees Celsius
    #[serde(default)]
    pub hourly_temperature: Vec<f64>,
    /// Millimetres
    #[serde(default)]
    pub hourly_precipitation: Vec<f64>,
}

/// Readings for the current hour with missing values already defaulted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CurrentConditions {
    pub temperature_celsius: f64,
    pub precipitation_mm: f64,
}

/// First hours of a forecast, shaped for a dual-axis line chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChartSeries {
    /// `HH:MM`
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
}

impl WeatherSnapshot {
    pub fn new(hourly_temperature: Vec<f64>, hourly_precipitation: Vec<f64>) -> Self {
        Self {
            hourly_time: Vec::new(),
            hourly_temperature,
            hourly_precipitation,
        }
    }

    /// Readings at index 0, zero when absent
    pub fn current(&self) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: self.hourly_temperature.first().copied().unwrap_or(0.0),
            precipitation_mm: self.hourly_precipitation.first().copied().unwrap_or(0.0),
        }
    }

    pub fn chart_series(&self, hours: usize) -> ChartSeries {
        ChartSeries {
            labels: self
                .hourly_time
                .iter()
                .take(hours)
                .map(|time| time.get(11..16).unwrap_or(time.as_str()).to_string())
                .collect(),
            temperature: self.hourly_temperature.iter().take(hours).copied().collect(),
            precipitation: self.hourly_precipitation.iter().take(hours).copied().collect(),
        }
    }
}

impl CurrentConditions {
    /// Applies the zero defaults for a missing snapshot
    pub fn from_snapshot(weather: Option<&WeatherSnapshot>) -> Self {
        weather.map(WeatherSnapshot::current).unwrap_or_default()
    }
}
