//! Weather API client for fetching hourly forecasts
//!
//! Integrates with the Open-Meteo forecast API. Only hourly temperature and
//! precipitation are requested; the phase engine reads the first hour and
//! the chart shows the first day.

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::WeatherSnapshot;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    timezone: String,
    forecast_days: u32,
}

/// Open-Meteo API response for an hourly forecast
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: Option<OpenMeteoHourly>,
}

/// Hourly series; individual readings may be null
#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            timezone: config.timezone.clone(),
            forecast_days: config.forecast_days,
        })
    }

    /// Fetch the hourly forecast for a point
    pub async fn get_hourly_forecast(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/forecast", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", "temperature_2m,precipitation".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))?;

        let snapshot = convert_forecast_response(data);
        tracing::debug!(
            hours = snapshot.hourly_temperature.len(),
            %latitude,
            %longitude,
            "Fetched hourly forecast"
        );

        Ok(snapshot)
    }
}

/// Convert an Open-Meteo response to our format
///
/// Null readings become 0, matching how the engine treats missing data.
fn convert_forecast_response(data: OpenMeteoResponse) -> WeatherSnapshot {
    let Some(hourly) = data.hourly else {
        return WeatherSnapshot::default();
    };

    WeatherSnapshot {
        hourly_time: hourly.time,
        hourly_temperature: hourly
            .temperature_2m
            .into_iter()
            .map(|t| t.unwrap_or(0.0))
            .collect(),
        hourly_precipitation: hourly
            .precipitation
            .into_iter()
            .map(|p| p.unwrap_or(0.0))
            .collect(),
    }
}
