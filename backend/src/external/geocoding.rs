//! Reverse geocoding client (Nominatim)

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::GeocodingConfig;
use crate::error::{AppError, AppResult};

/// Number of leading `display_name` components kept in a short place name
const PLACE_NAME_PARTS: usize = 3;

/// Nominatim reverse geocoding client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    language: String,
    zoom: u8,
}

/// Nominatim `/reverse` response (jsonv2)
#[derive(Debug, Deserialize)]
struct NominatimReverseResponse {
    display_name: Option<String>,
}

impl GeocodingClient {
    /// Create a new GeocodingClient from configuration
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Configuration(format!("Geocoding HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            zoom: config.zoom,
        })
    }

    /// Short place name for a point, `None` when Nominatim has no name
    pub async fn reverse(&self, latitude: Decimal, longitude: Decimal) -> AppResult<Option<String>> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", self.zoom.to_string()),
                ("accept-language", self.language.clone()),
            ])
            .send()
            .await
            .map_err(|e| AppError::GeocodingError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::GeocodingError(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let data: NominatimReverseResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeocodingError(format!("invalid response: {}", e)))?;

        Ok(data.display_name.as_deref().and_then(short_place_name))
    }

    /// Like [`reverse`](Self::reverse), but failures are logged and become `None`
    ///
    /// Callers show the raw coordinates instead.
    pub async fn reverse_or_none(&self, latitude: Decimal, longitude: Decimal) -> Option<String> {
        match self.reverse(latitude, longitude).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                None
            }
        }
    }
}

/// First three comma-separated parts of a Nominatim `display_name`
pub fn short_place_name(display_name: &str) -> Option<String> {
    let short = display_name
        .split(',')
        .take(PLACE_NAME_PARTS)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ");

    if short.is_empty() {
        None
    } else {
        Some(short)
    }
}
