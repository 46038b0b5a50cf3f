//! Advisory service: combines the phase engine with live weather and place names

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    build_advisory, Advisory, ChartSeries, Crop, FarmState, FieldPolygon, GpsCoordinates,
    WeatherSnapshot, CHART_HOURS,
};

use crate::error::{AppError, AppResult};
use crate::external::{GeocodingClient, WeatherClient};

/// Advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    weather_client: WeatherClient,
    geocoding_client: GeocodingClient,
}

/// Advisory for a drawn field, with the forecast that drove it
#[derive(Debug, Clone, Serialize)]
pub struct FieldAdvisory {
    pub advisory: Advisory,
    pub centroid: GpsCoordinates,
    /// `None` when reverse geocoding failed; show the centroid instead
    pub place_name: Option<String>,
    pub chart: ChartSeries,
}

/// Checklist for a crop that is not in the ground yet
#[derive(Debug, Clone, Serialize)]
pub struct PrePlantingAdvice {
    /// Display name for known crops, the identifier as given otherwise
    pub crop: String,
    pub recommendations: Vec<String>,
}

impl PrePlantingAdvice {
    pub fn for_crop(crop_id: &str) -> Self {
        let crop = crop_id
            .parse::<Crop>()
            .map(|c| c.name().to_string())
            .unwrap_or_else(|_| crop_id.to_string());

        Self {
            crop,
            recommendations: shared::advise(crop_id)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// What the farmer should see next for a saved state
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StateAdvisory {
    /// Still waiting on whether the crop is planted
    NotStarted,
    PrePlanting(PrePlantingAdvice),
    /// Planted, but no planting date yet
    AwaitingPlantingDate,
    Planted(Advisory),
    PlantedField(FieldAdvisory),
}

impl AdvisoryService {
    pub fn new(weather_client: WeatherClient, geocoding_client: GeocodingClient) -> Self {
        Self {
            weather_client,
            geocoding_client,
        }
    }

    /// Evaluate a crop with caller-supplied weather, or none at all
    pub fn advisory(
        &self,
        crop: &str,
        planting_date: NaiveDate,
        today: NaiveDate,
        weather: Option<&WeatherSnapshot>,
    ) -> Advisory {
        build_advisory(crop, planting_date, today, weather)
    }

    /// Evaluate a crop for a drawn field
    ///
    /// The forecast is fetched at the field centroid. A weather failure
    /// fails the request; a geocoding failure only drops the place name.
    pub async fn field_advisory(
        &self,
        crop: &str,
        planting_date: NaiveDate,
        polygon: &FieldPolygon,
        today: NaiveDate,
    ) -> AppResult<FieldAdvisory> {
        shared::validate_field_polygon(polygon).map_err(|msg| {
            AppError::validation("polygon", msg, "El terreno necesita al menos 3 puntos")
        })?;

        let centroid = polygon.centroid().ok_or_else(|| {
            AppError::validation(
                "polygon",
                "Field polygon has no centroid",
                "No se pudo calcular el centro del terreno",
            )
        })?;

        let (weather, place_name) = tokio::join!(
            self.weather_client
                .get_hourly_forecast(centroid.latitude, centroid.longitude),
            self.geocoding_client
                .reverse_or_none(centroid.latitude, centroid.longitude),
        );
        let weather = weather?;

        tracing::debug!(
            crop,
            %centroid,
            place = place_name.as_deref().unwrap_or("-"),
            "Evaluating field advisory"
        );

        Ok(FieldAdvisory {
            advisory: build_advisory(crop, planting_date, today, Some(&weather)),
            centroid,
            place_name,
            chart: weather.chart_series(CHART_HOURS),
        })
    }

    /// Decide what to show for a saved state
    pub async fn for_state(&self, state: &FarmState, today: NaiveDate) -> AppResult<StateAdvisory> {
        match (state.already_planted, state.planting_date) {
            (None, _) => Ok(StateAdvisory::NotStarted),
            (Some(false), _) => Ok(StateAdvisory::PrePlanting(PrePlantingAdvice::for_crop(
                &state.crop,
            ))),
            (Some(true), None) => Ok(StateAdvisory::AwaitingPlantingDate),
            (Some(true), Some(planting_date)) => match &state.polygon {
                Some(polygon) => self
                    .field_advisory(&state.crop, planting_date, polygon, today)
                    .await
                    .map(StateAdvisory::PlantedField),
                None => Ok(StateAdvisory::Planted(build_advisory(
                    &state.crop,
                    planting_date,
                    today,
                    None,
                ))),
            },
        }
    }
}
