//! HTTP handlers for phase advisory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{Advisory, FieldPolygon, GpsCoordinates, WeatherSnapshot};
use uuid::Uuid;
use validator::Validate;

use super::today_or_local;
use crate::error::AppResult;
use crate::services::advisory::{AdvisoryService, FieldAdvisory, StateAdvisory};
use crate::services::FarmStateService;
use crate::AppState;

/// Request body for an advisory with caller-supplied weather
#[derive(Debug, Deserialize, Validate)]
pub struct AdvisoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub crop: String,
    pub planting_date: NaiveDate,
    /// Defaults to the server's local date
    pub today: Option<NaiveDate>,
    pub weather: Option<WeatherSnapshot>,
}

/// Request body for an advisory on a drawn field
#[derive(Debug, Deserialize, Validate)]
pub struct FieldAdvisoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub crop: String,
    pub planting_date: NaiveDate,
    #[validate(length(min = 3))]
    pub polygon: Vec<GpsCoordinates>,
    pub today: Option<NaiveDate>,
}

fn advisory_service(state: &AppState) -> AdvisoryService {
    AdvisoryService::new(state.weather_client.clone(), state.geocoding_client.clone())
}

/// Evaluate phase, recommendations and progress
pub async fn create_advisory(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryRequest>,
) -> AppResult<Json<Advisory>> {
    input.validate()?;

    let service = advisory_service(&state);
    let advisory = service.advisory(
        &input.crop,
        input.planting_date,
        today_or_local(input.today),
        input.weather.as_ref(),
    );
    Ok(Json(advisory))
}

/// Evaluate a drawn field using the forecast at its centroid
pub async fn create_field_advisory(
    State(state): State<AppState>,
    Json(input): Json<FieldAdvisoryRequest>,
) -> AppResult<Json<FieldAdvisory>> {
    input.validate()?;

    let service = advisory_service(&state);
    let polygon = FieldPolygon::new(input.polygon);
    let advisory = service
        .field_advisory(
            &input.crop,
            input.planting_date,
            &polygon,
            today_or_local(input.today),
        )
        .await?;
    Ok(Json(advisory))
}

/// Evaluate whatever the saved state calls for next
pub async fn get_state_advisory(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> AppResult<Json<StateAdvisory>> {
    let stored = FarmStateService::new(state.db.clone()).load(state_id).await?;

    let service = advisory_service(&state);
    let advisory = service
        .for_state(&stored.state, today_or_local(None))
        .await?;
    Ok(Json(advisory))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_request_optional_fields() {
        let input: AdvisoryRequest =
            serde_json::from_str(r#"{"crop": "Maíz", "planting_date": "2024-03-01"}"#).unwrap();
        assert!(input.today.is_none());
        assert!(input.weather.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_advisory_request_rejects_empty_crop() {
        let input: AdvisoryRequest =
            serde_json::from_str(r#"{"crop": "", "planting_date": "2024-03-01"}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_field_request_needs_three_vertices() {
        let input: FieldAdvisoryRequest = serde_json::from_str(
            r#"{
                "crop": "Papa",
                "planting_date": "2024-03-01",
                "polygon": [
                    {"latitude": "14.60", "longitude": "-90.50"},
                    {"latitude": "14.61", "longitude": "-90.50"}
                ]
            }"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }
}
