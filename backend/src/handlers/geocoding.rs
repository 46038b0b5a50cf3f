//! HTTP handlers for reverse geocoding

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::LocationQuery;
use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PlaceNameResponse {
    /// `None` when the point has no named place
    pub place_name: Option<String>,
    /// Fallback label built from the coordinates
    pub coordinates: String,
}

/// Short place name for a point
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<PlaceNameResponse>> {
    let point = query.coordinates()?;
    let place_name = state
        .geocoding_client
        .reverse(point.latitude, point.longitude)
        .await?;

    Ok(Json(PlaceNameResponse {
        place_name,
        coordinates: point.to_string(),
    }))
}
