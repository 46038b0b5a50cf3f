//! HTTP handlers for weather forecast endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{ChartSeries, WeatherSnapshot, CHART_HOURS};

use super::LocationQuery;
use crate::error::AppResult;
use crate::AppState;

/// Hourly forecast for a point
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let point = query.coordinates()?;
    let snapshot = state
        .weather_client
        .get_hourly_forecast(point.latitude, point.longitude)
        .await?;
    Ok(Json(snapshot))
}

/// First hours of the forecast, shaped for the chart
pub async fn get_forecast_chart(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ChartSeries>> {
    let point = query.coordinates()?;
    let snapshot = state
        .weather_client
        .get_hourly_forecast(point.latitude, point.longitude)
        .await?;
    Ok(Json(snapshot.chart_series(CHART_HOURS)))
}
