//! Route definitions for the Agro-Info API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/crops", crop_routes())
        .nest("/advisory", advisory_routes())
        .nest("/weather", weather_routes())
        .route("/geocode/reverse", get(handlers::reverse_geocode))
        .nest("/state", farm_state_routes())
}

/// Crop catalogue routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop", get(handlers::get_crop))
        .route("/:crop/pre-planting", get(handlers::get_pre_planting_advice))
}

/// Phase advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_advisory))
        .route("/field", post(handlers::create_field_advisory))
}

/// Weather forecast routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_forecast))
        .route("/chart", get(handlers::get_forecast_chart))
}

/// Farm state routes
fn farm_state_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/:state_id",
            get(handlers::get_farm_state)
                .put(handlers::save_farm_state)
                .delete(handlers::reset_farm_state),
        )
        .route("/:state_id/advisory", get(handlers::get_state_advisory))
}
