//! HTTP handlers for persisted farm state

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::farm_state::{FarmStateService, SaveFarmStateInput, StoredFarmState};
use crate::AppState;

/// Load saved state; unsaved ids return the defaults
pub async fn get_farm_state(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> AppResult<Json<StoredFarmState>> {
    let service = FarmStateService::new(state.db);
    let stored = service.load(state_id).await?;
    Ok(Json(stored))
}

/// Replace saved state
pub async fn save_farm_state(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
    Json(input): Json<SaveFarmStateInput>,
) -> AppResult<Json<StoredFarmState>> {
    let service = FarmStateService::new(state.db);
    let stored = service.save(state_id, input).await?;
    Ok(Json(stored))
}

/// Forget saved state
pub async fn reset_farm_state(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = FarmStateService::new(state.db);
    service.reset(state_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
