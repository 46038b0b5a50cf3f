//! Farm state service: load, save and reset the persisted wizard state

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Crop, FarmState, FieldPolygon, GpsCoordinates};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Farm state service backed by PostgreSQL
#[derive(Clone)]
pub struct FarmStateService {
    db: PgPool,
}

/// Farm state record
#[derive(Debug, Clone, FromRow)]
struct FarmStateRow {
    crop: String,
    planting_date: Option<NaiveDate>,
    polygon: Option<serde_json::Value>,
    already_planted: Option<bool>,
    updated_at: DateTime<Utc>,
}

/// Farm state as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct StoredFarmState {
    pub id: Uuid,
    #[serde(flatten)]
    pub state: FarmState,
    /// `None` when nothing has been saved yet and defaults are returned
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for saving farm state
#[derive(Debug, Deserialize, Validate)]
pub struct SaveFarmStateInput {
    #[serde(default = "default_crop")]
    #[validate(length(min = 1, max = 64))]
    pub crop: String,
    pub planting_date: Option<NaiveDate>,
    #[validate(length(min = 3))]
    pub polygon: Option<Vec<GpsCoordinates>>,
    pub already_planted: Option<bool>,
}

fn default_crop() -> String {
    Crop::default().name().to_string()
}

impl SaveFarmStateInput {
    fn into_state(self) -> FarmState {
        FarmState {
            crop: self.crop,
            planting_date: self.planting_date,
            polygon: self.polygon.map(FieldPolygon::new),
            already_planted: self.already_planted,
        }
    }
}

impl FarmStateRow {
    fn into_stored(self, id: Uuid) -> AppResult<StoredFarmState> {
        let polygon = self
            .polygon
            .map(serde_json::from_value::<FieldPolygon>)
            .transpose()
            .map_err(|e| AppError::Internal(format!("Corrupt stored polygon: {}", e)))?;

        Ok(StoredFarmState {
            id,
            state: FarmState {
                crop: self.crop,
                planting_date: self.planting_date,
                polygon,
                already_planted: self.already_planted,
            },
            updated_at: Some(self.updated_at),
        })
    }
}

impl FarmStateService {
    /// Create a new FarmStateService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Load the saved state, or defaults when nothing was saved
    pub async fn load(&self, id: Uuid) -> AppResult<StoredFarmState> {
        let row = sqlx::query_as::<_, FarmStateRow>(
            r#"
            SELECT crop, planting_date, polygon, already_planted, updated_at
            FROM farm_states
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => row.into_stored(id),
            None => Ok(StoredFarmState {
                id,
                state: FarmState::default(),
                updated_at: None,
            }),
        }
    }

    /// Save the full state, replacing whatever was stored
    pub async fn save(&self, id: Uuid, input: SaveFarmStateInput) -> AppResult<StoredFarmState> {
        input.validate()?;

        let state = input.into_state();
        if let Some(polygon) = &state.polygon {
            shared::validate_field_polygon(polygon)
                .map_err(|msg| AppError::validation("polygon", msg, "El polígono del terreno no es válido"))?;
        }

        let polygon_json = state
            .polygon
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, FarmStateRow>(
            r#"
            INSERT INTO farm_states (id, crop, planting_date, polygon, already_planted)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                crop = EXCLUDED.crop,
                planting_date = EXCLUDED.planting_date,
                polygon = EXCLUDED.polygon,
                already_planted = EXCLUDED.already_planted,
                updated_at = NOW()
            RETURNING crop, planting_date, polygon, already_planted, updated_at
            "#,
        )
        .bind(id)
        .bind(&state.crop)
        .bind(state.planting_date)
        .bind(&polygon_json)
        .bind(state.already_planted)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(%id, crop = %state.crop, "Saved farm state");

        row.into_stored(id)
    }

    /// Delete the saved state so the next load starts over
    pub async fn reset(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM farm_states WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Farm state".to_string()));
        }

        tracing::info!(%id, "Reset farm state");
        Ok(())
    }
}
