//! HTTP handlers for crop catalogue endpoints

use axum::{extract::Path, Json};
use serde::Serialize;
use shared::{Crop, PhaseDefinition};

use crate::error::AppResult;
use crate::services::advisory::PrePlantingAdvice;

/// A crop with its full phase table
#[derive(Debug, Serialize)]
pub struct CropSummary {
    pub name: &'static str,
    pub slug: &'static str,
    pub total_cycle_days: i64,
    pub phases: &'static [PhaseDefinition],
}

impl From<Crop> for CropSummary {
    fn from(crop: Crop) -> Self {
        Self {
            name: crop.name(),
            slug: crop.slug(),
            total_cycle_days: crop.total_cycle_days(),
            phases: crop.phases(),
        }
    }
}

/// List every supported crop
pub async fn list_crops() -> Json<Vec<CropSummary>> {
    Json(Crop::ALL.into_iter().map(CropSummary::from).collect())
}

/// Get one crop by display name or slug
pub async fn get_crop(Path(crop): Path<String>) -> AppResult<Json<CropSummary>> {
    let crop: Crop = crop.parse()?;
    Ok(Json(crop.into()))
}

/// Pre-planting checklist; unknown crops get the generic checklist
pub async fn get_pre_planting_advice(Path(crop): Path<String>) -> Json<PrePlantingAdvice> {
    Json(PrePlantingAdvice::for_crop(&crop))
}
