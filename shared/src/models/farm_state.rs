//! Persisted wizard state for one farm
//!
//! The engine never reads or writes this; the backend stores it and the
//! front end restores it on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Crop, FieldPolygon};

/// Snapshot of the farmer's selections
///
/// Missing fields fall back to their defaults when deserializing, so older
/// or partial snapshots still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FarmState {
    /// Crop identifier; kept as text so an unrecognized crop round-trips
    pub crop: String,
    pub planting_date: Option<NaiveDate>,
    pub polygon: Option<FieldPolygon>,
    /// `None` until the farmer answers whether the crop is already planted
    pub already_planted: Option<bool>,
}

impl Default for FarmState {
    fn default() -> Self {
        Self {
            crop: Crop::default().name().to_string(),
            planting_date: None,
            polygon: None,
            already_planted: None,
        }
    }
}

impl FarmState {
    /// Whether there is enough to evaluate the phase engine
    pub fn is_ready_for_advisory(&self) -> bool {
        self.already_planted == Some(true) && self.planting_date.is_some()
    }
}
