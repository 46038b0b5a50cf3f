//! Phenological phase models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named interval of a crop cycle, in days since planting
///
/// Both ends of the range are inclusive.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PhaseDefinition {
    pub min_day: i64,
    pub max_day: i64,
    pub name: &'static str,
    pub recommendations: &'static [&'static str],
    pub is_harvest: bool,
}

impl PhaseDefinition {
    pub fn contains(&self, elapsed_days: i64) -> bool {
        self.min_day <= elapsed_days && elapsed_days <= self.max_day
    }
}

/// The phase a crop is in, with the recommendations to show for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedPhase {
    pub phase_name: String,
    pub is_harvest: bool,
    /// Insertion-ordered, without duplicates
    pub recommendations: Vec<String>,
}

impl From<&PhaseDefinition> for ResolvedPhase {
    fn from(definition: &PhaseDefinition) -> Self {
        Self {
            phase_name: definition.name.to_string(),
            is_harvest: definition.is_harvest,
            recommendations: definition
                .recommendations
                .iter()
                .map(|rec| rec.to_string())
                .collect(),
        }
    }
}

/// Result of resolving a crop and elapsed day count to a phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseResolution {
    pub phase: ResolvedPhase,
    /// Elapsed days lie beyond every configured phase
    pub is_overdue: bool,
    /// The crop has a phase table
    pub is_known_crop: bool,
}

/// Cycle progress derived from elapsed days and the crop's cycle length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressMetrics {
    /// 0 to 100
    pub percent_complete: i64,
    pub days_remaining: i64,
    pub estimated_completion_date: NaiveDate,
}
