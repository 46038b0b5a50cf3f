//! Combines phase resolution and progress for one evaluation
//!
//! This is the caller side of the engine: it gates on the planting date,
//! then runs the resolver with the weather overlay and the progress
//! calculator independently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CurrentConditions, ProgressMetrics, ResolvedPhase, WeatherSnapshot};
use crate::validation::is_future_planting_date;

use super::{evaluate, progress};

/// Everything shown for a planted crop on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    pub crop: String,
    pub planting_date: NaiveDate,
    pub elapsed_days: i64,
    /// The planting date lies after `today`; phase and progress are withheld
    pub planting_date_invalid: bool,
    pub phase: Option<ResolvedPhase>,
    pub is_overdue: bool,
    pub progress: Option<ProgressMetrics>,
    pub current_conditions: Option<CurrentConditions>,
}

/// Whole days from planting to `today`; negative for future dates
pub fn elapsed_days(planting_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - planting_date).num_days()
}

pub fn build_advisory(
    crop_id: &str,
    planting_date: NaiveDate,
    today: NaiveDate,
    weather: Option<&WeatherSnapshot>,
) -> Advisory {
    let days = elapsed_days(planting_date, today);
    let current_conditions = weather.map(WeatherSnapshot::current);

    if is_future_planting_date(planting_date, today) {
        return Advisory {
            crop: crop_id.to_string(),
            planting_date,
            elapsed_days: days,
            planting_date_invalid: true,
            phase: None,
            is_overdue: false,
            progress: None,
            current_conditions,
        };
    }

    let resolution = evaluate(crop_id, days, weather);

    Advisory {
        crop: crop_id.to_string(),
        planting_date,
        elapsed_days: days,
        planting_date_invalid: false,
        phase: Some(resolution.phase),
        is_overdue: resolution.is_overdue,
        progress: Some(progress::compute(crop_id, days, planting_date)),
        current_conditions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_elapsed_days() {
        assert_eq!(elapsed_days(date(2024, 3, 1), date(2024, 3, 1)), 0);
        assert_eq!(elapsed_days(date(2024, 3, 1), date(2024, 4, 10)), 40);
        assert_eq!(elapsed_days(date(2024, 3, 10), date(2024, 3, 1)), -9);
    }

    #[test]
    fn test_future_planting_date_withholds_phase() {
        let advisory = build_advisory("Maíz", date(2024, 5, 1), date(2024, 4, 1), None);
        assert!(advisory.planting_date_invalid);
        assert!(advisory.phase.is_none());
        assert!(advisory.progress.is_none());
        assert_eq!(advisory.elapsed_days, -30);
    }

    #[test]
    fn test_advisory_for_planted_crop() {
        let weather = WeatherSnapshot::new(vec![24.0], vec![3.0]);
        let advisory = build_advisory("Papa", date(2024, 3, 1), date(2024, 4, 10), Some(&weather));
        let phase = advisory.phase.unwrap();
        assert_eq!(phase.phase_name, "Desarrollo vegetativo");
        assert_eq!(phase.recommendations.len(), 3);
        assert_eq!(advisory.progress.unwrap().percent_complete, 20);
        assert_eq!(advisory.current_conditions.unwrap().precipitation_mm, 3.0);
    }

    #[test]
    fn test_advisory_planted_today() {
        let advisory = build_advisory("Trigo", date(2024, 3, 1), date(2024, 3, 1), None);
        assert!(!advisory.planting_date_invalid);
        assert_eq!(advisory.phase.unwrap().phase_name, "Emergencia");
    }
}
