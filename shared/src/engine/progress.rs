//! Cycle progress metrics

use chrono::{Days, NaiveDate};

use crate::models::ProgressMetrics;

use super::phase_table;

/// Percentage of the cycle elapsed, rounded and clamped to 0..=100
pub fn percent_complete(elapsed_days: i64, total_cycle_days: i64) -> i64 {
    let total = total_cycle_days.max(1) as f64;
    let percent = (100.0 * elapsed_days as f64 / total).round() as i64;
    percent.clamp(0, 100)
}

pub fn days_remaining(elapsed_days: i64, total_cycle_days: i64) -> i64 {
    (total_cycle_days - elapsed_days).max(0)
}

/// Planting date plus the full cycle length
pub fn estimated_completion_date(planting_date: NaiveDate, total_cycle_days: i64) -> NaiveDate {
    let days = Days::new(total_cycle_days.max(0) as u64);
    planting_date
        .checked_add_days(days)
        .unwrap_or(NaiveDate::MAX)
}

/// Progress metrics for a crop identifier
///
/// Unknown crops use [`phase_table::FALLBACK_CYCLE_DAYS`].
pub fn compute(crop_id: &str, elapsed_days: i64, planting_date: NaiveDate) -> ProgressMetrics {
    let total = phase_table::total_cycle_days(crop_id);

    ProgressMetrics {
        percent_complete: percent_complete(elapsed_days, total),
        days_remaining: days_remaining(elapsed_days, total),
        estimated_completion_date: estimated_completion_date(planting_date, total),
    }
}
