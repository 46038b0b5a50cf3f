//! Validation utilities for Agro-Info
//!
//! Checks for the static phase tables, planting dates and field outlines.

use chrono::NaiveDate;

use crate::models::{Crop, FieldPolygon, PhaseDefinition};
use crate::types::GpsCoordinates;

// ============================================================================
// Phase Table Validations
// ============================================================================

/// Validate that a phase table starts at day 0, is contiguous and ascending,
/// and ends in a harvest phase
pub fn validate_phase_table(phases: &[PhaseDefinition]) -> Result<(), &'static str> {
    let (first, last) = match (phases.first(), phases.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("Phase table is empty"),
    };

    if first.min_day != 0 {
        return Err("First phase must start at day 0");
    }
    if phases.iter().any(|phase| phase.min_day > phase.max_day) {
        return Err("Phase range has min_day greater than max_day");
    }
    if phases
        .windows(2)
        .any(|pair| pair[0].max_day + 1 != pair[1].min_day)
    {
        return Err("Phase ranges must be contiguous and non-overlapping");
    }
    if !last.is_harvest {
        return Err("Last phase must be a harvest phase");
    }
    Ok(())
}

/// Validate every configured crop's phase table
pub fn validate_phase_tables() -> Result<(), (Crop, &'static str)> {
    for crop in Crop::ALL {
        validate_phase_table(crop.phases()).map_err(|err| (crop, err))?;
    }
    Ok(())
}

// ============================================================================
// Planting Date Validations
// ============================================================================

/// Check if the planting date is after `today`
pub fn is_future_planting_date(planting_date: NaiveDate, today: NaiveDate) -> bool {
    planting_date > today
}

/// Validate that the planting date is not in the future
pub fn validate_planting_date(planting_date: NaiveDate, today: NaiveDate) -> Result<(), &'static str> {
    if is_future_planting_date(planting_date, today) {
        return Err("Planting date cannot be after today");
    }
    Ok(())
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate coordinates are inside WGS84 ranges
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if !coordinates.is_valid() {
        return Err("Coordinates out of range");
    }
    Ok(())
}

/// Validate a field outline has enough vertices, all in range
pub fn validate_field_polygon(polygon: &FieldPolygon) -> Result<(), &'static str> {
    if !polygon.is_closed_shape() {
        return Err("Field polygon needs at least 3 vertices");
    }
    for vertex in &polygon.vertices {
        validate_coordinates(vertex)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn phase(min_day: i64, max_day: i64, is_harvest: bool) -> PhaseDefinition {
        PhaseDefinition {
            min_day,
            max_day,
            name: "Fase",
            recommendations: &[],
            is_harvest,
        }
    }

    // ========================================================================
    // Phase Table Tests
    // ========================================================================

    #[test]
    fn test_configured_tables_are_valid() {
        assert!(validate_phase_tables().is_ok());
    }

    #[test]
    fn test_phase_table_valid() {
        let table = [phase(0, 10, false), phase(11, 200, true)];
        assert!(validate_phase_table(&table).is_ok());
    }

    #[test]
    fn test_phase_table_empty() {
        assert!(validate_phase_table(&[]).is_err());
    }

    #[test]
    fn test_phase_table_gap() {
        let table = [phase(0, 10, false), phase(12, 200, true)];
        assert!(validate_phase_table(&table).is_err());
    }

    #[test]
    fn test_phase_table_overlap() {
        let table = [phase(0, 10, false), phase(10, 200, true)];
        assert!(validate_phase_table(&table).is_err());
    }

    #[test]
    fn test_phase_table_not_starting_at_zero() {
        let table = [phase(1, 10, false), phase(11, 200, true)];
        assert!(validate_phase_table(&table).is_err());
    }

    #[test]
    fn test_phase_table_without_harvest() {
        let table = [phase(0, 10, false), phase(11, 200, false)];
        assert_eq!(
            validate_phase_table(&table),
            Err("Last phase must be a harvest phase")
        );
    }

    #[test]
    fn test_phase_table_inverted_range() {
        let table = [phase(0, 10, false), phase(11, 5, true)];
        assert!(validate_phase_table(&table).is_err());
    }

    // ========================================================================
    // Planting Date Tests
    // ========================================================================

    #[test]
    fn test_planting_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(validate_planting_date(today, today).is_ok());
        assert!(validate_planting_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), today).is_ok());
        assert!(validate_planting_date(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(), today).is_err());
    }

    // ========================================================================
    // Field Tests
    // ========================================================================

    #[test]
    fn test_field_polygon() {
        let vertex = |lat: i64, lng: i64| GpsCoordinates::new(Decimal::from(lat), Decimal::from(lng));

        let triangle = FieldPolygon::new(vec![vertex(14, -91), vertex(15, -91), vertex(15, -90)]);
        assert!(validate_field_polygon(&triangle).is_ok());

        let line = FieldPolygon::new(vec![vertex(14, -91), vertex(15, -91)]);
        assert!(validate_field_polygon(&line).is_err());

        let out_of_range = FieldPolygon::new(vec![vertex(14, -91), vertex(95, -91), vertex(15, -90)]);
        assert_eq!(
            validate_field_polygon(&out_of_range),
            Err("Coordinates out of range")
        );
    }
}
