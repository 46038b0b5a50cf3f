//! Weather overlay tests
//!
//! Property-based and unit tests for:
//! - Threshold advisories (no rain, excess rain, extreme heat)
//! - Harvest phases staying weather-invariant
//! - Idempotence and ordered de-duplication

use proptest::prelude::*;
use shared::engine::overlay::{
    dedup_preserving_order, EXCESS_RAIN_ADVISORY, EXCESS_RAIN_THRESHOLD_MM, EXTREME_HEAT_ADVISORY,
    EXTREME_HEAT_THRESHOLD_CELSIUS, NO_RAIN_ADVISORY,
};
use shared::{evaluate, overlay, resolve, ResolvedPhase, WeatherSnapshot, CHART_HOURS};

fn phase(is_harvest: bool, recommendations: &[&str]) -> ResolvedPhase {
    ResolvedPhase {
        phase_name: if is_harvest { "Cosecha" } else { "Floración" }.to_string(),
        is_harvest,
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Hourly temperature in degrees Celsius
fn temperature_strategy() -> impl Strategy<Value = f64> {
    -10.0f64..50.0
}

/// Hourly precipitation in millimetres
fn precipitation_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..60.0]
}

fn recommendations_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{1,20}", 0..6)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_dry_hot_hour_appends_in_order() {
        let weather = WeatherSnapshot::new(vec![40.0], vec![0.0]);
        let recs = overlay(&phase(false, &["Evita sequía."]), Some(&weather));
        assert_eq!(
            recs,
            vec!["Evita sequía.", NO_RAIN_ADVISORY, EXTREME_HEAT_ADVISORY]
        );
    }

    #[test]
    fn test_excess_rain() {
        let weather = WeatherSnapshot::new(vec![22.0], vec![25.0]);
        let recs = overlay(&phase(false, &[]), Some(&weather));
        assert_eq!(recs, vec![EXCESS_RAIN_ADVISORY]);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let weather = WeatherSnapshot::new(
            vec![EXTREME_HEAT_THRESHOLD_CELSIUS],
            vec![EXCESS_RAIN_THRESHOLD_MM],
        );
        assert!(overlay(&phase(false, &[]), Some(&weather)).is_empty());
    }

    #[test]
    fn test_missing_weather_counts_as_dry() {
        let recs = overlay(&phase(false, &[]), None);
        assert_eq!(recs, vec![NO_RAIN_ADVISORY]);
    }

    #[test]
    fn test_empty_series_counts_as_dry() {
        let recs = overlay(&phase(false, &[]), Some(&WeatherSnapshot::default()));
        assert_eq!(recs, vec![NO_RAIN_ADVISORY]);
    }

    #[test]
    fn test_existing_advisory_not_duplicated() {
        let weather = WeatherSnapshot::new(vec![20.0], vec![0.0]);
        let recs = overlay(&phase(false, &[NO_RAIN_ADVISORY]), Some(&weather));
        assert_eq!(recs, vec![NO_RAIN_ADVISORY]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let deduped = dedup_preserving_order(["b", "a", "b", "c", "a"]);
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_evaluate_overdue_ignores_weather() {
        let weather = WeatherSnapshot::new(vec![45.0], vec![0.0]);
        let resolution = evaluate("Maíz", 365, Some(&weather));
        assert_eq!(resolution.phase, resolve("Maíz", 365).phase);
    }

    #[test]
    fn test_evaluate_unknown_crop_ignores_weather() {
        let weather = WeatherSnapshot::new(vec![45.0], vec![0.0]);
        let resolution = evaluate("Café", 10, Some(&weather));
        assert_eq!(resolution.phase.recommendations.len(), 2);
        assert!(!resolution
            .phase
            .recommendations
            .iter()
            .any(|r| r == NO_RAIN_ADVISORY));
    }

    #[test]
    fn test_chart_series_truncates_to_a_day() {
        let hours = 72;
        let weather = WeatherSnapshot {
            hourly_time: (0..hours)
                .map(|h| format!("2024-03-{:02}T{:02}:00", 1 + h / 24, h % 24))
                .collect(),
            hourly_temperature: vec![20.0; hours],
            hourly_precipitation: vec![0.5; hours],
        };

        let chart = weather.chart_series(CHART_HOURS);
        assert_eq!(chart.labels.len(), CHART_HOURS);
        assert_eq!(chart.labels[0], "00:00");
        assert_eq!(chart.labels[23], "23:00");
        assert_eq!(chart.temperature.len(), CHART_HOURS);
        assert_eq!(chart.precipitation.len(), CHART_HOURS);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Applying the overlay twice changes nothing
        #[test]
        fn prop_overlay_idempotent(
            recs in recommendations_strategy(),
            temp in temperature_strategy(),
            rain in precipitation_strategy(),
        ) {
            let weather = WeatherSnapshot::new(vec![temp], vec![rain]);
            let base = ResolvedPhase {
                phase_name: "Floración".to_string(),
                is_harvest: false,
                recommendations: recs,
            };

            let once = overlay(&base, Some(&weather));
            let twice = overlay(
                &ResolvedPhase { recommendations: once.clone(), ..base.clone() },
                Some(&weather),
            );
            prop_assert_eq!(once, twice);
        }

        /// Harvest recommendations come back untouched
        #[test]
        fn prop_harvest_weather_invariant(
            recs in recommendations_strategy(),
            temp in temperature_strategy(),
            rain in precipitation_strategy(),
        ) {
            let weather = WeatherSnapshot::new(vec![temp], vec![rain]);
            let harvest = ResolvedPhase {
                phase_name: "Cosecha".to_string(),
                is_harvest: true,
                recommendations: recs.clone(),
            };
            prop_assert_eq!(overlay(&harvest, Some(&weather)), recs);
        }

        /// Output never contains the same line twice
        #[test]
        fn prop_overlay_no_duplicates(
            recs in recommendations_strategy(),
            temp in temperature_strategy(),
            rain in precipitation_strategy(),
        ) {
            let weather = WeatherSnapshot::new(vec![temp], vec![rain]);
            let base = ResolvedPhase {
                phase_name: "Floración".to_string(),
                is_harvest: false,
                recommendations: recs,
            };

            let out = overlay(&base, Some(&weather));
            let unique: std::collections::HashSet<_> = out.iter().collect();
            prop_assert_eq!(unique.len(), out.len());
        }

        /// At most one rain advisory applies to a given hour
        #[test]
        fn prop_rain_advisories_exclusive(rain in precipitation_strategy()) {
            let weather = WeatherSnapshot::new(vec![20.0], vec![rain]);
            let out = overlay(&phase(false, &[]), Some(&weather));

            let no_rain = out.iter().any(|r| r == NO_RAIN_ADVISORY);
            let excess = out.iter().any(|r| r == EXCESS_RAIN_ADVISORY);
            prop_assert!(!(no_rain && excess));
            prop_assert_eq!(no_rain, rain == 0.0);
            prop_assert_eq!(excess, rain > EXCESS_RAIN_THRESHOLD_MM);
        }
    }
}
