//! Weather-conditioned advisories layered onto a resolved phase

use std::collections::HashSet;

use crate::models::{CurrentConditions, ResolvedPhase, WeatherSnapshot};

/// Hourly precipitation above this is treated as excess rain (mm)
pub const EXCESS_RAIN_THRESHOLD_MM: f64 = 20.0;

/// Temperature above this is treated as extreme heat (°C)
pub const EXTREME_HEAT_THRESHOLD_CELSIUS: f64 = 35.0;

pub const NO_RAIN_ADVISORY: &str = "No se espera lluvia. Considera riego artificial.";
pub const EXCESS_RAIN_ADVISORY: &str =
    "Exceso de lluvia (>20 mm). Vigila encharcamientos y hongos.";
pub const EXTREME_HEAT_ADVISORY: &str =
    "Temperatura extrema. Monitorea signos de estrés por calor.";

/// Advisories triggered by the current readings, in fixed order
pub fn weather_advisories(conditions: CurrentConditions) -> Vec<&'static str> {
    let mut advisories = Vec::new();

    if conditions.precipitation_mm == 0.0 {
        advisories.push(NO_RAIN_ADVISORY);
    }
    if conditions.precipitation_mm > EXCESS_RAIN_THRESHOLD_MM {
        advisories.push(EXCESS_RAIN_ADVISORY);
    }
    if conditions.temperature_celsius > EXTREME_HEAT_THRESHOLD_CELSIUS {
        advisories.push(EXTREME_HEAT_ADVISORY);
    }

    advisories
}

/// Drop repeated strings, keeping the first occurrence of each
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for item in items {
        let item: String = item.into();
        if seen.insert(item.clone()) {
            ordered.push(item);
        }
    }

    ordered
}

/// Recommendations for a resolved phase with weather advisories merged in
///
/// Harvest phases are weather-invariant and come back unchanged. A missing
/// snapshot counts as zero temperature and zero rain.
pub fn overlay(resolved: &ResolvedPhase, weather: Option<&WeatherSnapshot>) -> Vec<String> {
    if resolved.is_harvest {
        return resolved.recommendations.clone();
    }

    let conditions = CurrentConditions::from_snapshot(weather);
    let base = resolved.recommendations.iter().cloned();
    let extra = weather_advisories(conditions).into_iter().map(String::from);

    dedup_preserving_order(base.chain(extra))
}
