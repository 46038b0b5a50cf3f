//! Crop identifiers

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{phase_table, pre_planting};
use crate::models::PhaseDefinition;

/// Crops with a configured phase table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Crop {
    #[default]
    #[serde(rename = "Maíz")]
    Maiz,
    Papa,
    Frijol,
    Trigo,
}

/// Returned when a crop identifier does not name a configured crop
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown crop: {0}")]
pub struct UnknownCrop(pub String);

impl Crop {
    /// Every configured crop, in display order
    pub const ALL: [Crop; 4] = [Crop::Maiz, Crop::Papa, Crop::Frijol, Crop::Trigo];

    /// Display name, which is also the canonical identifier
    pub fn name(&self) -> &'static str {
        match self {
            Crop::Maiz => "Maíz",
            Crop::Papa => "Papa",
            Crop::Frijol => "Frijol",
            Crop::Trigo => "Trigo",
        }
    }

    /// ASCII identifier usable in URLs
    pub fn slug(&self) -> &'static str {
        match self {
            Crop::Maiz => "maiz",
            Crop::Papa => "papa",
            Crop::Frijol => "frijol",
            Crop::Trigo => "trigo",
        }
    }

    pub fn phases(&self) -> &'static [PhaseDefinition] {
        phase_table::phases_for(*self)
    }

    pub fn pre_planting_advice(&self) -> &'static [&'static str] {
        pre_planting::advice_for(*self)
    }

    /// Length of the crop cycle, i.e. the last phase's `max_day`
    pub fn total_cycle_days(&self) -> i64 {
        self.phases()
            .last()
            .map(|phase| phase.max_day)
            .unwrap_or(phase_table::FALLBACK_CYCLE_DAYS)
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Crop {
    type Err = UnknownCrop;

    /// Accepts the display name (any case) or the slug
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.name().to_lowercase() == wanted || crop.slug() == wanted)
            .ok_or_else(|| UnknownCrop(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        assert_eq!("Maíz".parse::<Crop>(), Ok(Crop::Maiz));
        assert_eq!("Papa".parse::<Crop>(), Ok(Crop::Papa));
        assert_eq!("Frijol".parse::<Crop>(), Ok(Crop::Frijol));
        assert_eq!("Trigo".parse::<Crop>(), Ok(Crop::Trigo));
    }

    #[test]
    fn test_parse_slugs_and_case() {
        assert_eq!("maiz".parse::<Crop>(), Ok(Crop::Maiz));
        assert_eq!("MAÍZ".parse::<Crop>(), Ok(Crop::Maiz));
        assert_eq!(" trigo ".parse::<Crop>(), Ok(Crop::Trigo));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Arroz".parse::<Crop>().unwrap_err();
        assert_eq!(err, UnknownCrop("Arroz".to_string()));
        assert_eq!(err.to_string(), "Unknown crop: Arroz");
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Crop::Maiz).unwrap();
        assert_eq!(json, "\"Maíz\"");
        let crop: Crop = serde_json::from_str("\"Frijol\"").unwrap();
        assert_eq!(crop, Crop::Frijol);
    }

    #[test]
    fn test_total_cycle_days() {
        for crop in Crop::ALL {
            assert_eq!(crop.total_cycle_days(), 200);
        }
    }
}
