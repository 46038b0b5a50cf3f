//! HTTP handlers for the Agro-Info API

pub mod advisory;
pub mod crops;
pub mod farm_state;
pub mod geocoding;
pub mod health;
pub mod weather;

pub use advisory::*;
pub use crops::*;
pub use farm_state::*;
pub use geocoding::*;
pub use health::*;
pub use weather::*;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};

/// Query parameters for endpoints that take a single point
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl LocationQuery {
    /// Reject points outside WGS84 bounds
    pub fn coordinates(&self) -> AppResult<GpsCoordinates> {
        let point = GpsCoordinates::new(self.latitude, self.longitude);
        shared::validate_coordinates(&point).map_err(|msg| {
            AppError::validation("coordinates", msg, "Coordenadas fuera de rango")
        })?;
        Ok(point)
    }
}

/// Server-local date, used when a request does not pin `today`
pub fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_query_accepts_valid_point() {
        let query = LocationQuery {
            latitude: Decimal::new(146349, 4),
            longitude: Decimal::new(-907506, 4),
        };
        assert!(query.coordinates().is_ok());
    }

    #[test]
    fn test_location_query_rejects_out_of_range() {
        let query = LocationQuery {
            latitude: Decimal::from(91),
            longitude: Decimal::ZERO,
        };
        assert!(matches!(
            query.coordinates(),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_today_or_local_prefers_pinned_date() {
        let pinned = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(today_or_local(Some(pinned)), pinned);
    }
}
