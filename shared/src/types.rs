//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are inside the WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= Decimal::from(-90)
            && self.latitude <= Decimal::from(90)
            && self.longitude >= Decimal::from(-180)
            && self.longitude <= Decimal::from(180)
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lat {:.5}, Lng {:.5}",
            self.latitude, self.longitude
        )
    }
}
