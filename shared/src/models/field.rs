//! Field polygon drawn on the map

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Minimum vertex count for a closed field outline
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Outline of a cultivated field, vertices in drawing order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct FieldPolygon {
    pub vertices: Vec<GpsCoordinates>,
}

impl FieldPolygon {
    pub fn new(vertices: Vec<GpsCoordinates>) -> Self {
        Self { vertices }
    }

    /// Arithmetic mean of the vertices; the point used for weather and geocoding lookups
    pub fn centroid(&self) -> Option<GpsCoordinates> {
        if self.vertices.is_empty() {
            return None;
        }

        let count = Decimal::from(self.vertices.len());
        let (lat_sum, lng_sum) = self
            .vertices
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(lat, lng), v| {
                (lat + v.latitude, lng + v.longitude)
            });

        Some(GpsCoordinates::new(lat_sum / count, lng_sum / count))
    }

    pub fn is_closed_shape(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }
}

impl From<Vec<GpsCoordinates>> for FieldPolygon {
    fn from(vertices: Vec<GpsCoordinates>) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn point(lat: &str, lng: &str) -> GpsCoordinates {
        GpsCoordinates::new(Decimal::from_str(lat).unwrap(), Decimal::from_str(lng).unwrap())
    }

    #[test]
    fn test_centroid_of_square() {
        let polygon = FieldPolygon::new(vec![
            point("14.0", "-91.0"),
            point("14.0", "-90.0"),
            point("15.0", "-90.0"),
            point("15.0", "-91.0"),
        ]);
        assert_eq!(polygon.centroid(), Some(point("14.5", "-90.5")));
    }

    #[test]
    fn test_centroid_of_empty_polygon() {
        assert_eq!(FieldPolygon::default().centroid(), None);
    }

    #[test]
    fn test_closed_shape() {
        let mut polygon = FieldPolygon::new(vec![point("14.6", "-90.5"), point("14.7", "-90.5")]);
        assert!(!polygon.is_closed_shape());
        polygon.vertices.push(point("14.7", "-90.4"));
        assert!(polygon.is_closed_shape());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let polygon = FieldPolygon::new(vec![point("14.6", "-90.5")]);
        let json = serde_json::to_value(&polygon).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
