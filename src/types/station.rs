//! NEA reading stations, as listed in the `metadata.stations` block of the air-temperature
//! and rainfall endpoints. Also includes the implementations needed to index stations
//! spatially with `rstar`.

use crate::types::location::{LatLon, Positioned};
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// A single NEA weather station.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// Station identifier referenced by readings (e.g. "S109").
    pub id: String,
    /// Identifier of the device at the station; usually equal to `id`.
    pub device_id: Option<String>,
    /// Human readable name (e.g. "Ang Mo Kio Avenue 5").
    pub name: String,
    pub location: StationLocation,
}

/// Where a station stands, in decimal degrees.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StationLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Positioned for Station {
    fn position(&self) -> LatLon {
        LatLon(self.location.latitude, self.location.longitude)
    }
}

/// Stations are points, so the envelope is a degenerate AABB around that point.
impl RTreeObject for Station {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position().as_point())
    }
}

/// Squared Euclidean distance in degree space. Good enough for ordering R-tree candidates;
/// the final distance is always computed with haversine.
impl PointDistance for Station {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.location.latitude - point[0];
        let dy = self.location.longitude - point[1];
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nea_station() {
        let json = r#"{
            "id": "S109",
            "device_id": "S109",
            "name": "Ang Mo Kio Avenue 5",
            "location": { "latitude": 1.3764, "longitude": 103.8492 }
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.id, "S109");
        assert_eq!(station.position(), LatLon(1.3764, 103.8492));
    }

    #[test]
    fn test_distance_2() {
        let station = Station {
            id: "S1".to_string(),
            device_id: None,
            name: "Test".to_string(),
            location: StationLocation {
                latitude: 1.0,
                longitude: 2.0,
            },
        };
        assert_eq!(station.distance_2(&[1.0, 2.0]), 0.0);
        assert_eq!(station.distance_2(&[4.0, 6.0]), 25.0);
    }
}
