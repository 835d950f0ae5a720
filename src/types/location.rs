//! Geographical coordinates and the trait that lets spatial lookups treat sites and
//! stations alike.

use haversine::{distance, Location as HaversineLocation, Units};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use shoresquad::LatLon;
///
/// let east_coast_park = LatLon(1.3008, 103.9122);
/// assert_eq!(east_coast_park.0, 1.3008); // Latitude
/// assert_eq!(east_coast_park.1, 103.9122); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: LatLon) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.0,
                longitude: self.1,
            },
            HaversineLocation {
                latitude: other.0,
                longitude: other.1,
            },
            Units::Kilometers,
        )
    }

    pub(crate) fn as_point(&self) -> [f64; 2] {
        [self.0, self.1]
    }
}

/// Anything with a fixed position on the map.
pub trait Positioned {
    fn position(&self) -> LatLon;
}
