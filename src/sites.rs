//! Cleanup sites and the events the squad organises at them.

use crate::types::location::{LatLon, Positioned};
use chrono::{NaiveDate, NaiveTime};
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// A stretch of coast where cleanups take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupSite {
    pub id: String,
    pub name: String,
    pub location: LatLon,
}

impl CleanupSite {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: LatLon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }

    /// Built-in sites along the Singapore coast.
    pub fn samples() -> Vec<CleanupSite> {
        vec![
            CleanupSite::new("east-coast-park", "East Coast Park", LatLon(1.3008, 103.9122)),
            CleanupSite::new("pasir-ris", "Pasir Ris Beach", LatLon(1.3817, 103.9536)),
            CleanupSite::new("changi-beach", "Changi Beach Park", LatLon(1.3910, 103.9904)),
            CleanupSite::new("siloso", "Siloso Beach, Sentosa", LatLon(1.2546, 103.8097)),
            CleanupSite::new("west-coast-park", "West Coast Park", LatLon(1.2960, 103.7636)),
        ]
    }
}

impl Positioned for CleanupSite {
    fn position(&self) -> LatLon {
        self.location
    }
}

impl RTreeObject for CleanupSite {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.location.as_point())
    }
}

impl PointDistance for CleanupSite {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.location.0 - point[0];
        let dy = self.location.1 - point[1];
        dx * dx + dy * dy
    }
}

/// A scheduled cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub site_id: String,
    /// Meeting point, as shown to volunteers.
    pub location: String,
    pub attendees: u32,
    pub description: String,
}

impl CleanupEvent {
    /// Built-in events at the sample sites.
    pub fn samples() -> Vec<CleanupEvent> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or_default();
        vec![
            CleanupEvent {
                id: 1,
                title: "East Coast Park Cleanup".to_string(),
                date: date(2025, 6, 15),
                time: time(9),
                site_id: "east-coast-park".to_string(),
                location: "Area C, near the lagoon".to_string(),
                attendees: 24,
                description: "Join us for a morning beach cleanup!".to_string(),
            },
            CleanupEvent {
                id: 2,
                title: "Pasir Ris Squad Meetup".to_string(),
                date: date(2025, 6, 18),
                time: time(16),
                site_id: "pasir-ris".to_string(),
                location: "Carpark C".to_string(),
                attendees: 18,
                description: "Evening cleanup with snacks provided".to_string(),
            },
            CleanupEvent {
                id: 3,
                title: "Changi Coastal Cleanup".to_string(),
                date: date(2025, 6, 22),
                time: time(8),
                site_id: "changi-beach".to_string(),
                location: "Car park 4".to_string(),
                attendees: 31,
                description: "Help protect our beautiful coastline".to_string(),
            },
        ]
    }

    /// Date and time the event starts.
    pub fn starts_at(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }
}
