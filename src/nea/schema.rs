//! Response schemas of the NEA environment endpoints. Only the fields a refresh uses are
//! modelled; everything else in the payloads is ignored.

use crate::locate::NearestLocator;
use crate::scoring::wind_speed::WindSpeed;
use crate::types::bounds::Bounds;
use crate::types::location::LatLon;
use crate::types::station::Station;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// `GET /24-hour-weather-forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct TwentyFourHourForecast {
    #[serde(default)]
    pub items: Vec<TwentyFourHourItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwentyFourHourItem {
    pub timestamp: Option<String>,
    pub general: GeneralForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralForecast {
    /// Condition text, e.g. "Thundery Showers".
    pub forecast: String,
    pub relative_humidity: Option<Bounds>,
    pub temperature: Bounds,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: RawWindSpeed,
    pub direction: Option<String>,
}

/// Wind speed exactly as published: a `{low, high}` band, a bare number, or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawWindSpeed {
    Band(Bounds),
    Number(f64),
    Text(String),
}

impl RawWindSpeed {
    pub fn normalize(&self) -> WindSpeed {
        match self {
            RawWindSpeed::Band(band) => WindSpeed::from_range(band.low, band.high),
            RawWindSpeed::Number(km_h) => WindSpeed::new(*km_h),
            RawWindSpeed::Text(text) => WindSpeed::parse(text),
        }
    }
}

/// `GET /4-day-weather-forecast`
///
/// Day records are kept as raw JSON so one bad record can be skipped without rejecting the
/// whole response. See [`DailyForecast`].
#[derive(Debug, Clone, Deserialize)]
pub struct FourDayForecast {
    #[serde(default)]
    pub items: Vec<FourDayItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FourDayItem {
    pub timestamp: Option<String>,
    #[serde(default)]
    pub forecasts: Vec<serde_json::Value>,
}

/// One record of the four-day outlook.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub forecast: String,
    pub temperature: Bounds,
    pub relative_humidity: Option<Bounds>,
    pub wind: Wind,
}

/// `GET /air-temperature` and `GET /rainfall`: per-station readings plus station metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct StationReadings {
    pub metadata: ReadingMetadata,
    #[serde(default)]
    pub items: Vec<ReadingItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingMetadata {
    #[serde(default)]
    pub stations: Vec<Station>,
    pub reading_type: Option<String>,
    pub reading_unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingItem {
    pub timestamp: Option<String>,
    #[serde(default)]
    pub readings: Vec<Reading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reading {
    pub station_id: String,
    pub value: f64,
}

/// A reading resolved to the station that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestReading {
    pub station: Station,
    pub value: f64,
    pub distance_km: f64,
}

impl StationReadings {
    /// Latest reading from the closest station (within `max_distance_km`) that reported one.
    pub fn nearest(&self, location: LatLon, max_distance_km: f64) -> Option<NearestReading> {
        let latest: HashMap<&str, f64> = self
            .items
            .last()?
            .readings
            .iter()
            .filter(|reading| reading.value.is_finite())
            .map(|reading| (reading.station_id.as_str(), reading.value))
            .collect();

        let locator = NearestLocator::new(self.metadata.stations.clone());
        let (station, distance_km) = locator
            .query_filtered(location, 1, max_distance_km, |station| {
                latest.contains_key(station.id.as_str())
            })
            .into_iter()
            .next()?;
        let value = *latest.get(station.id.as_str())?;

        Some(NearestReading {
            station,
            value,
            distance_km,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const TWENTY_FOUR_HOUR: &str = r#"{
        "items": [{
            "update_timestamp": "2025-06-16T05:36:00+08:00",
            "timestamp": "2025-06-16T05:30:00+08:00",
            "valid_period": {"start": "2025-06-16T06:00:00+08:00", "end": "2025-06-17T06:00:00+08:00"},
            "general": {
                "forecast": "Thundery Showers",
                "relative_humidity": {"low": 60, "high": 95},
                "temperature": {"low": 24, "high": 33},
                "wind": {"speed": {"low": 10, "high": 20}, "direction": "SSE"}
            },
            "periods": []
        }],
        "api_info": {"status": "healthy"}
    }"#;

    pub const FOUR_DAY: &str = r#"{
        "items": [{
            "update_timestamp": "2025-06-16T05:52:00+08:00",
            "timestamp": "2025-06-16T05:30:00+08:00",
            "forecasts": [
                {
                    "temperature": {"low": 25, "high": 33},
                    "date": "2025-06-17",
                    "forecast": "Afternoon thundery showers",
                    "relative_humidity": {"low": 55, "high": 95},
                    "wind": {"speed": {"low": 10, "high": 20}, "direction": "SSE"},
                    "timestamp": "2025-06-17T00:00:00+08:00"
                },
                {
                    "temperature": {"low": 26, "high": 32},
                    "date": "2025-06-18",
                    "forecast": "Partly cloudy",
                    "relative_humidity": {"low": 60, "high": 90},
                    "wind": {"speed": {"low": 15, "high": 25}, "direction": "S"},
                    "timestamp": "2025-06-18T00:00:00+08:00"
                },
                {
                    "date": "2025-06-19",
                    "forecast": "Fair",
                    "timestamp": "2025-06-19T00:00:00+08:00"
                },
                {
                    "temperature": {"low": 25, "high": 31},
                    "date": "2025-06-20",
                    "forecast": "Fair and warm",
                    "relative_humidity": {"low": 55, "high": 85},
                    "wind": {"speed": "10-15", "direction": "SW"},
                    "timestamp": "2025-06-20T00:00:00+08:00"
                }
            ]
        }],
        "api_info": {"status": "healthy"}
    }"#;

    pub const AIR_TEMPERATURE: &str = r#"{
        "metadata": {
            "stations": [
                {"id": "S107", "device_id": "S107", "name": "East Coast Parkway", "location": {"latitude": 1.3135, "longitude": 103.9625}},
                {"id": "S109", "device_id": "S109", "name": "Ang Mo Kio Avenue 5", "location": {"latitude": 1.3764, "longitude": 103.8492}},
                {"id": "S60", "device_id": "S60", "name": "Sentosa", "location": {"latitude": 1.25, "longitude": 103.8279}}
            ],
            "reading_type": "DBT 1M F",
            "reading_unit": "deg C"
        },
        "items": [{
            "timestamp": "2025-06-16T09:00:00+08:00",
            "readings": [
                {"station_id": "S107", "value": 29.4},
                {"station_id": "S109", "value": 30.1},
                {"station_id": "S60", "value": 28.7}
            ]
        }],
        "api_info": {"status": "healthy"}
    }"#;

    pub const RAINFALL: &str = r#"{
        "metadata": {
            "stations": [
                {"id": "S107", "device_id": "S107", "name": "East Coast Parkway", "location": {"latitude": 1.3135, "longitude": 103.9625}},
                {"id": "S24", "device_id": "S24", "name": "Upper Changi Road North", "location": {"latitude": 1.3678, "longitude": 103.9826}}
            ],
            "reading_type": "TB1 Rainfall 5 Minute Total F",
            "reading_unit": "mm"
        },
        "items": [{
            "timestamp": "2025-06-16T09:00:00+08:00",
            "readings": [
                {"station_id": "S24", "value": 0.2}
            ]
        }],
        "api_info": {"status": "healthy"}
    }"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    const EAST_COAST_PARK: LatLon = LatLon(1.3008, 103.9122);

    #[test]
    fn test_parse_twenty_four_hour() {
        let parsed: TwentyFourHourForecast = serde_json::from_str(TWENTY_FOUR_HOUR).unwrap();
        let general = &parsed.items[0].general;
        assert_eq!(general.forecast, "Thundery Showers");
        assert_eq!(general.temperature, Bounds::new(24.0, 33.0));
        assert_eq!(general.wind.speed.normalize().km_h(), 20.0);
        assert_eq!(general.wind.direction.as_deref(), Some("SSE"));
    }

    #[test]
    fn test_raw_wind_speed_variants() {
        let band: RawWindSpeed = serde_json::from_str(r#"{"low": 5, "high": 15}"#).unwrap();
        let number: RawWindSpeed = serde_json::from_str("12").unwrap();
        let text: RawWindSpeed = serde_json::from_str(r#""10-30""#).unwrap();
        let junk: RawWindSpeed = serde_json::from_str(r#""variable""#).unwrap();

        assert_eq!(band.normalize().km_h(), 15.0);
        assert_eq!(number.normalize().km_h(), 12.0);
        assert_eq!(text.normalize().km_h(), 30.0);
        assert_eq!(junk.normalize().km_h(), 0.0);
    }

    #[test]
    fn test_four_day_records_parse_individually() {
        let parsed: FourDayForecast = serde_json::from_str(FOUR_DAY).unwrap();
        let records = &parsed.items[0].forecasts;
        assert_eq!(records.len(), 4);

        let parsed_records: Vec<Result<DailyForecast, _>> = records
            .iter()
            .cloned()
            .map(serde_json::from_value::<DailyForecast>)
            .collect();
        assert!(parsed_records[0].is_ok());
        assert!(parsed_records[1].is_ok());
        // Missing temperature and wind.
        assert!(parsed_records[2].is_err());
        assert!(parsed_records[3].is_ok());
    }

    #[test]
    fn test_nearest_air_temperature() {
        let readings: StationReadings = serde_json::from_str(AIR_TEMPERATURE).unwrap();
        let nearest = readings.nearest(EAST_COAST_PARK, 50.0).unwrap();
        assert_eq!(nearest.station.id, "S107");
        assert_eq!(nearest.value, 29.4);
        assert!(nearest.distance_km < 7.0);
    }

    #[test]
    fn test_nearest_skips_stations_without_reading() {
        let readings: StationReadings = serde_json::from_str(RAINFALL).unwrap();
        let nearest = readings.nearest(EAST_COAST_PARK, 50.0).unwrap();
        assert_eq!(nearest.station.id, "S24");
        assert_eq!(nearest.value, 0.2);
    }

    #[test]
    fn test_nearest_none_when_out_of_range_or_empty() {
        let readings: StationReadings = serde_json::from_str(AIR_TEMPERATURE).unwrap();
        assert!(readings.nearest(LatLon(51.5, -0.12), 50.0).is_none());

        let empty: StationReadings =
            serde_json::from_str(r#"{"metadata": {"stations": []}, "items": []}"#).unwrap();
        assert!(empty.nearest(EAST_COAST_PARK, 50.0).is_none());
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let result: Result<TwentyFourHourForecast, _> =
            serde_json::from_str(r#"{"items": [{"general": {"forecast": "Fair"}}]}"#);
        assert!(result.is_err());
    }
}
