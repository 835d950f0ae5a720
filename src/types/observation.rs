//! The per-day weather observation every source is mapped into before normalization.

use crate::scoring::wind_speed::WindSpeed;
use crate::types::bounds::Bounds;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of weather, as reported (or synthesized) upstream.
///
/// Constructed fresh on every refresh. Wind is already normalized to km/h at this point;
/// see [`WindSpeed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    /// Calendar day the observation describes, when the source states one.
    pub date: Option<NaiveDate>,
    /// Free-text condition, e.g. "Thundery Showers".
    pub condition: String,
    /// Forecast high in °C.
    pub temperature_high: f64,
    /// Forecast low in °C.
    pub temperature_low: f64,
    pub wind_speed: WindSpeed,
    /// Measured rainfall in mm. Absent for future days.
    pub rainfall: Option<f64>,
    /// Relative humidity band in %.
    pub relative_humidity: Option<Bounds>,
    /// Latest air temperature reading near the configured location, in °C. Today only.
    pub current_temperature: Option<f64>,
}

impl WeatherObservation {
    /// Creates an observation with only the fields the score depends on.
    pub fn new(
        condition: impl Into<String>,
        temperature_low: f64,
        temperature_high: f64,
        wind_speed: impl Into<WindSpeed>,
    ) -> Self {
        Self {
            date: None,
            condition: condition.into(),
            temperature_high,
            temperature_low,
            wind_speed: wind_speed.into(),
            rainfall: None,
            relative_humidity: None,
            current_temperature: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_rainfall(mut self, rainfall_mm: f64) -> Self {
        self.rainfall = Some(rainfall_mm);
        self
    }

    pub fn with_humidity(mut self, humidity: Bounds) -> Self {
        self.relative_humidity = Some(humidity);
        self
    }

    pub fn with_current_temperature(mut self, celsius: f64) -> Self {
        self.current_temperature = Some(celsius);
        self
    }

    pub fn temperature(&self) -> Bounds {
        Bounds::new(self.temperature_low, self.temperature_high)
    }

    pub fn average_temperature(&self) -> f64 {
        self.temperature().midpoint()
    }

    /// Whether the record is usable for scoring.
    ///
    /// Requires non-blank condition text, finite temperatures with `low <= high`, and a
    /// finite, non-negative rainfall when one is present.
    pub fn is_well_formed(&self) -> bool {
        !self.condition.trim().is_empty()
            && self.temperature().is_ordered()
            && self
                .rainfall
                .map_or(true, |mm| mm.is_finite() && mm >= 0.0)
    }
}
