//! The normalized wind-speed type.
//!
//! Upstream sources report wind as plain numbers, as range text such as `"10-20"`, or as
//! `{ "low": 10, "high": 20 }` objects. All of them collapse into a single [`WindSpeed`]
//! (km/h, finite, never negative) here, so scoring only ever sees one numeric type.

use serde::Serialize;
use std::fmt;

/// Effective wind speed in km/h.
///
/// Ranges collapse to their upper bound. Unparsable or non-finite input becomes `0.0`.
///
/// # Examples
///
/// ```
/// use shoresquad::WindSpeed;
///
/// assert_eq!(WindSpeed::parse("10-20").km_h(), 20.0);
/// assert_eq!(WindSpeed::parse("15").km_h(), 15.0);
/// assert_eq!(WindSpeed::parse("calm").km_h(), 0.0);
/// assert_eq!(WindSpeed::from(12.5).km_h(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct WindSpeed(f64);

impl WindSpeed {
    pub const CALM: WindSpeed = WindSpeed(0.0);

    /// Creates a wind speed from a km/h value, mapping NaN, infinities and negatives to calm.
    pub fn new(km_h: f64) -> Self {
        if km_h.is_finite() && km_h > 0.0 {
            WindSpeed(km_h)
        } else {
            WindSpeed::CALM
        }
    }

    /// Parses wind text.
    ///
    /// Text containing a dash is read as an `A-B` range and only the part after the first
    /// dash is considered, unless that part is blank (`"10-"`), in which case the whole text
    /// is. The leading whole number is used, so fractions and trailing units (`"20 km/h"`)
    /// are ignored. Anything without a leading number is calm.
    pub fn parse(text: &str) -> Self {
        let relevant = match text.split_once('-') {
            Some((_, upper)) if !upper.trim().is_empty() => upper,
            _ => text,
        };
        leading_integer(relevant)
            .map(WindSpeed::new)
            .unwrap_or(WindSpeed::CALM)
    }

    /// The upper bound of a reported `low`..`high` range.
    pub fn from_range(low: f64, high: f64) -> Self {
        if high.is_finite() {
            WindSpeed::new(high)
        } else {
            WindSpeed::new(low)
        }
    }

    pub fn km_h(&self) -> f64 {
        self.0
    }
}

/// Reads the run of digits after leading whitespace.
fn leading_integer(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<f64>().ok()
}

impl From<f64> for WindSpeed {
    fn from(km_h: f64) -> Self {
        WindSpeed::new(km_h)
    }
}

impl From<u32> for WindSpeed {
    fn from(km_h: u32) -> Self {
        WindSpeed::new(f64::from(km_h))
    }
}

impl From<&str> for WindSpeed {
    fn from(text: &str) -> Self {
        WindSpeed::parse(text)
    }
}

impl From<String> for WindSpeed {
    fn from(text: String) -> Self {
        WindSpeed::parse(&text)
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}
