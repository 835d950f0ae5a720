//! The synthetic dataset substituted when live data can't be fetched.
//!
//! Values follow a fixed weekly pattern of typical Singapore conditions, rotated by the
//! reference date's weekday. The same date always yields the same data.

use crate::forecast::normalizer::FORECAST_DAYS;
use crate::forecast::report::ObservationSet;
use crate::types::bounds::Bounds;
use crate::types::observation::WeatherObservation;
use chrono::{Datelike, Days, NaiveDate};

struct PatternDay {
    condition: &'static str,
    low: f64,
    high: f64,
    wind: &'static str,
    humidity: (f64, f64),
    rainfall_mm: f64,
}

static WEEKLY_PATTERN: [PatternDay; 7] = [
    PatternDay {
        condition: "Partly Cloudy (Day)",
        low: 25.0,
        high: 32.0,
        wind: "10-20",
        humidity: (60.0, 90.0),
        rainfall_mm: 0.0,
    },
    PatternDay {
        condition: "Fair (Day)",
        low: 26.0,
        high: 33.0,
        wind: "10-15",
        humidity: (55.0, 85.0),
        rainfall_mm: 0.0,
    },
    PatternDay {
        condition: "Light Showers",
        low: 24.0,
        high: 31.0,
        wind: "15-25",
        humidity: (65.0, 95.0),
        rainfall_mm: 3.2,
    },
    PatternDay {
        condition: "Cloudy",
        low: 25.0,
        high: 31.0,
        wind: "10-20",
        humidity: (60.0, 90.0),
        rainfall_mm: 0.4,
    },
    PatternDay {
        condition: "Thundery Showers",
        low: 24.0,
        high: 32.0,
        wind: "20-30",
        humidity: (65.0, 95.0),
        rainfall_mm: 14.8,
    },
    PatternDay {
        condition: "Fair & Warm",
        low: 27.0,
        high: 34.0,
        wind: "10-20",
        humidity: (55.0, 85.0),
        rainfall_mm: 0.0,
    },
    PatternDay {
        condition: "Partly Cloudy (Day)",
        low: 25.0,
        high: 32.0,
        wind: "15-20",
        humidity: (60.0, 90.0),
        rainfall_mm: 0.0,
    },
];

/// Builds a full synthetic week starting at `reference`: today plus the following six days.
///
/// Today carries a rainfall figure and a current temperature like a live reading would;
/// later days don't, matching what the forecast endpoints provide.
pub fn synthetic_observations(reference: NaiveDate) -> ObservationSet {
    let offset = reference.weekday().num_days_from_monday() as usize;
    let observation_for = |index: usize| {
        let pattern = &WEEKLY_PATTERN[(offset + index) % WEEKLY_PATTERN.len()];
        let date = reference
            .checked_add_days(Days::new(index as u64))
            .unwrap_or(NaiveDate::MAX);
        let observation =
            WeatherObservation::new(pattern.condition, pattern.low, pattern.high, pattern.wind)
                .with_date(date)
                .with_humidity(Bounds::new(pattern.humidity.0, pattern.humidity.1));
        (pattern, observation)
    };

    let (today_pattern, today) = observation_for(0);
    let today = today
        .with_rainfall(today_pattern.rainfall_mm)
        .with_current_temperature((today_pattern.low + today_pattern.high) / 2.0);

    ObservationSet {
        today,
        multi_day: (1..FORECAST_DAYS)
            .map(|index| observation_for(index).1)
            .collect(),
    }
}
