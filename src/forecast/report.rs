use crate::forecast::day::ForecastDay;
use crate::forecast::normalizer::ForecastNormalizer;
use crate::scoring::suitability::SuitabilityScore;
use crate::types::observation::WeatherObservation;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Everything a source hands to the normalizer for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    pub today: WeatherObservation,
    /// Days after today, soonest first.
    pub multi_day: Vec<WeatherObservation>,
}

/// Where the observations behind a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// The NEA endpoints.
    Live,
    /// The synthetic fallback dataset, because the live path failed.
    Fallback,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live => write!(f, "live"),
            DataOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// The result of one refresh cycle, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub days: Vec<ForecastDay>,
    /// Score for today (the first day).
    pub current: SuitabilityScore,
    pub origin: DataOrigin,
}

impl ForecastReport {
    /// Normalizes `set` and wraps it into a report.
    pub fn build(
        normalizer: &ForecastNormalizer,
        set: &ObservationSet,
        reference: NaiveDate,
        origin: DataOrigin,
    ) -> Self {
        let days = normalizer.normalize_set(set, reference);
        let current = days
            .first()
            .map(|day| day.score)
            .unwrap_or_else(|| SuitabilityScore::for_observation(&set.today));
        Self {
            days,
            current,
            origin,
        }
    }

    pub fn today(&self) -> Option<&ForecastDay> {
        self.days.first()
    }

    /// The highest-scoring day, the earliest one on ties.
    pub fn best_day(&self) -> Option<&ForecastDay> {
        self.days
            .iter()
            .rev()
            .max_by_key(|day| day.score.score())
    }
}
