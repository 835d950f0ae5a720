use crate::scoring::condition::{ConditionCategory, Icon};
use crate::scoring::suitability::SuitabilityScore;
use crate::types::observation::WeatherObservation;
use chrono::NaiveDate;
use serde::Serialize;

/// One normalized forecast day, ready for display.
///
/// `category`, `icon` and `score` are always derived from `observation`, never set
/// independently. Build one with [`ForecastDay::derive`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// "Today", "Tomorrow", or a short weekday name such as "Mon".
    pub day_name: String,
    pub observation: WeatherObservation,
    pub category: ConditionCategory,
    pub icon: Icon,
    pub score: SuitabilityScore,
    /// `true` when the entry is filler standing in for a missing or malformed record.
    pub synthetic: bool,
}

impl ForecastDay {
    /// Classifies and scores `observation`, pinning it to `date`.
    pub fn derive(
        date: NaiveDate,
        day_name: impl Into<String>,
        mut observation: WeatherObservation,
        synthetic: bool,
    ) -> Self {
        observation.date = Some(date);
        let category = ConditionCategory::classify(&observation.condition);
        Self {
            date,
            day_name: day_name.into(),
            category,
            icon: category.icon(),
            score: SuitabilityScore::for_observation(&observation),
            observation,
            synthetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::suitability::SuitabilityCategory;

    #[test]
    fn test_derive_is_consistent_with_condition() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let observation = WeatherObservation::new("Thundery Showers", 24.0, 32.0, "10-20");
        let day = ForecastDay::derive(date, "Today", observation, false);

        assert_eq!(day.category, ConditionCategory::Storm);
        assert_eq!(day.icon, Icon::ThunderCloud);
        assert_eq!(day.score.score(), 2);
        assert_eq!(day.score.category(), SuitabilityCategory::Poor);
        assert_eq!(day.observation.date, Some(date));
    }
}
