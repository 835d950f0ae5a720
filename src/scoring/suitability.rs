//! The cleanup suitability score: how favourable a day's weather is for an outdoor beach
//! cleanup, on a 0 to 10 scale.
//!
//! Scoring starts from 10 and subtracts independent penalties for the condition category,
//! the average temperature, the effective wind speed and the rainfall. The total is clamped
//! into `0..=10` and banded into a [`SuitabilityCategory`].

use crate::scoring::condition::ConditionCategory;
use crate::scoring::wind_speed::WindSpeed;
use crate::types::observation::WeatherObservation;
use serde::Serialize;
use std::fmt;

const BASE_SCORE: i32 = 10;
pub const MAX_SCORE: u8 = 10;

/// Label banding a [`SuitabilityScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityCategory {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SuitabilityCategory {
    /// Bands a score: 8 and up is excellent, 6 and up good, 4 and up fair, anything lower poor.
    pub fn from_score(score: u8) -> Self {
        match score {
            8.. => SuitabilityCategory::Excellent,
            6..=7 => SuitabilityCategory::Good,
            4..=5 => SuitabilityCategory::Fair,
            _ => SuitabilityCategory::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityCategory::Excellent => "excellent",
            SuitabilityCategory::Good => "good",
            SuitabilityCategory::Fair => "fair",
            SuitabilityCategory::Poor => "poor",
        }
    }
}

impl fmt::Display for SuitabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A 0 to 10 suitability rating and its category.
///
/// The category is always derived from the score; the two can't disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SuitabilityScore {
    score: u8,
    category: SuitabilityCategory,
}

impl SuitabilityScore {
    /// Clamps a raw (possibly negative or oversized) total into `0..=10` and bands it.
    pub fn from_raw(raw: i32) -> Self {
        let score = raw.clamp(0, i32::from(MAX_SCORE)) as u8;
        Self {
            score,
            category: SuitabilityCategory::from_score(score),
        }
    }

    /// Scores a set of conditions.
    ///
    /// # Arguments
    ///
    /// * `category` - The classified condition, see [`ConditionCategory::classify`].
    /// * `avg_temp` - Average of the day's high and low, in °C.
    /// * `wind_speed` - Anything convertible into a [`WindSpeed`]: km/h numbers or text such as `"10-20"`.
    /// * `rainfall` - Rainfall in mm. `None` counts as no rain.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoresquad::{ConditionCategory, SuitabilityCategory, SuitabilityScore};
    ///
    /// let fair = SuitabilityScore::calculate(ConditionCategory::classify("Fair (Day)"), 28.0, "10", Some(0.0));
    /// assert_eq!(fair.score(), 10);
    /// assert_eq!(fair.category(), SuitabilityCategory::Excellent);
    ///
    /// let storm = SuitabilityScore::calculate(ConditionCategory::Storm, 35.0, "25", Some(15.0));
    /// assert_eq!(storm.score(), 0);
    /// assert_eq!(storm.category(), SuitabilityCategory::Poor);
    /// ```
    pub fn calculate(
        category: ConditionCategory,
        avg_temp: f64,
        wind_speed: impl Into<WindSpeed>,
        rainfall: Option<f64>,
    ) -> Self {
        let penalty = condition_penalty(category)
            + temperature_penalty(avg_temp)
            + wind_penalty(wind_speed.into())
            + rainfall_penalty(rainfall);
        Self::from_raw(BASE_SCORE - penalty)
    }

    /// Scores an observation, classifying its condition text and averaging its temperatures.
    pub fn for_observation(observation: &WeatherObservation) -> Self {
        Self::calculate(
            ConditionCategory::classify(&observation.condition),
            observation.average_temperature(),
            observation.wind_speed,
            observation.rainfall,
        )
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn category(&self) -> SuitabilityCategory {
        self.category
    }
}

impl fmt::Display for SuitabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.score, MAX_SCORE, self.category)
    }
}

fn condition_penalty(category: ConditionCategory) -> i32 {
    match category {
        ConditionCategory::Storm | ConditionCategory::RainHeavy => 8,
        ConditionCategory::RainLight => 4,
        ConditionCategory::Cloudy => 1,
        ConditionCategory::Clear
        | ConditionCategory::PartlyCloudy
        | ConditionCategory::Windy
        | ConditionCategory::Unknown => 0,
    }
}

/// Only one temperature tier ever applies.
fn temperature_penalty(avg_temp: f64) -> i32 {
    if avg_temp > 35.0 || avg_temp < 20.0 {
        3
    } else if avg_temp > 32.0 || avg_temp < 22.0 {
        1
    } else {
        0
    }
}

fn wind_penalty(wind_speed: WindSpeed) -> i32 {
    let km_h = wind_speed.km_h();
    if km_h > 25.0 {
        3
    } else if km_h > 20.0 {
        1
    } else {
        0
    }
}

fn rainfall_penalty(rainfall: Option<f64>) -> i32 {
    let mm = rainfall.filter(|mm| mm.is_finite()).unwrap_or(0.0);
    if mm > 10.0 {
        5
    } else if mm > 5.0 {
        2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_text(
        condition: &str,
        avg_temp: f64,
        wind: impl Into<WindSpeed>,
        rain: f64,
    ) -> SuitabilityScore {
        SuitabilityScore::calculate(
            ConditionCategory::classify(condition),
            avg_temp,
            wind,
            Some(rain),
        )
    }

    #[test]
    fn test_calibration_fair_day_is_excellent() {
        let result = score_text("Fair (Day)", 28.0, "10", 0.0);
        assert_eq!(result.score(), 10);
        assert_eq!(result.category(), SuitabilityCategory::Excellent);
    }

    #[test]
    fn test_calibration_thundery_showers_clamps_to_zero() {
        // 10 - 8 (storm) - 1 (35 is above 32 only) - 1 (25 is above 20 only) - 5 (rain) = -5.
        let result = score_text("Thundery Showers", 35.0, "25", 15.0);
        assert_eq!(result.score(), 0);
        assert_eq!(result.category(), SuitabilityCategory::Poor);
    }

    #[test]
    fn test_every_penalty_at_its_maximum() {
        // -8 storm, -3 temperature, -3 wind, -5 rain.
        let result = score_text("Thundery Showers", 36.0, "20-30", 15.0);
        assert_eq!(result.score(), 0);
        assert_eq!(result.category(), SuitabilityCategory::Poor);
    }

    #[test]
    fn test_storm_alone_is_poor() {
        let result = score_text("Severe storm warning", 28.0, 10.0, 0.0);
        assert_eq!(result.score(), 2);
        assert_eq!(result.category(), SuitabilityCategory::Poor);
    }

    #[test]
    fn test_condition_penalties() {
        assert_eq!(score_text("Heavy Rain", 28.0, 0.0, 0.0).score(), 2);
        assert_eq!(score_text("Light Showers", 28.0, 0.0, 0.0).score(), 6);
        assert_eq!(score_text("Cloudy", 28.0, 0.0, 0.0).score(), 9);
        assert_eq!(score_text("Partly Cloudy (Day)", 28.0, 0.0, 0.0).score(), 10);
        assert_eq!(score_text("Windy", 28.0, 0.0, 0.0).score(), 10);
        assert_eq!(score_text("Hazy", 28.0, 0.0, 0.0).score(), 10);
    }

    #[test]
    fn test_temperature_tiers_are_not_cumulative() {
        assert_eq!(temperature_penalty(19.9), 3);
        assert_eq!(temperature_penalty(20.0), 1);
        assert_eq!(temperature_penalty(21.9), 1);
        assert_eq!(temperature_penalty(22.0), 0);
        assert_eq!(temperature_penalty(32.0), 0);
        assert_eq!(temperature_penalty(32.5), 1);
        assert_eq!(temperature_penalty(35.0), 1);
        assert_eq!(temperature_penalty(35.1), 3);
        assert_eq!(temperature_penalty(-5.0), 3);
    }

    #[test]
    fn test_wind_tiers() {
        assert_eq!(wind_penalty(WindSpeed::from("10-20")), 0);
        assert_eq!(wind_penalty(WindSpeed::from(20.5)), 1);
        assert_eq!(wind_penalty(WindSpeed::from("15-25")), 1);
        assert_eq!(wind_penalty(WindSpeed::from("25-26")), 3);
        assert_eq!(wind_penalty(WindSpeed::from("gusty")), 0);
    }

    #[test]
    fn test_rainfall_tiers() {
        assert_eq!(rainfall_penalty(None), 0);
        assert_eq!(rainfall_penalty(Some(0.0)), 0);
        assert_eq!(rainfall_penalty(Some(5.0)), 0);
        assert_eq!(rainfall_penalty(Some(5.1)), 2);
        assert_eq!(rainfall_penalty(Some(10.0)), 2);
        assert_eq!(rainfall_penalty(Some(10.1)), 5);
        assert_eq!(rainfall_penalty(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_penalties_across_factors_accumulate() {
        // -1 cloudy, -1 temperature, -1 wind, -2 rain.
        let result = score_text("Cloudy", 33.0, "22", 6.0);
        assert_eq!(result.score(), 5);
        assert_eq!(result.category(), SuitabilityCategory::Fair);
    }

    #[test]
    fn test_clamp_keeps_scores_in_range() {
        for raw in -30..=30 {
            let score = SuitabilityScore::from_raw(raw);
            assert!(score.score() <= MAX_SCORE);
        }
        assert_eq!(SuitabilityScore::from_raw(-19).score(), 0);
        assert_eq!(SuitabilityScore::from_raw(42).score(), 10);
    }

    #[test]
    fn test_category_banding() {
        let expected = [
            (0, SuitabilityCategory::Poor),
            (3, SuitabilityCategory::Poor),
            (4, SuitabilityCategory::Fair),
            (5, SuitabilityCategory::Fair),
            (6, SuitabilityCategory::Good),
            (7, SuitabilityCategory::Good),
            (8, SuitabilityCategory::Excellent),
            (10, SuitabilityCategory::Excellent),
        ];
        for (score, category) in expected {
            assert_eq!(SuitabilityScore::from_raw(score).category(), category);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let first = score_text("Light Showers", 26.0, "20", 5.0);
        let second = score_text("Light Showers", 26.0, "20", 5.0);
        assert_eq!(first, second);
        assert_eq!(first.score(), 6);
        assert_eq!(first.category(), SuitabilityCategory::Good);
    }

    #[test]
    fn test_display() {
        let result = score_text("Cloudy", 28.0, 0.0, 0.0);
        assert_eq!(result.to_string(), "9/10 (excellent)");
    }
}
