//! Classifies free-text weather descriptions (as published by NEA, e.g. "Thundery Showers"
//! or "Partly Cloudy (Day)") into coarse [`ConditionCategory`] buckets and display [`Icon`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather bucket derived from a condition description.
///
/// Obtain one with [`ConditionCategory::classify`]. Text that matches no known pattern
/// becomes [`ConditionCategory::Unknown`] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionCategory {
    /// Sunny or fair skies.
    Clear,
    /// Partly cloudy.
    PartlyCloudy,
    /// Cloudy or overcast.
    Cloudy,
    /// Light rain or showers.
    RainLight,
    /// Heavy rain or heavy showers.
    RainHeavy,
    /// Thundery showers or storms.
    Storm,
    /// Windy, without precipitation.
    Windy,
    /// Description matched nothing known.
    Unknown,
}

/// Matching table, evaluated top to bottom. The first row with any matching needle wins.
///
/// "partly cloudy" sits above "cloudy" so the generic substring can't swallow it.
const CLASSIFICATION_RULES: &[(&[&str], ConditionCategory)] = &[
    (&["thundery", "storm"], ConditionCategory::Storm),
    (&["heavy rain", "heavy showers"], ConditionCategory::RainHeavy),
    (&["showers", "rain"], ConditionCategory::RainLight),
    (&["partly cloudy"], ConditionCategory::PartlyCloudy),
    (&["cloudy"], ConditionCategory::Cloudy),
    (&["sunny", "fair"], ConditionCategory::Clear),
    (&["windy"], ConditionCategory::Windy),
];

impl ConditionCategory {
    /// Classifies a condition description, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoresquad::ConditionCategory;
    ///
    /// assert_eq!(ConditionCategory::classify("Thundery Showers"), ConditionCategory::Storm);
    /// assert_eq!(ConditionCategory::classify("Partly Cloudy (Day)"), ConditionCategory::PartlyCloudy);
    /// assert_eq!(ConditionCategory::classify("Hazy"), ConditionCategory::Unknown);
    /// ```
    pub fn classify(condition: &str) -> Self {
        let lowered = condition.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
            .map(|(_, category)| *category)
            .unwrap_or(ConditionCategory::Unknown)
    }

    /// The display icon for this category.
    pub fn icon(&self) -> Icon {
        match self {
            ConditionCategory::Clear => Icon::Sun,
            ConditionCategory::PartlyCloudy => Icon::SunBehindCloud,
            ConditionCategory::Cloudy => Icon::Cloud,
            ConditionCategory::RainLight => Icon::SunBehindRainCloud,
            ConditionCategory::RainHeavy => Icon::RainCloud,
            ConditionCategory::Storm => Icon::ThunderCloud,
            ConditionCategory::Windy => Icon::Wind,
            ConditionCategory::Unknown => Icon::SunBehindSmallCloud,
        }
    }

    /// Kebab-case label, e.g. `"rain-light"`.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionCategory::Clear => "clear",
            ConditionCategory::PartlyCloudy => "partly-cloudy",
            ConditionCategory::Cloudy => "cloudy",
            ConditionCategory::RainLight => "rain-light",
            ConditionCategory::RainHeavy => "rain-heavy",
            ConditionCategory::Storm => "storm",
            ConditionCategory::Windy => "windy",
            ConditionCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weather glyph shown next to a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Sun,
    SunBehindCloud,
    Cloud,
    SunBehindRainCloud,
    RainCloud,
    ThunderCloud,
    Wind,
    SunBehindSmallCloud,
}

impl Icon {
    /// Icon for a raw condition description. Shorthand for classifying first.
    pub fn for_condition(condition: &str) -> Self {
        ConditionCategory::classify(condition).icon()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sun => "☀️",
            Icon::SunBehindCloud => "⛅",
            Icon::Cloud => "☁️",
            Icon::SunBehindRainCloud => "🌦️",
            Icon::RainCloud => "🌧️",
            Icon::ThunderCloud => "⛈️",
            Icon::Wind => "💨",
            Icon::SunBehindSmallCloud => "🌤️",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
