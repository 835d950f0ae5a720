//! The four NEA environment endpoints a refresh draws from.

use std::fmt;

/// Public base URL of the NEA environment API on data.gov.sg.
pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.sg/v1/environment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// General outlook for the next 24 hours: condition text plus temperature, humidity and
    /// wind bands.
    TwentyFourHourForecast,
    /// Outlook for the next four days, one record per day.
    FourDayForecast,
    /// Latest air temperature per reading station.
    AirTemperature,
    /// Latest rainfall per reading station.
    Rainfall,
}

impl Endpoint {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::TwentyFourHourForecast => "24-hour-weather-forecast",
            Endpoint::FourDayForecast => "4-day-weather-forecast",
            Endpoint::AirTemperature => "air-temperature",
            Endpoint::Rainfall => "rainfall",
        }
    }

    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path_segment())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
