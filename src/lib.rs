mod error;
mod forecast;
mod locate;
mod nea;
mod scoring;
mod shoresquad;
mod sites;
mod types;

pub use error::ShoreSquadError;
pub use shoresquad::*;

pub use scoring::condition::{ConditionCategory, Icon};
pub use scoring::suitability::{SuitabilityCategory, SuitabilityScore, MAX_SCORE};
pub use scoring::wind_speed::WindSpeed;

pub use types::bounds::Bounds;
pub use types::location::{LatLon, Positioned};
pub use types::observation::WeatherObservation;
pub use types::station::{Station, StationLocation};

pub use locate::NearestLocator;
pub use sites::{CleanupEvent, CleanupSite};

pub use forecast::day::ForecastDay;
pub use forecast::fallback::synthetic_observations;
pub use forecast::normalizer::{FillerDefaults, ForecastNormalizer, FORECAST_DAYS};
pub use forecast::report::{DataOrigin, ForecastReport, ObservationSet};

pub use nea::client::NeaClient;
pub use nea::endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use nea::error::NeaError;
pub use nea::schema::{
    DailyForecast, FourDayForecast, NearestReading, RawWindSpeed, StationReadings,
    TwentyFourHourForecast,
};
pub use nea::snapshot::{NeaSnapshot, MAX_READING_DISTANCE_KM};
