//! Maps the four NEA payloads of one refresh into an [`ObservationSet`].

use crate::forecast::report::ObservationSet;
use crate::nea::endpoint::Endpoint;
use crate::nea::error::NeaError;
use crate::nea::schema::{
    DailyForecast, FourDayForecast, StationReadings, TwentyFourHourForecast,
};
use crate::types::location::LatLon;
use crate::types::observation::WeatherObservation;
use chrono::NaiveDate;
use log::{debug, warn};

/// Readings from stations further away than this are not attributed to the location.
pub const MAX_READING_DISTANCE_KM: f64 = 25.0;

/// The raw responses of one fan-out, fetched together.
#[derive(Debug, Clone)]
pub struct NeaSnapshot {
    pub twenty_four_hour: TwentyFourHourForecast,
    pub four_day: FourDayForecast,
    pub air_temperature: StationReadings,
    pub rainfall: StationReadings,
}

impl NeaSnapshot {
    /// Builds today's observation and the following days for `location`.
    ///
    /// Today comes from the latest 24-hour outlook, plus the rainfall and air temperature of
    /// the nearest reporting stations. The following days come from the latest four-day
    /// outlook; records that don't match the schema or aren't after `reference` are skipped,
    /// and the normalizer fills their days with filler.
    ///
    /// # Errors
    ///
    /// Returns [`NeaError::MissingForecast`] when the 24-hour response has no items.
    pub fn into_observations(
        self,
        location: LatLon,
        reference: NaiveDate,
    ) -> Result<ObservationSet, NeaError> {
        let today = self.today(location, reference)?;
        let multi_day = self.following_days(reference);
        Ok(ObservationSet { today, multi_day })
    }

    fn today(&self, location: LatLon, reference: NaiveDate) -> Result<WeatherObservation, NeaError> {
        let general = &self
            .twenty_four_hour
            .items
            .last()
            .ok_or(NeaError::MissingForecast(Endpoint::TwentyFourHourForecast))?
            .general;

        let mut today = WeatherObservation::new(
            general.forecast.clone(),
            general.temperature.low,
            general.temperature.high,
            general.wind.speed.normalize(),
        )
        .with_date(reference);
        today.relative_humidity = general.relative_humidity;

        match self.rainfall.nearest(location, MAX_READING_DISTANCE_KM) {
            Some(reading) => {
                debug!(
                    "Rainfall {} mm from station {} ({:.1} km away)",
                    reading.value, reading.station.name, reading.distance_km
                );
                today.rainfall = Some(reading.value);
            }
            None => warn!(
                "No rainfall station within {} km of {:?}",
                MAX_READING_DISTANCE_KM, location
            ),
        }
        match self.air_temperature.nearest(location, MAX_READING_DISTANCE_KM) {
            Some(reading) => {
                debug!(
                    "Air temperature {} °C from station {} ({:.1} km away)",
                    reading.value, reading.station.name, reading.distance_km
                );
                today.current_temperature = Some(reading.value);
            }
            None => warn!(
                "No air temperature station within {} km of {:?}",
                MAX_READING_DISTANCE_KM, location
            ),
        }

        Ok(today)
    }

    fn following_days(&self, reference: NaiveDate) -> Vec<WeatherObservation> {
        let Some(latest) = self.four_day.items.last() else {
            warn!("Four-day outlook has no items");
            return vec![];
        };

        latest
            .forecasts
            .iter()
            .filter_map(|record| {
                match serde_json::from_value::<DailyForecast>(record.clone()) {
                    Ok(day) => Some(day),
                    Err(e) => {
                        warn!("Skipping malformed four-day record: {}", e);
                        None
                    }
                }
            })
            .filter(|day| {
                let upcoming = day.date > reference;
                if !upcoming {
                    debug!("Skipping four-day record for {} (not after {})", day.date, reference);
                }
                upcoming
            })
            .map(|day| {
                let mut observation = WeatherObservation::new(
                    day.forecast,
                    day.temperature.low,
                    day.temperature.high,
                    day.wind.speed.normalize(),
                )
                .with_date(day.date);
                observation.relative_humidity = day.relative_humidity;
                observation
            })
            .collect()
    }
}
