//! Turns whatever a source produced (today's observation plus zero or more following days)
//! into exactly [`FORECAST_DAYS`] scored [`ForecastDay`]s.
//!
//! The normalizer has no error states and no network awareness. Records are placed by date,
//! missing days are padded with filler, malformed records are replaced by filler in their
//! slot, and surplus days are dropped. Filler is scored like any other day.

use crate::forecast::day::ForecastDay;
use crate::forecast::report::ObservationSet;
use crate::scoring::wind_speed::WindSpeed;
use crate::types::bounds::Bounds;
use crate::types::observation::WeatherObservation;
use chrono::{Days, NaiveDate};
use log::{debug, warn};

/// Length of every normalized forecast.
pub const FORECAST_DAYS: usize = 7;

/// The weather assumed for days no source reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FillerDefaults {
    pub condition: String,
    pub temperature: Bounds,
    pub wind_speed: WindSpeed,
    pub relative_humidity: Bounds,
}

impl Default for FillerDefaults {
    fn default() -> Self {
        Self {
            condition: "Partly Cloudy (Day)".to_string(),
            temperature: Bounds::new(25.0, 31.0),
            wind_speed: WindSpeed::parse("10-20"),
            relative_humidity: Bounds::new(60.0, 90.0),
        }
    }
}

impl FillerDefaults {
    fn observation(&self, date: NaiveDate) -> WeatherObservation {
        WeatherObservation::new(
            self.condition.clone(),
            self.temperature.low,
            self.temperature.high,
            self.wind_speed,
        )
        .with_date(date)
        .with_humidity(self.relative_humidity)
    }
}

/// Builds the fixed-length forecast sequence.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shoresquad::{ForecastNormalizer, WeatherObservation, FORECAST_DAYS};
///
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
/// let today = WeatherObservation::new("Fair (Day)", 25.0, 32.0, "10-20").with_rainfall(0.0);
///
/// let days = ForecastNormalizer::default().normalize(&today, &[], reference);
/// assert_eq!(days.len(), FORECAST_DAYS);
/// assert_eq!(days[0].day_name, "Today");
/// assert_eq!(days[1].day_name, "Tomorrow");
/// assert!(days[1].synthetic);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForecastNormalizer {
    filler: FillerDefaults,
}

impl ForecastNormalizer {
    pub fn with_filler(filler: FillerDefaults) -> Self {
        Self { filler }
    }

    pub fn filler(&self) -> &FillerDefaults {
        &self.filler
    }

    /// Normalizes today's observation and the following days into [`FORECAST_DAYS`] entries.
    ///
    /// Entry `i` is always dated `reference + i`, so the output is gap-free and in order.
    ///
    /// # Arguments
    ///
    /// * `today` - Entry 0, named "Today".
    /// * `multi_day` - The following days, soonest first. A record with a date goes into the
    ///   entry for that date; one without goes into the entry after the previous record.
    ///   Records outside the window, or for an entry already taken, are dropped.
    /// * `reference` - Today's calendar date. Entry 1 is named "Tomorrow", later entries get
    ///   the short weekday name of their date.
    pub fn normalize(
        &self,
        today: &WeatherObservation,
        multi_day: &[WeatherObservation],
        reference: NaiveDate,
    ) -> Vec<ForecastDay> {
        let mut slots: Vec<Option<ForecastDay>> = vec![None; FORECAST_DAYS];
        slots[0] = Some(self.entry(0, today, reference));

        let mut next = 1;
        for observation in multi_day {
            let index = match observation.date {
                Some(date) => match slot_for(reference, date) {
                    Some(index) => index,
                    None => {
                        debug!("Dropping record for {} outside the forecast window", date);
                        continue;
                    }
                },
                None => next,
            };
            if index >= FORECAST_DAYS {
                debug!("Dropping surplus record beyond {} forecast days", FORECAST_DAYS);
                continue;
            }
            if slots[index].is_some() {
                warn!("Duplicate record for forecast day {}; keeping the first", index);
                continue;
            }
            slots[index] = Some(self.entry(index, observation, reference));
            next = index + 1;
        }

        let missing = slots.iter().filter(|slot| slot.is_none()).count();
        if missing > 0 {
            debug!("Padding forecast with {} filler day(s)", missing);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.unwrap_or_else(|| self.filler_entry(index, reference)))
            .collect()
    }

    pub fn normalize_set(&self, set: &ObservationSet, reference: NaiveDate) -> Vec<ForecastDay> {
        self.normalize(&set.today, &set.multi_day, reference)
    }

    fn entry(
        &self,
        index: usize,
        observation: &WeatherObservation,
        reference: NaiveDate,
    ) -> ForecastDay {
        if !observation.is_well_formed() {
            warn!(
                "Malformed observation for forecast day {} ({:?}); using filler",
                index, observation.condition
            );
            return self.filler_entry(index, reference);
        }
        let date = offset_date(reference, index);
        ForecastDay::derive(date, day_name(index, date), observation.clone(), false)
    }

    fn filler_entry(&self, index: usize, reference: NaiveDate) -> ForecastDay {
        let date = offset_date(reference, index);
        ForecastDay::derive(
            date,
            day_name(index, date),
            self.filler.observation(date),
            true,
        )
    }
}

/// Entry index of `date`, when it falls after `reference` and inside the window.
fn slot_for(reference: NaiveDate, date: NaiveDate) -> Option<usize> {
    let offset = date.signed_duration_since(reference).num_days();
    usize::try_from(offset)
        .ok()
        .filter(|index| (1..FORECAST_DAYS).contains(index))
}

fn offset_date(reference: NaiveDate, index: usize) -> NaiveDate {
    reference
        .checked_add_days(Days::new(index as u64))
        .unwrap_or(NaiveDate::MAX)
}

fn day_name(index: usize, date: NaiveDate) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a").to_string(),
    }
}
