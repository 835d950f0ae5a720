//! The application context: everything one refresh needs, built once and passed around
//! explicitly.

use crate::error::ShoreSquadError;
use crate::forecast::fallback::synthetic_observations;
use crate::forecast::normalizer::ForecastNormalizer;
use crate::forecast::report::{DataOrigin, ForecastReport};
use crate::locate::NearestLocator;
use crate::nea::client::NeaClient;
use crate::nea::endpoint::DEFAULT_BASE_URL;
use crate::sites::{CleanupEvent, CleanupSite};
use crate::types::location::LatLon;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::time::Duration;

/// East Coast Park, Singapore.
pub const DEFAULT_LOCATION: LatLon = LatLon(1.3008, 103.9122);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Weather, sites and events for one squad location.
#[derive(Debug, Clone)]
pub struct ShoreSquad {
    client: NeaClient,
    normalizer: ForecastNormalizer,
    location: LatLon,
    sites: NearestLocator<CleanupSite>,
    events: Vec<CleanupEvent>,
}

#[bon]
impl ShoreSquad {
    /// Creates the context.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. Root of the NEA environment API. Defaults to
    ///   [`DEFAULT_BASE_URL`].
    /// * `.location(LatLon)`: Optional. Where forecasts and nearby sites are computed for.
    ///   Defaults to [`DEFAULT_LOCATION`].
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to 10 seconds.
    /// * `.normalizer(ForecastNormalizer)`: Optional. Defaults to the standard filler.
    /// * `.sites(Vec<CleanupSite>)`: Optional. Defaults to [`CleanupSite::samples`].
    /// * `.events(Vec<CleanupEvent>)`: Optional. Defaults to [`CleanupEvent::samples`].
    ///
    /// # Errors
    ///
    /// Returns [`ShoreSquadError::HttpClient`] if the HTTP client can't be initialised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shoresquad::{ShoreSquad, ShoreSquadError, LatLon};
    /// # fn run() -> Result<(), ShoreSquadError> {
    /// let squad = ShoreSquad::builder()
    ///     .location(LatLon(1.3817, 103.9536))
    ///     .build()?;
    /// assert_eq!(squad.location(), LatLon(1.3817, 103.9536));
    /// # Ok(())
    /// # }
    /// # run().unwrap();
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        location: Option<LatLon>,
        timeout: Option<Duration>,
        normalizer: Option<ForecastNormalizer>,
        sites: Option<Vec<CleanupSite>>,
        events: Option<Vec<CleanupEvent>>,
    ) -> Result<Self, ShoreSquadError> {
        let http = reqwest::Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ShoreSquadError::HttpClient)?;

        Ok(Self {
            client: NeaClient::new(
                http,
                base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ),
            normalizer: normalizer.unwrap_or_default(),
            location: location.unwrap_or(DEFAULT_LOCATION),
            sites: NearestLocator::new(sites.unwrap_or_else(CleanupSite::samples)),
            events: events.unwrap_or_else(CleanupEvent::samples),
        })
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn client(&self) -> &NeaClient {
        &self.client
    }

    /// Fetches live data and builds the week starting at `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoreSquadError::Nea`] if any endpoint fails or today's outlook is missing.
    pub async fn refresh_live(
        &self,
        reference: NaiveDate,
    ) -> Result<ForecastReport, ShoreSquadError> {
        let snapshot = self.client.fetch_snapshot().await?;
        let set = snapshot.into_observations(self.location, reference)?;
        let report = ForecastReport::build(&self.normalizer, &set, reference, DataOrigin::Live);
        info!(
            "Live forecast for {}: today {}",
            reference, report.current
        );
        Ok(report)
    }

    /// Like [`ShoreSquad::refresh_live`], but substitutes the synthetic dataset when the live
    /// path fails. Always produces a full week.
    pub async fn refresh(&self, reference: NaiveDate) -> ForecastReport {
        match self.refresh_live(reference).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Live weather unavailable, using fallback data: {}", e);
                ForecastReport::build(
                    &self.normalizer,
                    &synthetic_observations(reference),
                    reference,
                    DataOrigin::Fallback,
                )
            }
        }
    }

    /// [`ShoreSquad::refresh`] for the local calendar date.
    pub async fn refresh_today(&self) -> ForecastReport {
        self.refresh(Local::now().date_naive()).await
    }

    /// Cleanup sites near a location, closest first, with their distance in km.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: Optional. Defaults to the context location.
    /// * `.max_distance_km(f64)`: Optional. Defaults to `25.0`.
    /// * `.limit(usize)`: Optional. Defaults to `5`.
    #[builder]
    pub fn nearby_sites(
        &self,
        location: Option<LatLon>,
        max_distance_km: Option<f64>,
        limit: Option<usize>,
    ) -> Vec<(CleanupSite, f64)> {
        self.sites.query(
            location.unwrap_or(self.location),
            limit.unwrap_or(5),
            max_distance_km.unwrap_or(25.0),
        )
    }

    /// Events on or after `from`, soonest first.
    pub fn upcoming_events(&self, from: NaiveDate) -> Vec<&CleanupEvent> {
        let mut upcoming: Vec<&CleanupEvent> =
            self.events.iter().filter(|event| event.date >= from).collect();
        upcoming.sort_by_key(|event| event.starts_at());
        upcoming
    }

    pub fn events_at(&self, site_id: &str) -> Vec<&CleanupEvent> {
        self.events
            .iter()
            .filter(|event| event.site_id == site_id)
            .collect()
    }
}
