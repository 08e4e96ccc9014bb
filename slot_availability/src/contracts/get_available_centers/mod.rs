use crate::config::AvailabilityConfig;
use crate::contracts::{endpoint, FetchError};
use crate::data_transfer::{Center, Region};
use crate::wire::CentersResponse;
use anyhow::{anyhow, Context};
use itertools::Itertools;
use shared_kernel::http_client::HttpClient;
use shared_kernel::kolkata_date::KolkataDate;
use url::Url;

const CALENDAR_BY_DISTRICT: &str = "/api/v2/appointment/sessions/public/calendarByDistrict";

/// Finds the centers of a region that still have open sessions.
pub struct AvailableCentersFinder {
    client: HttpClient,
    settings: AvailabilityConfig,
}

impl AvailableCentersFinder {
    pub fn new(client: HttpClient, settings: AvailabilityConfig) -> Self {
        Self { client, settings }
    }

    fn calendar_url(&self, region: &Region, date: KolkataDate) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &endpoint(&self.settings.host, CALENDAR_BY_DISTRICT),
            &[
                ("district_id", region.id.to_string()),
                ("date", date.format(self.settings.date_format)),
            ],
        )
        .with_context(|| format!("Invalid availability host {}", self.settings.host))
        .map_err(FetchError::Network)
    }

    /// Centers come back with all of their sessions, including full ones,
    /// as long as at least one session has capacity.
    #[tracing::instrument(skip(self, region, date), fields(region = %region.name, %date), level = "debug")]
    pub async fn fetch_availability(
        &self,
        region: &Region,
        date: KolkataDate,
    ) -> Result<Vec<Center>, FetchError> {
        let url = self.calendar_url(region, date)?;
        let response = self.client.get_json::<CentersResponse>(url).await?;
        let centers = response
            .centers
            .into_iter()
            .map(Center::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| FetchError::Decode(anyhow!(err)))?;

        let total = centers.len();
        let available = centers
            .into_iter()
            .filter(Center::is_available)
            .collect_vec();
        tracing::debug!(total, available = available.len(), "Fetched centers");
        Ok(available)
    }
}
