use crate::config::LocationsConfig;
use crate::contracts::{endpoint, FetchError};
use crate::data_transfer::Region;
use crate::wire::DistrictsResponse;
use anyhow::{anyhow, Context};
use shared_kernel::http_client::HttpClient;
use url::Url;

/// Lists the districts of the configured state.
pub struct RegionsLister {
    client: HttpClient,
    settings: LocationsConfig,
}

impl RegionsLister {
    pub fn new(client: HttpClient, settings: LocationsConfig) -> Self {
        Self { client, settings }
    }

    fn regions_url(&self) -> Result<Url, FetchError> {
        let path = format!("/api/v2/admin/location/districts/{}", self.settings.state_id);
        Url::parse(&endpoint(&self.settings.host, &path))
            .with_context(|| format!("Invalid locations host {}", self.settings.host))
            .map_err(FetchError::Network)
    }

    #[tracing::instrument(skip(self), fields(state_id = self.settings.state_id), level = "debug")]
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
        let url = self.regions_url()?;
        let response = self.client.get_json::<DistrictsResponse>(url).await?;
        response
            .districts
            .into_iter()
            .map(Region::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| FetchError::Decode(anyhow!(err)))
    }
}
