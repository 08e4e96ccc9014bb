use anyhow::anyhow;
use serde::Deserialize;
use shared_kernel::kolkata_date::{DateFormat, KolkataDate};

#[derive(Debug, Deserialize, Clone)]
pub struct LocationsConfig {
    pub host: String,
    /// The parent area whose districts are monitored.
    pub state_id: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AvailabilityConfig {
    pub host: String,
    #[serde(default)]
    pub date_format: DateFormat,
    /// Fixed `YYYY-MM-DD` date to query instead of today.
    #[serde(default)]
    pub date: Option<String>,
}

impl AvailabilityConfig {
    pub fn target_date(&self) -> anyhow::Result<KolkataDate> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(KolkataDate::today()),
            Some(date) => date.parse().map_err(|err| anyhow!("availability.date: {err}")),
        }
    }
}
